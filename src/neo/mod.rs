//! Near-earth object records and the data source that supplies them.
//!
//! The render core only ever sees [`NearEarthObject`] values. Where they come
//! from is decided at the composition root by injecting a [`NeoSource`]:
//! the live NeoWs client in the application, a canned source in tests.

mod client;
mod demo;
pub mod wire;

use crate::types::{LUNAR_DISTANCE_KM, NeoId, SECONDS_PER_DAY, unix_to_date_string};

pub use client::NeoWsClient;
pub use demo::demo_bodies;
pub use wire::parse_feed;

/// Maximum span of a single NeoWs feed query, in days.
pub const MAX_FEED_DAYS: i64 = 7;

/// Errors raised while fetching NEO data.
#[derive(thiserror::Error, Debug)]
pub enum NetworkError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("NeoWs API returned status {code}")]
    Status { code: u16 },

    #[error("malformed feed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid api url: {0}")]
    Url(#[from] url::ParseError),
}

/// A tracked asteroid as seen by the visualization.
#[derive(Clone, Debug, PartialEq)]
pub struct NearEarthObject {
    pub id: NeoId,
    pub name: String,
    pub jpl_url: String,
    /// NASA's "potentially hazardous asteroid" classification.
    pub hazardous: bool,
    pub diameter_km: DiameterRange,
    /// Absolute magnitude (H).
    pub absolute_magnitude: Option<f64>,
    /// Close approaches, earliest first as delivered by the API.
    pub close_approaches: Vec<CloseApproach>,
}

/// Estimated diameter bounds in kilometers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DiameterRange {
    pub min: f64,
    pub max: f64,
}

/// One close approach of a NEO to a body.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CloseApproach {
    /// Approach date as `YYYY-MM-DD`.
    pub date: String,
    /// Human-readable date and time, e.g. `2024-Jan-01 12:00`.
    pub date_full: Option<String>,
    /// Approach time as a Unix timestamp in seconds.
    pub timestamp: Option<i64>,
    pub miss_distance_au: Option<f64>,
    pub miss_distance_lunar: Option<f64>,
    pub miss_distance_km: Option<f64>,
    pub velocity_km_s: Option<f64>,
    pub orbiting_body: String,
}

impl NearEarthObject {
    /// The first (nearest in time) close approach, if any.
    pub fn first_approach(&self) -> Option<&CloseApproach> {
        self.close_approaches.first()
    }

    /// Miss distance of the first approach in AU, if known.
    pub fn approach_distance_au(&self) -> Option<f64> {
        self.first_approach().and_then(|a| a.miss_distance_au)
    }

    /// Timestamp of the first approach, if known.
    pub fn approach_timestamp(&self) -> Option<i64> {
        self.first_approach().and_then(|a| a.timestamp)
    }

    /// Miss distance of the first approach in lunar distances.
    ///
    /// Falls back to converting kilometers when the lunar figure is absent.
    pub fn approach_distance_lunar(&self) -> Option<f64> {
        let approach = self.first_approach()?;
        approach
            .miss_distance_lunar
            .or_else(|| approach.miss_distance_km.map(|km| km / LUNAR_DISTANCE_KM))
    }

    /// Relative velocity at first approach in km/s.
    pub fn approach_velocity_km_s(&self) -> Option<f64> {
        self.first_approach().and_then(|a| a.velocity_km_s)
    }
}

/// Sort NEOs by first approach time, earliest first.
///
/// Records without a usable timestamp keep their relative order and go last.
pub fn sort_by_approach(bodies: &mut [NearEarthObject]) {
    bodies.sort_by_key(|neo| match neo.approach_timestamp() {
        Some(ts) => (0, ts),
        None => (1, 0),
    });
}

/// Inclusive date window for a feed query, as Unix timestamps (seconds).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: i64,
    pub end: i64,
}

impl DateRange {
    /// A window of [`MAX_FEED_DAYS`] days starting at `start`.
    pub fn week_starting(start: i64) -> Self {
        Self {
            start,
            end: start + MAX_FEED_DAYS * SECONDS_PER_DAY,
        }
    }

    pub fn start_date(&self) -> String {
        unix_to_date_string(self.start)
    }

    pub fn end_date(&self) -> String {
        unix_to_date_string(self.end)
    }
}

/// Anything that can produce the list of approaching NEOs for a date window.
pub trait NeoSource: Send + Sync + 'static {
    fn fetch_approaching_bodies(
        &self,
        range: &DateRange,
    ) -> Result<Vec<NearEarthObject>, NetworkError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;

    #[test]
    fn test_week_window_dates() {
        // 2024-01-01T10:00:00Z
        let range = DateRange::week_starting(1_704_103_200);
        assert_eq!(range.start_date(), "2024-01-01");
        assert_eq!(range.end_date(), "2024-01-08");
    }

    #[test]
    fn test_sort_by_approach_puts_unknown_last() {
        let mut bodies = vec![
            fixtures::neo_without_approach("c"),
            fixtures::neo_at_time("b", 200),
            fixtures::neo_at_time("a", 100),
        ];
        sort_by_approach(&mut bodies);
        let ids: Vec<_> = bodies.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_lunar_distance_falls_back_to_km() {
        let mut neo = fixtures::neo_at_distance("x", 0.01);
        neo.close_approaches[0].miss_distance_lunar = None;
        neo.close_approaches[0].miss_distance_km = Some(LUNAR_DISTANCE_KM * 2.0);
        assert_eq!(neo.approach_distance_lunar(), Some(2.0));
    }
}
