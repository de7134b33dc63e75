//! NeoWs feed wire format.
//!
//! The API ships most measurements as decimal strings. Everything here is
//! decoded leniently: a missing or unparsable number becomes `None` on the
//! domain record instead of failing the whole feed.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::{CloseApproach, DiameterRange, NearEarthObject, NetworkError, sort_by_approach};
use crate::types::{NeoId, parse_date_to_unix};

/// Top-level `/feed` response.
#[derive(Debug, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub element_count: usize,
    /// NEOs grouped by approach date (`YYYY-MM-DD`).
    #[serde(default)]
    pub near_earth_objects: BTreeMap<String, Vec<WireNeo>>,
}

#[derive(Debug, Deserialize)]
pub struct WireNeo {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nasa_jpl_url: String,
    #[serde(default)]
    pub is_potentially_hazardous_asteroid: bool,
    #[serde(default)]
    pub absolute_magnitude_h: Option<Lenient>,
    #[serde(default)]
    pub estimated_diameter: WireDiameter,
    #[serde(default)]
    pub close_approach_data: Vec<WireApproach>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireDiameter {
    #[serde(default)]
    pub kilometers: Option<WireDiameterRange>,
}

#[derive(Debug, Deserialize)]
pub struct WireDiameterRange {
    pub estimated_diameter_min: Lenient,
    pub estimated_diameter_max: Lenient,
}

#[derive(Debug, Deserialize)]
pub struct WireApproach {
    #[serde(default)]
    pub close_approach_date: String,
    #[serde(default)]
    pub close_approach_date_full: Option<String>,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub epoch_date_close_approach: Option<i64>,
    #[serde(default)]
    pub relative_velocity: WireVelocity,
    #[serde(default)]
    pub miss_distance: WireMissDistance,
    #[serde(default)]
    pub orbiting_body: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireVelocity {
    #[serde(default)]
    pub kilometers_per_second: Option<Lenient>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireMissDistance {
    #[serde(default)]
    pub astronomical: Option<Lenient>,
    #[serde(default)]
    pub lunar: Option<Lenient>,
    #[serde(default)]
    pub kilometers: Option<Lenient>,
}

/// A number that may arrive either as JSON number or as decimal string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Lenient {
    Number(f64),
    Text(String),
}

impl Lenient {
    /// Finite value, or `None` for unparsable text, NaN or infinity.
    pub fn value(&self) -> Option<f64> {
        let v = match self {
            Lenient::Number(v) => *v,
            Lenient::Text(s) => s.trim().parse().ok()?,
        };
        v.is_finite().then_some(v)
    }
}

fn lenient(value: &Option<Lenient>) -> Option<f64> {
    value.as_ref().and_then(Lenient::value)
}

impl From<WireApproach> for CloseApproach {
    fn from(wire: WireApproach) -> Self {
        let timestamp = wire
            .epoch_date_close_approach
            .map(|ms| ms.div_euclid(1000))
            .or_else(|| parse_date_to_unix(&wire.close_approach_date));

        Self {
            timestamp,
            miss_distance_au: lenient(&wire.miss_distance.astronomical).filter(|d| *d >= 0.0),
            miss_distance_lunar: lenient(&wire.miss_distance.lunar),
            miss_distance_km: lenient(&wire.miss_distance.kilometers),
            velocity_km_s: lenient(&wire.relative_velocity.kilometers_per_second),
            date: wire.close_approach_date,
            date_full: wire.close_approach_date_full,
            orbiting_body: wire.orbiting_body,
        }
    }
}

impl From<WireNeo> for NearEarthObject {
    fn from(wire: WireNeo) -> Self {
        let diameter_km = wire
            .estimated_diameter
            .kilometers
            .map(|km| DiameterRange {
                min: km.estimated_diameter_min.value().unwrap_or(0.0),
                max: km.estimated_diameter_max.value().unwrap_or(0.0),
            })
            .unwrap_or_default();

        let name = if wire.name.is_empty() {
            wire.id.clone()
        } else {
            wire.name
        };

        Self {
            id: NeoId(wire.id),
            name,
            jpl_url: wire.nasa_jpl_url,
            hazardous: wire.is_potentially_hazardous_asteroid,
            diameter_km,
            absolute_magnitude: lenient(&wire.absolute_magnitude_h),
            close_approaches: wire.close_approach_data.into_iter().map(Into::into).collect(),
        }
    }
}

impl FeedResponse {
    /// Flatten the per-date groups into one list sorted by approach time.
    pub fn into_bodies(self) -> Vec<NearEarthObject> {
        let mut bodies: Vec<NearEarthObject> = self
            .near_earth_objects
            .into_values()
            .flatten()
            .map(Into::into)
            .collect();
        sort_by_approach(&mut bodies);
        bodies
    }
}

/// Parse a `/feed` response body into NEO records sorted by approach time.
pub fn parse_feed(body: &str) -> Result<Vec<NearEarthObject>, NetworkError> {
    let response: FeedResponse = serde_json::from_str(body)?;
    Ok(response.into_bodies())
}
