//! Built-in demo records shown when the live feed cannot be reached.

use super::{CloseApproach, DiameterRange, NearEarthObject};
use crate::types::NeoId;

/// The demo data set, already sorted by approach time.
pub fn demo_bodies() -> Vec<NearEarthObject> {
    vec![
        NearEarthObject {
            id: NeoId::from("2000719"),
            name: "719 Albert (1911 MT)".into(),
            jpl_url: "https://ssd.jpl.nasa.gov/tools/sbdb_lookup.html#/?sstr=2000719".into(),
            hazardous: true,
            diameter_km: DiameterRange {
                min: 2.347,
                max: 5.249,
            },
            absolute_magnitude: Some(15.92),
            close_approaches: vec![CloseApproach {
                date: "2024-01-01".into(),
                date_full: Some("2024-Jan-01 12:00".into()),
                timestamp: Some(1_704_110_400),
                miss_distance_au: Some(0.0521),
                miss_distance_lunar: Some(20.27),
                miss_distance_km: Some(7_794_533.0),
                velocity_km_s: Some(15.0),
                orbiting_body: "Earth".into(),
            }],
        },
        NearEarthObject {
            id: NeoId::from("3426410"),
            name: "(2008 QV11)".into(),
            jpl_url: "https://ssd.jpl.nasa.gov/tools/sbdb_lookup.html#/?sstr=3426410".into(),
            hazardous: false,
            diameter_km: DiameterRange {
                min: 0.134,
                max: 0.300,
            },
            absolute_magnitude: Some(22.1),
            close_approaches: vec![CloseApproach {
                date: "2024-01-02".into(),
                date_full: Some("2024-Jan-02 08:30".into()),
                timestamp: Some(1_704_184_200),
                miss_distance_au: Some(0.1234),
                miss_distance_lunar: Some(48.01),
                miss_distance_km: Some(18_456_782.0),
                velocity_km_s: Some(8.73),
                orbiting_body: "Earth".into(),
            }],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neo::sort_by_approach;

    #[test]
    fn test_demo_set_is_sorted() {
        let bodies = demo_bodies();
        let mut sorted = bodies.clone();
        sort_by_approach(&mut sorted);
        assert_eq!(bodies, sorted);
    }

    #[test]
    fn test_demo_set_has_one_hazardous() {
        let hazardous = demo_bodies().iter().filter(|b| b.hazardous).count();
        assert_eq!(hazardous, 1);
    }
}
