//! Common test utilities for integration tests.

#![allow(dead_code)]

use neowatch::neo::{CloseApproach, DiameterRange, NearEarthObject};
use neowatch::types::{AU_TO_KM, NeoId};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Deterministic RNG for orbit derivation.
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// A body with no close-approach data.
pub fn neo_without_approach(id: &str) -> NearEarthObject {
    NearEarthObject {
        id: NeoId::new(id),
        name: format!("({id})"),
        jpl_url: String::new(),
        hazardous: false,
        diameter_km: DiameterRange { min: 0.1, max: 0.3 },
        absolute_magnitude: Some(21.5),
        close_approaches: Vec::new(),
    }
}

/// A body whose first approach misses Earth by `distance_au`.
pub fn neo_at_distance(id: &str, distance_au: f64) -> NearEarthObject {
    let mut neo = neo_without_approach(id);
    neo.close_approaches.push(CloseApproach {
        date: "2024-03-10".to_string(),
        timestamp: Some(1_710_028_800),
        miss_distance_au: Some(distance_au),
        miss_distance_km: Some(distance_au * AU_TO_KM),
        velocity_km_s: Some(18.0),
        orbiting_body: "Earth".to_string(),
        ..Default::default()
    });
    neo
}

/// `count` bodies that all map to the same display radius.
pub fn bodies_at_distance(count: usize, distance_au: f64) -> Vec<NearEarthObject> {
    (0..count)
        .map(|i| neo_at_distance(&format!("same-{i}"), distance_au))
        .collect()
}

/// `count` bodies at distinct distances.
pub fn spread_bodies(count: usize) -> Vec<NearEarthObject> {
    (0..count)
        .map(|i| neo_at_distance(&format!("spread-{i}"), 0.14 + 0.02 * i as f64))
        .collect()
}

/// A trimmed-down `/feed` response covering two dates.
///
/// `2001` approaches later than `2002` even though its date group sorts
/// first, and `2003` carries an unparsable miss distance.
pub const FEED_FIXTURE: &str = r#"{
  "element_count": 3,
  "near_earth_objects": {
    "2024-03-10": [
      {
        "id": "2001",
        "name": "(2024 AA)",
        "nasa_jpl_url": "https://ssd.jpl.nasa.gov/tools/sbdb_lookup.html#/?sstr=2001",
        "absolute_magnitude_h": 24.1,
        "is_potentially_hazardous_asteroid": false,
        "estimated_diameter": {
          "kilometers": {
            "estimated_diameter_min": 0.03,
            "estimated_diameter_max": 0.07
          }
        },
        "close_approach_data": [
          {
            "close_approach_date": "2024-03-10",
            "close_approach_date_full": "2024-Mar-10 18:00",
            "epoch_date_close_approach": 1710093600000,
            "relative_velocity": { "kilometers_per_second": "9.87" },
            "miss_distance": {
              "astronomical": "0.1204",
              "lunar": "46.83",
              "kilometers": "18011573.2"
            },
            "orbiting_body": "Earth"
          }
        ]
      },
      {
        "id": "2002",
        "name": "(2024 AB)",
        "nasa_jpl_url": "https://ssd.jpl.nasa.gov/tools/sbdb_lookup.html#/?sstr=2002",
        "absolute_magnitude_h": 19.3,
        "is_potentially_hazardous_asteroid": true,
        "estimated_diameter": {
          "kilometers": {
            "estimated_diameter_min": 0.35,
            "estimated_diameter_max": 0.78
          }
        },
        "close_approach_data": [
          {
            "close_approach_date": "2024-03-10",
            "epoch_date_close_approach": 1710043200000,
            "relative_velocity": { "kilometers_per_second": "21.4" },
            "miss_distance": { "astronomical": "0.3012" },
            "orbiting_body": "Earth"
          }
        ]
      }
    ],
    "2024-03-11": [
      {
        "id": "2003",
        "name": "(2024 AC)",
        "is_potentially_hazardous_asteroid": false,
        "estimated_diameter": {
          "kilometers": {
            "estimated_diameter_min": "0.1",
            "estimated_diameter_max": "0.2"
          }
        },
        "close_approach_data": [
          {
            "close_approach_date": "2024-03-11",
            "epoch_date_close_approach": 1710151200000,
            "relative_velocity": { "kilometers_per_second": "12.0" },
            "miss_distance": { "astronomical": "unknown" },
            "orbiting_body": "Earth"
          }
        ]
      }
    ]
  }
}"#;
