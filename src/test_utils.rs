//! Test utilities shared by the unit tests.
//!
//! Provides NEO record fixtures and a deterministic RNG so orbit derivation
//! is reproducible across runs.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::neo::{CloseApproach, DiameterRange, NearEarthObject};
use crate::types::NeoId;

/// Fixtures for creating test NEO records.
pub mod fixtures {
    use super::*;

    /// Seed used by [`rng`].
    pub const SEED: u64 = 0x5eed_0fa5;

    /// A deterministic RNG for orbit derivation.
    pub fn rng() -> StdRng {
        StdRng::seed_from_u64(SEED)
    }

    /// A small, harmless body with no close-approach data.
    pub fn neo_without_approach(id: &str) -> NearEarthObject {
        NearEarthObject {
            id: NeoId::from(id),
            name: format!("({id})"),
            jpl_url: String::new(),
            hazardous: false,
            diameter_km: DiameterRange { min: 0.1, max: 0.2 },
            absolute_magnitude: Some(22.0),
            close_approaches: Vec::new(),
        }
    }

    /// A body whose first approach misses Earth by `distance_au`.
    pub fn neo_at_distance(id: &str, distance_au: f64) -> NearEarthObject {
        let mut neo = neo_without_approach(id);
        neo.close_approaches.push(CloseApproach {
            date: "2024-01-01".to_string(),
            timestamp: Some(1_704_067_200),
            miss_distance_au: Some(distance_au),
            miss_distance_lunar: Some(distance_au * 389.17),
            miss_distance_km: Some(distance_au * crate::types::AU_TO_KM),
            velocity_km_s: Some(12.0),
            orbiting_body: "Earth".to_string(),
            ..Default::default()
        });
        neo
    }

    /// Same as [`neo_at_distance`] but flagged potentially hazardous.
    pub fn hazardous_neo_at_distance(id: &str, distance_au: f64) -> NearEarthObject {
        NearEarthObject {
            hazardous: true,
            ..neo_at_distance(id, distance_au)
        }
    }

    /// A body whose first approach happens at `timestamp` (Unix seconds).
    pub fn neo_at_time(id: &str, timestamp: i64) -> NearEarthObject {
        let mut neo = neo_at_distance(id, 0.2);
        neo.close_approaches[0].timestamp = Some(timestamp);
        neo
    }

    /// `count` bodies at distinct distances between 0.13 and 0.5 AU.
    pub fn spread_bodies(count: usize) -> Vec<NearEarthObject> {
        (0..count)
            .map(|i| {
                let distance = 0.13 + 0.37 * i as f64 / count.max(1) as f64;
                neo_at_distance(&format!("neo-{i}"), distance)
            })
            .collect()
    }
}
