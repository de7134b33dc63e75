//! Application configuration.
//!
//! Everything tunable lives in [`NeoWatchConfig`]. The composition root builds
//! it from the environment; tests construct it directly.

use std::time::Duration;

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::field::FieldSettings;
use crate::orbit::{BeltConfig, OrbitConfig};

/// Key used when `NASA_API_KEY` is unset. Heavily rate limited.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

/// Public NeoWs endpoint.
pub const DEFAULT_API_URL: &str = "https://api.nasa.gov/neo/rest/v1";

/// Default request timeout for the feed fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Resource, Clone, Debug)]
pub struct NeoWatchConfig {
    pub api_key: String,
    pub api_url: String,
    pub fetch_timeout: Duration,
    /// Fixed seed for a reproducible scene; entropy when `None`.
    pub seed: Option<u64>,
    pub orbit: OrbitConfig,
    pub belt: BeltConfig,
    pub field: FieldSettings,
    /// Line segments per orbit ring.
    pub ring_segments: usize,
    pub rings_visible: bool,
}

impl Default for NeoWatchConfig {
    fn default() -> Self {
        Self {
            api_key: DEMO_API_KEY.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            seed: None,
            orbit: OrbitConfig::default(),
            belt: BeltConfig::default(),
            field: FieldSettings::default(),
            ring_segments: 96,
            rings_visible: true,
        }
    }
}

impl NeoWatchConfig {
    /// Read `NASA_API_KEY`, `NEOWATCH_API_URL` and `NEOWATCH_SEED`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(key) = get("NASA_API_KEY") {
            config.api_key = key;
        }
        if let Some(url) = get("NEOWATCH_API_URL") {
            config.api_url = url;
        }
        if let Some(seed) = get("NEOWATCH_SEED") {
            match seed.trim().parse() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => warn!("Ignoring NEOWATCH_SEED={seed:?}: not an unsigned integer"),
            }
        }
        config
    }
}

/// Random source for everything randomized in the scene.
#[derive(Resource)]
pub struct SceneRng(pub StdRng);

impl SceneRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

impl Default for SceneRng {
    fn default() -> Self {
        Self::new(None)
    }
}
