//! Rendering systems for the NEO viewer.
//!
//! This module provides the static scene, the instanced NEO markers with
//! their orbit rings, and the decorative background belt.

mod belt;
pub mod field;
pub mod highlight;
mod orbits;
pub mod scene;

use bevy::prelude::*;

use self::belt::BeltPlugin;
use self::field::FieldPlugin;
use self::highlight::HighlightPlugin;
use self::orbits::OrbitRingPlugin;
use self::scene::ScenePlugin;

// Re-export for use in other modules
pub use self::field::{FieldInstance, FieldSet, rebuild_field, tick_field};
pub use self::highlight::{HoveredAsteroid, SelectedAsteroid};
pub use self::orbits::RingCache;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            ScenePlugin,
            FieldPlugin,
            BeltPlugin,
            OrbitRingPlugin,
            HighlightPlugin,
        ));
    }
}
