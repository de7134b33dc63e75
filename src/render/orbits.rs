//! Orbit ring rendering using Bevy Gizmos.
//!
//! Rings share the rotation used to advance the bodies, so every marker sits
//! on its own ring. The polylines only change when the field is rebuilt and
//! are cached per field generation.

use bevy::prelude::*;

use crate::config::NeoWatchConfig;
use crate::field::AsteroidField;

use super::field::FieldSet;
use super::highlight::{HoveredAsteroid, SelectedAsteroid};

/// Plugin providing orbit ring visualization.
pub struct OrbitRingPlugin;

impl Plugin for OrbitRingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RingCache>()
            .add_systems(Update, (toggle_rings, draw_orbit_rings).chain().after(FieldSet));
    }
}

/// Ring polylines for one field generation.
#[derive(Resource, Default)]
pub struct RingCache {
    generation: u64,
    rings: Vec<Vec<Vec3>>,
}

impl RingCache {
    /// Recompute the rings if the field has been rebuilt since last time.
    pub fn refresh(&mut self, field: &AsteroidField, segments: usize) -> &[Vec<Vec3>] {
        if self.generation != field.generation() || self.rings.len() != field.len() {
            self.rings = field
                .model()
                .orbits()
                .iter()
                .map(|orbit| orbit.ring_points(segments))
                .collect();
            self.generation = field.generation();
        }
        &self.rings
    }
}

fn toggle_rings(keys: Res<ButtonInput<KeyCode>>, mut config: ResMut<NeoWatchConfig>) {
    if keys.just_pressed(KeyCode::KeyO) {
        config.rings_visible = !config.rings_visible;
        info!(visible = config.rings_visible, "Orbit rings toggled");
    }
}

fn draw_orbit_rings(
    mut gizmos: Gizmos,
    config: Res<NeoWatchConfig>,
    field: Res<AsteroidField>,
    hovered: Res<HoveredAsteroid>,
    selected: Res<SelectedAsteroid>,
    mut cache: ResMut<RingCache>,
) {
    if !config.rings_visible {
        return;
    }

    let rings = cache.refresh(&field, config.ring_segments);
    for ((ring, body), id) in rings.iter().zip(field.bodies()).zip(field.ids()) {
        let emphasized = hovered.id.as_ref() == Some(id) || selected.id.as_ref() == Some(id);
        let alpha = if emphasized { 0.7 } else { 0.2 };
        let color = if body.hazardous {
            Color::srgba(1.0, 0.27, 0.27, alpha)
        } else {
            Color::srgba(0.53, 0.53, 0.53, alpha)
        };
        gizmos.linestrip(ring.iter().copied(), color);
    }
}
