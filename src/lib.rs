//! NEO Watch - Near-Earth Object Visualizer
//!
//! A library crate providing the NEO catalog, orbit model and Bevy plugins
//! for testing and integration purposes.

pub mod camera;
pub mod config;
pub mod field;
pub mod impact;
pub mod loader;
pub mod neo;
pub mod orbit;
pub mod render;
pub mod time;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;

use bevy::prelude::*;

/// Every plugin of the visualizer except Bevy's and egui's own.
///
/// Expects [`config::NeoWatchConfig`] and [`config::SceneRng`] to be inserted
/// beforehand, plus a [`loader::NeoSourceHandle`] unless demo data is wanted.
pub struct NeoWatchPlugin;

impl Plugin for NeoWatchPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            loader::LoaderPlugin,
            time::TimePlugin,
            camera::CameraPlugin,
            render::RenderPlugin,
            impact::ImpactPlugin,
            ui::UiPlugin,
        ));
    }
}
