//! NEO Watch - Near-Earth Object Visualizer
//!
//! A desktop application showing this week's approaching asteroids, as
//! reported by NASA's NeoWs feed, in orbit around the Earth.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use neowatch::NeoWatchPlugin;
use neowatch::config::{NeoWatchConfig, SceneRng};
use neowatch::loader::NeoSourceHandle;
use neowatch::neo::NeoWsClient;

fn main() {
    let config = NeoWatchConfig::from_env();

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "NEO Watch".into(),
            ..default()
        }),
        ..default()
    }))
    .add_plugins(EguiPlugin::default())
    .insert_resource(ClearColor(Color::BLACK))
    // Insert resources before plugins that depend on them
    .insert_resource(SceneRng::new(config.seed));

    match NeoWsClient::new(&config.api_url, config.api_key.clone(), config.fetch_timeout) {
        Ok(client) => {
            app.insert_resource(NeoSourceHandle::new(client));
        }
        Err(err) => warn!("Could not create NeoWs client, using demo data: {err}"),
    }

    app.insert_resource(config)
        .add_plugins(NeoWatchPlugin)
        .run();
}
