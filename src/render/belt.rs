//! Background belt rendering.

use bevy::prelude::*;

use crate::config::{NeoWatchConfig, SceneRng};
use crate::field::belt::BeltField;
use crate::time::SimulationClock;

#[derive(Component, Debug, Clone, Copy)]
pub struct BeltInstance {
    pub index: usize,
}

pub struct BeltPlugin;

impl Plugin for BeltPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_belt)
            .add_systems(Update, (tick_belt, sync_belt).chain());
    }
}

fn spawn_belt(
    mut commands: Commands,
    config: Res<NeoWatchConfig>,
    mut rng: ResMut<SceneRng>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut belt = BeltField::build(&config.belt, &mut rng.0);
    // Place the rocks before the first frame draws them
    if let Err(err) = belt.tick(0.0, &mut rng.0) {
        error!("Belt instance buffer out of sync: {err}");
    }

    let mesh = meshes.add(Sphere::new(1.0).mesh().uv(8, 6));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.53, 0.53, 0.53),
        perceptual_roughness: 0.8,
        ..default()
    });

    for (index, transform) in belt.buffer().transforms().iter().enumerate() {
        commands.spawn((
            BeltInstance { index },
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            *transform,
        ));
    }

    info!(count = belt.len(), "Spawned background belt");
    commands.insert_resource(belt);
}

fn tick_belt(
    clock: Res<SimulationClock>,
    mut rng: ResMut<SceneRng>,
    belt: Option<ResMut<BeltField>>,
) {
    let Some(mut belt) = belt else {
        return;
    };
    if clock.paused {
        return;
    }
    if let Err(err) = belt.tick(clock.delta, &mut rng.0) {
        error!("Belt instance buffer out of sync: {err}");
    }
}

fn sync_belt(belt: Option<ResMut<BeltField>>, mut rocks: Query<(&BeltInstance, &mut Transform)>) {
    let Some(mut belt) = belt else {
        return;
    };
    if !belt.buffer_mut().take_dirty() {
        return;
    }
    for (rock, mut transform) in &mut rocks {
        if let Some(written) = belt.buffer().get(rock.index) {
            *transform = *written;
        }
    }
}
