//! Bevy glue for the NEO field.
//!
//! Each frame, in order:
//! 1. `rebuild_field` swaps in a new field when the catalog changed
//! 2. `tick_field` advances orbits and rewrites the instance buffer
//! 3. `sync_instances` mirrors the buffer onto the marker entities
//! 4. `pick_asteroids` resolves the pointer against the fresh buffer

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;
use rand::Rng;

use crate::camera::MainCamera;
use crate::config::{NeoWatchConfig, SceneRng};
use crate::field::AsteroidField;
use crate::loader::{BodyCatalog, CatalogSet};
use crate::time::SimulationClock;
use crate::ui::notifications::{NotificationKind, Notifications};

use super::highlight::{HoveredAsteroid, SelectedAsteroid};

/// Pointer travel, in pixels, beyond which a press counts as a drag.
const CLICK_SLOP: f32 = 4.0;

/// Rock tints for non-hazardous markers.
const ROCK_COLORS: [Color; 4] = [
    Color::srgb(0.55, 0.45, 0.33),
    Color::srgb(0.63, 0.32, 0.18),
    Color::srgb(0.41, 0.41, 0.41),
    Color::srgb(0.50, 0.50, 0.50),
];

/// Systems that update the NEO field, in frame order.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSet;

/// One marker entity, drawing instance `index` of the field.
#[derive(Component, Debug, Clone, Copy)]
pub struct FieldInstance {
    pub index: usize,
}

/// Shared mesh and materials for all markers.
#[derive(Resource)]
pub struct FieldAssets {
    pub mesh: Handle<Mesh>,
    pub hazardous: Handle<StandardMaterial>,
    pub rock: Vec<Handle<StandardMaterial>>,
    /// Field generation the current marker entities belong to.
    pub spawned_generation: u64,
}

pub struct FieldPlugin;

impl Plugin for FieldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AsteroidField>()
            .add_systems(Startup, (setup_field_assets, register_pick_logging))
            .configure_sets(Update, FieldSet.after(CatalogSet))
            .add_systems(
                Update,
                (rebuild_field, tick_field, sync_instances, pick_asteroids)
                    .chain()
                    .in_set(FieldSet),
            );
    }
}

fn setup_field_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let hazardous = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.27, 0.27),
        emissive: LinearRgba::rgb(0.27, 0.0, 0.0),
        perceptual_roughness: 0.8,
        ..default()
    });
    let rock = ROCK_COLORS
        .iter()
        .map(|&color| {
            materials.add(StandardMaterial {
                base_color: color,
                perceptual_roughness: 0.9,
                metallic: 0.1,
                ..default()
            })
        })
        .collect();

    commands.insert_resource(FieldAssets {
        mesh: meshes.add(Sphere::new(1.0).mesh().uv(16, 12)),
        hazardous,
        rock,
        spawned_generation: 0,
    });
}

fn register_pick_logging(mut field: ResMut<AsteroidField>) {
    let picker = field.picker_mut();
    picker.on_hover(|id| debug!(?id, "Hovered asteroid changed"));
    picker.on_click(|id| info!(%id, "Asteroid clicked"));
}

/// Rebuild the field wholesale when the catalog has been replaced.
pub fn rebuild_field(
    catalog: Res<BodyCatalog>,
    config: Res<NeoWatchConfig>,
    mut rng: ResMut<SceneRng>,
    mut field: ResMut<AsteroidField>,
    mut hovered: ResMut<HoveredAsteroid>,
    mut selected: ResMut<SelectedAsteroid>,
) {
    if !catalog.is_changed() {
        return;
    }

    field.replace_bodies(catalog.bodies.clone(), &config.orbit, &mut rng.0);
    hovered.id = None;
    let stale = selected
        .id
        .as_ref()
        .is_some_and(|id| field.index_of(id).is_none());
    if stale {
        selected.id = None;
    }

    info!(
        count = field.len(),
        generation = field.generation(),
        "Rebuilt asteroid field"
    );
}

/// Advance the field by this frame's clock delta.
pub fn tick_field(
    clock: Res<SimulationClock>,
    config: Res<NeoWatchConfig>,
    catalog: Res<BodyCatalog>,
    hovered: Res<HoveredAsteroid>,
    mut rng: ResMut<SceneRng>,
    mut field: ResMut<AsteroidField>,
) {
    let hovered_index = hovered.id.as_ref().and_then(|id| field.index_of(id));
    if let Err(err) = field.tick(clock.delta, clock.elapsed, hovered_index, &config.field) {
        error!("Asteroid instance buffer out of sync: {err}");
        debug_assert!(false, "asteroid instance buffer out of sync: {err}");
        field.replace_bodies(catalog.bodies.clone(), &config.orbit, &mut rng.0);
    }
}

/// Respawn marker entities after a rebuild; otherwise copy dirty transforms.
fn sync_instances(
    mut commands: Commands,
    assets: Option<ResMut<FieldAssets>>,
    mut field: ResMut<AsteroidField>,
    mut rng: ResMut<SceneRng>,
    mut instances: Query<(Entity, &FieldInstance, &mut Transform)>,
) {
    let Some(mut assets) = assets else {
        return;
    };

    if assets.spawned_generation != field.generation() {
        for (entity, _, _) in &instances {
            commands.entity(entity).despawn();
        }
        for (index, body) in field.bodies().iter().enumerate() {
            let material = if body.hazardous {
                assets.hazardous.clone()
            } else {
                assets.rock[rng.0.gen_range(0..assets.rock.len())].clone()
            };
            let transform = field.buffer().get(index).copied().unwrap_or_default();
            commands.spawn((
                FieldInstance { index },
                Mesh3d(assets.mesh.clone()),
                MeshMaterial3d(material),
                transform,
            ));
        }
        assets.spawned_generation = field.generation();
        info!(count = field.len(), "Spawned asteroid markers");
        return;
    }

    if !field.buffer_mut().take_dirty() {
        return;
    }
    for (_, instance, mut transform) in &mut instances {
        if let Some(written) = field.buffer().get(instance.index) {
            *transform = *written;
        }
    }
}

/// Resolve this frame's hover against the field.
///
/// A pointer captured by the UI counts as leaving every marker, so the
/// picker reports `None` once and the hover resource is cleared. Panels that
/// hover a body themselves run later in the frame and set it again.
pub fn resolve_hover(
    field: &mut AsteroidField,
    ray: Option<Ray3d>,
    ui_captured: bool,
    padding: f32,
    hovered: &mut HoveredAsteroid,
) -> Option<usize> {
    let ray = if ui_captured { None } else { ray };
    let hit = field.pointer_moved(ray, padding);
    let hit_id = hit.map(|index| field.ids()[index].clone());
    if hovered.id != hit_id {
        hovered.id = hit_id;
    }
    hit
}

/// Turn the cursor into hover and click results.
///
/// A press that travels further than [`CLICK_SLOP`] is a camera drag, not a
/// click.
#[allow(clippy::too_many_arguments)]
fn pick_asteroids(
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mouse: Res<ButtonInput<MouseButton>>,
    config: Res<NeoWatchConfig>,
    mut contexts: EguiContexts,
    mut field: ResMut<AsteroidField>,
    mut hovered: ResMut<HoveredAsteroid>,
    mut selected: ResMut<SelectedAsteroid>,
    mut notifications: ResMut<Notifications>,
    mut press_origin: Local<Option<Vec2>>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    let ui_captured = contexts.ctx_mut().is_ok_and(|ctx| ctx.wants_pointer_input());
    let cursor = window.cursor_position();
    let ray = cursor.and_then(|cursor| camera.viewport_to_world(camera_transform, cursor).ok());
    let padding = config.field.pick_padding;

    resolve_hover(&mut field, ray, ui_captured, padding, &mut hovered);
    if ui_captured {
        *press_origin = None;
        return;
    }

    if mouse.just_pressed(MouseButton::Left) {
        *press_origin = cursor;
    }
    if !mouse.just_released(MouseButton::Left) {
        return;
    }
    let (Some(origin), Some(cursor), Some(ray)) = (press_origin.take(), cursor, ray) else {
        return;
    };
    if origin.distance(cursor) > CLICK_SLOP {
        return;
    }

    if let Some(index) = field.pointer_clicked(ray, padding) {
        let body = &field.bodies()[index];
        notifications.push(
            NotificationKind::Info,
            "Asteroid selected",
            format!("Now viewing: {}", body.name),
        );
        selected.id = Some(body.id.clone());
    }
}
