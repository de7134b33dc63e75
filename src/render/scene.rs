//! Static scene: Earth, the Sun, the starfield and lights.

use bevy::prelude::*;
use rand::Rng;

use crate::config::SceneRng;

/// Earth radius in display units.
pub const EARTH_RADIUS: f32 = 3.0;

/// Where the Sun sits; far enough out that no orbit ring reaches it.
pub const SUN_POSITION: Vec3 = Vec3::new(90.0, 25.0, -140.0);

pub const SUN_RADIUS: f32 = 2.2;

const STAR_COUNT: usize = 2500;
const STAR_SHELL_RADIUS: f32 = 300.0;
const STAR_SHELL_DEPTH: f32 = 60.0;

/// Marker for the slowly spinning Sun mesh.
#[derive(Component)]
pub struct Sun;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (spawn_earth, spawn_sun, spawn_starfield, spawn_lighting),
        )
        .add_systems(Update, spin_sun);
    }
}

fn spawn_earth(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ocean = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(30, 64, 175),
        perceptual_roughness: 0.8,
        metallic: 0.1,
        ..default()
    });
    let atmosphere = materials.add(StandardMaterial {
        base_color: Color::srgba_u8(79, 195, 247, 40),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    commands
        .spawn((
            Name::new("Earth"),
            Mesh3d(meshes.add(Sphere::new(EARTH_RADIUS).mesh().uv(128, 64))),
            MeshMaterial3d(ocean),
            Transform::default(),
        ))
        .with_children(|earth| {
            earth.spawn((
                Mesh3d(meshes.add(Sphere::new(EARTH_RADIUS).mesh().uv(32, 16))),
                MeshMaterial3d(atmosphere),
                Transform::from_scale(Vec3::splat(1.05)),
            ));
        });
}

fn spawn_sun(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(255, 170, 0),
        emissive: LinearRgba::rgb(1.0, 0.87, 0.33) * 2.5,
        perceptual_roughness: 0.4,
        metallic: 0.1,
        ..default()
    });

    commands.spawn((
        Name::new("Sun"),
        Sun,
        Mesh3d(meshes.add(Sphere::new(SUN_RADIUS).mesh().uv(64, 64))),
        MeshMaterial3d(material),
        Transform::from_translation(SUN_POSITION),
        PointLight {
            intensity: 2_000_000.0,
            range: 400.0,
            color: Color::srgb(1.0, 0.95, 0.85),
            shadows_enabled: false,
            ..default()
        },
    ));
}

fn spin_sun(time: Res<Time>, mut suns: Query<&mut Transform, With<Sun>>) {
    for mut transform in &mut suns {
        transform.rotate_y(time.delta_secs() * 0.05);
    }
}

/// Scatter stars through a thick shell around the scene.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut rng: ResMut<SceneRng>,
) {
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE * 0.5,
        unlit: true,
        ..default()
    });
    let star_mesh = meshes.add(Sphere::new(0.3));

    let rng = &mut rng.0;
    for _ in 0..STAR_COUNT {
        let direction = loop {
            let candidate = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            let length = candidate.length();
            if length > 1e-3 && length <= 1.0 {
                break candidate / length;
            }
        };
        let distance = STAR_SHELL_RADIUS + rng.gen_range(0.0..STAR_SHELL_DEPTH);
        let scale = rng.gen_range(0.5..1.5);

        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_translation(direction * distance).with_scale(Vec3::splat(scale)),
        ));
    }

    info!("Spawned {STAR_COUNT} background stars");
}

fn spawn_lighting(mut commands: Commands) {
    // Key light
    commands.spawn((
        DirectionalLight {
            illuminance: 6000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Night-side fill
    commands.spawn((
        DirectionalLight {
            illuminance: 1200.0,
            color: Color::srgb_u8(79, 195, 247),
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-10.0, -5.0, -5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        PointLight {
            intensity: 50_000.0,
            range: 50.0,
            color: Color::srgb_u8(129, 212, 250),
            ..default()
        },
        Transform::from_xyz(5.0, 0.0, 5.0),
    ));

    info!("Scene lighting initialized");
}
