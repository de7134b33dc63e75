//! Orbit camera around Earth.
//!
//! Left-drag rotates the view around the origin, the scroll wheel zooms.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
};
use bevy_egui::EguiContexts;

/// Closest the camera may get to Earth.
pub const MIN_DISTANCE: f32 = 8.0;

/// Farthest the camera may get from Earth.
pub const MAX_DISTANCE: f32 = 50.0;

/// Starting distance from the origin.
pub const DEFAULT_DISTANCE: f32 = 15.0;

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 45.0;

/// Radians of rotation per pixel dragged.
pub const ROTATE_SPEED: f32 = 0.005;

/// Fraction of the current distance per scroll line.
pub const ZOOM_SPEED: f32 = 0.1;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Spherical coordinates of the camera around the origin.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CameraRig {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: DEFAULT_DISTANCE,
        }
    }
}

impl CameraRig {
    pub fn rotate(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ROTATE_SPEED;
        // Stop short of the poles so `looking_at` keeps a stable up vector
        let limit = std::f32::consts::FRAC_PI_2 - 0.05;
        self.pitch = (self.pitch + delta.y * ROTATE_SPEED).clamp(-limit, limit);
    }

    pub fn zoom(&mut self, scroll_lines: f32) {
        let factor = 1.0 - scroll_lines * ZOOM_SPEED;
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn transform(&self) -> Transform {
        let offset = Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, 0.0)
            * Vec3::new(0.0, 0.0, self.distance);
        Transform::from_translation(offset).looking_at(Vec3::ZERO, Vec3::Y)
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraRig>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (camera_controls, apply_camera_rig).chain());
    }
}

fn setup_camera(mut commands: Commands, rig: Res<CameraRig>) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        rig.transform(),
        MainCamera,
    ));
}

/// Handle drag-to-rotate and scroll-to-zoom, unless egui owns the pointer.
fn camera_controls(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut contexts: EguiContexts,
    mut rig: ResMut<CameraRig>,
) {
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_pointer_input()
    {
        return;
    }

    if mouse_buttons.pressed(MouseButton::Left) && mouse_motion.delta != Vec2::ZERO {
        rig.rotate(mouse_motion.delta);
    }
    if mouse_scroll.delta.y != 0.0 {
        rig.zoom(mouse_scroll.delta.y);
    }
}

fn apply_camera_rig(rig: Res<CameraRig>, mut camera: Query<&mut Transform, With<MainCamera>>) {
    if !rig.is_changed() {
        return;
    }
    let Ok(mut transform) = camera.single_mut() else {
        return;
    };
    *transform = rig.transform();
}
