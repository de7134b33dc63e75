//! Simulation clock.
//!
//! Wraps Bevy's real frame time with a pause flag and a speed multiplier.
//! Everything that animates reads [`SimulationClock`] rather than [`Time`].

use bevy::prelude::*;

/// Plugin providing the simulation clock.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>()
            .add_systems(PreUpdate, advance_clock)
            .add_systems(Update, toggle_pause);
    }
}

/// Scaled, pausable time for the scene.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SimulationClock {
    /// Scaled seconds since startup.
    pub elapsed: f32,
    /// Scaled seconds advanced this frame; zero while paused.
    pub delta: f32,
    pub paused: bool,
    /// Multiplier applied to real frame time.
    pub scale: f32,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            delta: 0.0,
            paused: false,
            scale: 1.0,
        }
    }
}

impl SimulationClock {
    /// Advance by `real_dt` seconds of wall time.
    pub fn advance(&mut self, real_dt: f32) {
        if self.paused {
            self.delta = 0.0;
            return;
        }
        self.delta = real_dt * self.scale;
        self.elapsed += self.delta;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }
}

pub fn advance_clock(mut clock: ResMut<SimulationClock>, time: Res<Time>) {
    clock.advance(time.delta_secs());
}

fn toggle_pause(keys: Res<ButtonInput<KeyCode>>, mut clock: ResMut<SimulationClock>) {
    if keys.just_pressed(KeyCode::Space) {
        clock.toggle_pause();
        info!(paused = clock.paused, "Simulation clock toggled");
    }
}
