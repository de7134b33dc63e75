//! Scripted impact simulation.
//!
//! A three-phase countdown shown in a modal, plus back-of-the-envelope
//! impact numbers. The figures are illustrative, not physical.

use bevy::prelude::*;

use crate::neo::NearEarthObject;

/// Seconds of countdown before impact.
pub const APPROACH_SECONDS: u32 = 5;

/// Seconds the impact phase is shown.
pub const IMPACT_SECONDS: u32 = 3;

/// Velocity assumed when a body has no approach data, km/s.
pub const DEFAULT_VELOCITY_KM_S: f64 = 15.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImpactPhase {
    Approach,
    Impact,
    Aftermath,
}

/// Rough impact figures for one body.
#[derive(Clone, Debug, PartialEq)]
pub struct ImpactEstimate {
    pub diameter_km: f64,
    pub velocity_km_s: f64,
    /// Arbitrary energy units, `0.5 d^3 v^2 / 1000`.
    pub energy: f64,
    pub crater_diameter_km: f64,
    /// Zero when the body is too small to raise one.
    pub tsunami_height_m: f64,
}

impl ImpactEstimate {
    pub fn for_body(body: &NearEarthObject) -> Self {
        let velocity = body
            .approach_velocity_km_s()
            .unwrap_or(DEFAULT_VELOCITY_KM_S);
        Self::new(body.diameter_km.max, velocity)
    }

    pub fn new(diameter_km: f64, velocity_km_s: f64) -> Self {
        let tsunami_height_m = if diameter_km > 1.0 {
            (diameter_km * 50.0).min(100.0)
        } else {
            0.0
        };
        Self {
            diameter_km,
            velocity_km_s,
            energy: 0.5 * diameter_km.powi(3) * velocity_km_s.powi(2) / 1000.0,
            crater_diameter_km: diameter_km * 20.0,
            tsunami_height_m,
        }
    }

    /// Effects worth listing for this impact, mildest first.
    pub fn effects(&self) -> Vec<&'static str> {
        let d = self.diameter_km;
        let mut effects = Vec::new();
        if d > 0.1 {
            effects.push("Local destruction");
        }
        if d > 1.0 {
            effects.push("Regional devastation");
        }
        if d > 10.0 {
            effects.push("Global climate impact");
        }
        if self.tsunami_height_m > 0.0 {
            effects.push("Massive tsunamis");
        }
        if d > 5.0 {
            effects.push("Mass extinction event");
        }
        effects
    }
}

/// The countdown driving the impact modal.
#[derive(Clone, Debug, PartialEq)]
pub struct ImpactSimulation {
    pub body: NearEarthObject,
    pub estimate: ImpactEstimate,
    phase: ImpactPhase,
    /// Whole seconds left in the current phase.
    countdown: u32,
    /// Real time not yet consumed by a countdown step.
    accumulated: f32,
}

impl ImpactSimulation {
    pub fn new(body: NearEarthObject) -> Self {
        Self {
            estimate: ImpactEstimate::for_body(&body),
            body,
            phase: ImpactPhase::Approach,
            countdown: APPROACH_SECONDS,
            accumulated: 0.0,
        }
    }

    pub fn phase(&self) -> ImpactPhase {
        self.phase
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    /// Consume `dt` seconds, stepping once per whole second.
    pub fn tick(&mut self, dt: f32) {
        self.accumulated += dt.max(0.0);
        while self.accumulated >= 1.0 && self.phase != ImpactPhase::Aftermath {
            self.accumulated -= 1.0;
            self.step();
        }
    }

    fn step(&mut self) {
        if self.countdown > 1 {
            self.countdown -= 1;
            return;
        }
        match self.phase {
            ImpactPhase::Approach => {
                self.phase = ImpactPhase::Impact;
                self.countdown = IMPACT_SECONDS;
            }
            ImpactPhase::Impact => {
                self.phase = ImpactPhase::Aftermath;
                self.countdown = 0;
            }
            ImpactPhase::Aftermath => {}
        }
    }
}

/// The running simulation, if the modal is open.
#[derive(Resource, Default)]
pub struct ActiveImpact(pub Option<ImpactSimulation>);

pub struct ImpactPlugin;

impl Plugin for ImpactPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveImpact>()
            .add_systems(Update, tick_impact);
    }
}

/// Advance the countdown with real time; it keeps running while the scene is paused.
fn tick_impact(time: Res<Time>, mut active: ResMut<ActiveImpact>) {
    let Some(simulation) = active.0.as_mut() else {
        return;
    };
    let before = simulation.phase();
    simulation.tick(time.delta_secs());
    if simulation.phase() != before {
        debug!(phase = ?simulation.phase(), "Impact simulation advanced");
    }
}
