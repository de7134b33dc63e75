//! Orbit model for the NEO field.
//!
//! Each body gets a circular display orbit around Earth. The radius comes from
//! the body's close-approach miss distance, squeezed into a display band and
//! spread out so that no two rings sit closer than [`OrbitConfig::min_gap`].
//! Orientation, phase and speed are randomized once per body list; only the
//! angle moves afterwards.
//!
//! Orbits are laid out in a local plane (x/z with a small y offset) and then
//! rotated: first by the ascending node about the vertical (Y) axis, then by
//! the inclination about the horizontal (X) axis.

#[cfg(test)]
mod proptest_orbit;

use std::f32::consts::TAU;

use bevy::math::{Quat, Vec3};
use rand::Rng;

use crate::neo::NearEarthObject;

/// Tunables for deriving display orbits from NEO records.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitConfig {
    /// Display units per astronomical unit of miss distance.
    pub distance_scale: f32,
    /// Smallest display radius.
    pub min_radius: f32,
    /// Largest display radius before spacing.
    pub max_radius: f32,
    /// Radius band used when a body has no usable approach distance.
    pub fallback_radius: (f32, f32),
    /// Minimum separation between neighbouring rings.
    pub min_gap: f32,
    /// Angular speed numerator; speed = base / radius * factor.
    pub speed_base: f32,
    /// Random speed multiplier band.
    pub speed_factor: (f32, f32),
    /// Half-width of the inclination band in radians.
    pub max_inclination: f32,
    /// Half-width of the vertical jitter band in display units.
    pub max_vertical_jitter: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            distance_scale: 55.0,
            min_radius: 7.0,
            max_radius: 28.0,
            fallback_radius: (12.0, 20.0),
            min_gap: 0.55,
            speed_base: 0.6,
            speed_factor: (0.5, 1.5),
            max_inclination: 0.15,
            max_vertical_jitter: 0.3,
        }
    }
}

impl OrbitConfig {
    /// Display radius for a miss distance, before spacing.
    pub fn radius_for_distance(&self, distance_au: f64) -> f32 {
        ((distance_au as f32) * self.distance_scale).clamp(self.min_radius, self.max_radius)
    }
}

/// Display orbit of one body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitParameters {
    pub radius: f32,
    /// Tilt about the X axis, radians.
    pub inclination: f32,
    /// Rotation about the Y axis, radians.
    pub ascending_node: f32,
    /// Current angular position in the orbital plane, radians in `[0, TAU)`.
    pub angle: f32,
    /// Radians per second.
    pub speed: f32,
    /// Constant offset out of the orbital plane.
    pub vertical_jitter: f32,
}

impl OrbitParameters {
    /// A flat, unrotated orbit at the given radius. Mostly useful in tests.
    pub fn circular(radius: f32, speed: f32) -> Self {
        Self {
            radius,
            inclination: 0.0,
            ascending_node: 0.0,
            angle: 0.0,
            speed,
            vertical_jitter: 0.0,
        }
    }

    /// Rotation taking orbital-plane coordinates into the scene.
    pub fn plane_rotation(&self) -> Quat {
        Quat::from_rotation_x(self.inclination) * Quat::from_rotation_y(self.ascending_node)
    }

    /// Scene position at an arbitrary angle along this orbit.
    pub fn position_at(&self, angle: f32) -> Vec3 {
        let local = Vec3::new(
            self.radius * angle.cos(),
            self.vertical_jitter,
            self.radius * angle.sin(),
        );
        self.plane_rotation() * local
    }

    /// Scene position at the current angle.
    pub fn position(&self) -> Vec3 {
        self.position_at(self.angle)
    }

    /// Move along the orbit by `dt` seconds and return the new position.
    pub fn step(&mut self, dt: f32) -> Vec3 {
        self.angle = (self.angle + self.speed * dt).rem_euclid(TAU);
        self.position()
    }

    /// Closed polyline tracing the orbit (`segments + 1` points, first == last).
    pub fn ring_points(&self, segments: usize) -> Vec<Vec3> {
        let segments = segments.max(3);
        (0..=segments)
            .map(|i| self.position_at(i as f32 / segments as f32 * TAU))
            .collect()
    }
}

/// Uniform sample in `[min, max)`, or `min` when the band is empty.
fn sample<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}

/// Uniform sample in the symmetric band `[-half, half)`.
fn sample_symmetric<R: Rng + ?Sized>(rng: &mut R, half: f32) -> f32 {
    sample(rng, -half, half)
}

/// Push radii outward so neighbours (by radius) are at least `min_gap` apart.
///
/// Sorting is stable and the original order is restored afterwards, so
/// `radii[i]` still belongs to the same body. Values that already satisfy the
/// gap are left untouched, which makes the pass idempotent.
pub fn space_radii(radii: &mut [f32], min_gap: f32) {
    let mut order: Vec<usize> = (0..radii.len()).collect();
    order.sort_by(|&a, &b| radii[a].total_cmp(&radii[b]));

    let mut last = f32::NEG_INFINITY;
    for index in order {
        if radii[index] - last < min_gap {
            radii[index] = last + min_gap;
        }
        last = radii[index];
    }
}

/// Derive one display orbit per body, in input order.
///
/// Bodies without an approach distance draw a radius from the fallback band.
/// Empty input yields empty output.
pub fn derive_orbits<R: Rng + ?Sized>(
    bodies: &[NearEarthObject],
    config: &OrbitConfig,
    rng: &mut R,
) -> Vec<OrbitParameters> {
    let mut radii: Vec<f32> = bodies
        .iter()
        .map(|body| match body.approach_distance_au() {
            Some(distance) => config.radius_for_distance(distance),
            None => sample(rng, config.fallback_radius.0, config.fallback_radius.1),
        })
        .collect();

    space_radii(&mut radii, config.min_gap);

    radii
        .into_iter()
        .map(|radius| {
            let inclination = sample_symmetric(rng, config.max_inclination);
            let ascending_node = sample(rng, 0.0, TAU);
            let angle = sample(rng, 0.0, TAU);
            let factor = sample(rng, config.speed_factor.0, config.speed_factor.1);
            let vertical_jitter = sample_symmetric(rng, config.max_vertical_jitter);
            OrbitParameters {
                radius,
                inclination,
                ascending_node,
                angle,
                speed: config.speed_base / radius * factor,
                vertical_jitter,
            }
        })
        .collect()
}

/// Advance every orbit by `dt` seconds, writing scene positions in place.
///
/// `positions` is resized to match `orbits`; it never reallocates once it has
/// the right length.
pub fn advance(orbits: &mut [OrbitParameters], dt: f32, positions: &mut Vec<Vec3>) {
    positions.resize(orbits.len(), Vec3::ZERO);
    for (orbit, position) in orbits.iter_mut().zip(positions.iter_mut()) {
        *position = orbit.step(dt);
    }
}

/// Tunables for the decorative background belt.
#[derive(Clone, Debug, PartialEq)]
pub struct BeltConfig {
    pub count: usize,
    pub radius: (f32, f32),
    pub speed_base: f32,
    pub speed_factor: (f32, f32),
    pub max_inclination: f32,
    pub max_vertical_jitter: f32,
    /// Rock scale band in display units.
    pub size: (f32, f32),
}

impl Default for BeltConfig {
    fn default() -> Self {
        Self {
            count: 1800,
            radius: (9.0, 20.0),
            speed_base: 0.02,
            speed_factor: (0.5, 1.5),
            max_inclination: 0.06,
            max_vertical_jitter: 0.3,
            size: (0.015, 0.085),
        }
    }
}

/// Orbits for the background belt. No spacing pass; rocks may share rings.
pub fn belt_orbits<R: Rng + ?Sized>(config: &BeltConfig, rng: &mut R) -> Vec<OrbitParameters> {
    (0..config.count)
        .map(|_| {
            let radius = sample(rng, config.radius.0, config.radius.1);
            let factor = sample(rng, config.speed_factor.0, config.speed_factor.1);
            OrbitParameters {
                radius,
                inclination: sample_symmetric(rng, config.max_inclination),
                ascending_node: sample(rng, 0.0, TAU),
                angle: sample(rng, 0.0, TAU),
                speed: config.speed_base / radius * factor,
                vertical_jitter: sample_symmetric(rng, config.max_vertical_jitter),
            }
        })
        .collect()
}

/// Display radius of a body's marker for a given diameter (log scale).
pub fn instance_size(diameter_km: f64) -> f32 {
    (((diameter_km.max(0.0) + 1.0).ln() * 0.1) as f32).clamp(0.05, 0.5)
}

/// Orbit parameters together with the positions they produce.
///
/// The positions are owned here and rewritten every tick; readers get a
/// shared slice.
#[derive(Clone, Debug, Default)]
pub struct OrbitModel {
    orbits: Vec<OrbitParameters>,
    positions: Vec<Vec3>,
}

impl OrbitModel {
    pub fn new(orbits: Vec<OrbitParameters>) -> Self {
        let positions = orbits.iter().map(OrbitParameters::position).collect();
        Self { orbits, positions }
    }

    /// Derive orbits for `bodies` and wrap them in a model.
    pub fn from_bodies<R: Rng + ?Sized>(
        bodies: &[NearEarthObject],
        config: &OrbitConfig,
        rng: &mut R,
    ) -> Self {
        Self::new(derive_orbits(bodies, config, rng))
    }

    /// Advance all orbits by the elapsed frame time.
    pub fn advance(&mut self, dt: f32) -> &[Vec3] {
        advance(&mut self.orbits, dt, &mut self.positions);
        &self.positions
    }

    pub fn orbits(&self) -> &[OrbitParameters] {
        &self.orbits
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.orbits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orbits.is_empty()
    }
}
