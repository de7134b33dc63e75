//! Decorative background belt.
//!
//! Same machinery as the NEO field (orbits advanced each tick, written into a
//! fixed instance buffer) without picking or a catalog behind it.

use bevy::prelude::*;
use rand::Rng;

use super::{InstanceBuffer, InstanceError};
use crate::orbit::{BeltConfig, OrbitModel, belt_orbits};

#[derive(Resource)]
pub struct BeltField {
    model: OrbitModel,
    buffer: InstanceBuffer,
    sizes: Vec<f32>,
    rotations: Vec<Quat>,
}

impl BeltField {
    pub fn build<R: Rng + ?Sized>(config: &BeltConfig, rng: &mut R) -> Self {
        let model = OrbitModel::new(belt_orbits(config, rng));
        let (min, max) = config.size;
        let sizes = (0..model.len())
            .map(|_| if max > min { rng.gen_range(min..max) } else { min })
            .collect();
        Self {
            buffer: InstanceBuffer::with_capacity(model.len()),
            rotations: vec![Quat::IDENTITY; model.len()],
            sizes,
            model,
        }
    }

    /// Advance the belt and rewrite its buffer, tumbling every rock randomly.
    pub fn tick<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R) -> Result<(), InstanceError> {
        for rotation in &mut self.rotations {
            *rotation = Quat::from_euler(
                EulerRot::XYZ,
                rng.gen_range(0.0..std::f32::consts::TAU),
                rng.gen_range(0.0..std::f32::consts::TAU),
                0.0,
            );
        }
        let positions = self.model.advance(dt);
        self.buffer.update(positions, &self.sizes, Some(&self.rotations))
    }

    pub fn buffer(&self) -> &InstanceBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut InstanceBuffer {
        &mut self.buffer
    }

    pub fn len(&self) -> usize {
        self.model.len()
    }

    pub fn is_empty(&self) -> bool {
        self.model.is_empty()
    }
}
