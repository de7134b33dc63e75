//! Instanced field of NEO markers.
//!
//! [`AsteroidField`] ties the fetched bodies to their display orbits and to a
//! fixed-capacity [`InstanceBuffer`]. Every tick it advances the orbits and
//! rewrites the buffer; the host then mirrors the buffer onto whatever draws
//! it. Changing the body list swaps in a new orbit model and a new buffer in
//! one step, so readers never see a half-updated field.

pub mod belt;
mod buffer;
mod picking;

use bevy::prelude::*;
use rand::Rng;

use crate::neo::NearEarthObject;
use crate::orbit::{OrbitConfig, OrbitModel, instance_size};
use crate::types::NeoId;

pub use buffer::{InstanceBuffer, InstanceError};
pub use picking::{ClickCallback, FieldPicker, HoverCallback, hit_test, ray_sphere_distance};

/// Per-frame presentation settings for NEO markers.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSettings {
    /// Pick sphere radius relative to the drawn marker.
    pub pick_padding: f32,
    /// Marker scale multiplier while hovered.
    pub hover_scale: f32,
    /// Relative size swing of hazardous markers.
    pub pulse_amplitude: f32,
    /// Pulse angular frequency, radians per second.
    pub pulse_rate: f32,
    /// Tumble rates about X and Y, radians per second.
    pub spin_rate: Vec2,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            pick_padding: 1.5,
            hover_scale: 1.3,
            pulse_amplitude: 0.1,
            pulse_rate: 3.0,
            spin_rate: Vec2::new(0.3, 0.2),
        }
    }
}

/// The fetched bodies, their orbits and the instance buffer that draws them.
#[derive(Resource)]
pub struct AsteroidField {
    bodies: Vec<NearEarthObject>,
    ids: Vec<NeoId>,
    model: OrbitModel,
    buffer: InstanceBuffer,
    base_sizes: Vec<f32>,
    sizes: Vec<f32>,
    rotations: Vec<Quat>,
    generation: u64,
    picker: FieldPicker,
}

impl Default for AsteroidField {
    fn default() -> Self {
        Self {
            bodies: Vec::new(),
            ids: Vec::new(),
            model: OrbitModel::default(),
            buffer: InstanceBuffer::with_capacity(0),
            base_sizes: Vec::new(),
            sizes: Vec::new(),
            rotations: Vec::new(),
            generation: 0,
            picker: FieldPicker::default(),
        }
    }
}

impl AsteroidField {
    /// Build a field for `bodies` with freshly derived orbits.
    pub fn build<R: Rng + ?Sized>(
        bodies: Vec<NearEarthObject>,
        config: &OrbitConfig,
        rng: &mut R,
    ) -> Self {
        let mut field = Self::default();
        field.replace_bodies(bodies, config, rng);
        field
    }

    /// Replace the body list, rebuilding orbits and the instance buffer.
    ///
    /// Registered pointer callbacks survive; the hover state does not.
    pub fn replace_bodies<R: Rng + ?Sized>(
        &mut self,
        bodies: Vec<NearEarthObject>,
        config: &OrbitConfig,
        rng: &mut R,
    ) {
        let model = OrbitModel::from_bodies(&bodies, config, rng);
        let count = bodies.len();

        self.ids = bodies.iter().map(|b| b.id.clone()).collect();
        self.base_sizes = bodies
            .iter()
            .map(|b| instance_size(b.diameter_km.max))
            .collect();
        self.sizes = self.base_sizes.clone();
        self.rotations = vec![Quat::IDENTITY; count];
        self.bodies = bodies;
        self.model = model;
        self.buffer = InstanceBuffer::with_capacity(count);
        self.generation += 1;
        self.picker.reset();
    }

    /// Advance orbits by `dt` seconds and rewrite the instance buffer.
    ///
    /// `elapsed` drives the hazard pulse and tumble; `hovered` gets the hover
    /// scale instead of the pulse.
    pub fn tick(
        &mut self,
        dt: f32,
        elapsed: f32,
        hovered: Option<usize>,
        settings: &FieldSettings,
    ) -> Result<(), InstanceError> {
        let pulse = 1.0 + (elapsed * settings.pulse_rate).sin() * settings.pulse_amplitude;

        for (index, size) in self.sizes.iter_mut().enumerate() {
            let base = self.base_sizes[index];
            *size = if hovered == Some(index) {
                base * settings.hover_scale
            } else if self.bodies[index].hazardous {
                base * pulse
            } else {
                base
            };
        }

        for (rotation, orbit) in self.rotations.iter_mut().zip(self.model.orbits()) {
            // Offset the tumble per body so markers do not spin in lockstep
            let phase = orbit.ascending_node;
            *rotation = Quat::from_euler(
                EulerRot::XYZ,
                elapsed * settings.spin_rate.x + phase,
                elapsed * settings.spin_rate.y + phase,
                0.0,
            );
        }

        let positions = self.model.advance(dt);
        self.buffer.update(positions, &self.sizes, Some(&self.rotations))
    }

    pub fn bodies(&self) -> &[NearEarthObject] {
        &self.bodies
    }

    pub fn ids(&self) -> &[NeoId] {
        &self.ids
    }

    pub fn model(&self) -> &OrbitModel {
        &self.model
    }

    pub fn buffer(&self) -> &InstanceBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut InstanceBuffer {
        &mut self.buffer
    }

    /// Bumped on every rebuild; lets hosts drop state tied to old indices.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn index_of(&self, id: &NeoId) -> Option<usize> {
        self.ids.iter().position(|candidate| candidate == id)
    }

    pub fn body(&self, id: &NeoId) -> Option<&NearEarthObject> {
        self.index_of(id).map(|index| &self.bodies[index])
    }

    /// Current scene position of a body, for placing overlays.
    pub fn position_of(&self, id: &NeoId) -> Option<Vec3> {
        self.index_of(id)
            .and_then(|index| self.model.positions().get(index).copied())
    }

    pub fn picker_mut(&mut self) -> &mut FieldPicker {
        &mut self.picker
    }

    /// Resolve pointer movement against the current buffer.
    pub fn pointer_moved(&mut self, ray: Option<Ray3d>, padding: f32) -> Option<usize> {
        self.picker
            .pointer_moved(ray, &self.buffer, &self.ids, padding)
    }

    /// Resolve a click against the current buffer.
    pub fn pointer_clicked(&mut self, ray: Ray3d, padding: f32) -> Option<usize> {
        self.picker
            .pointer_clicked(ray, &self.buffer, &self.ids, padding)
    }
}
