//! Fixed-capacity per-instance transform buffer.

use bevy::prelude::*;

/// Errors raised when writing a frame into an [`InstanceBuffer`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InstanceError {
    #[error("instance buffer holds {capacity} instances but {positions} positions were supplied")]
    CapacityMismatch { capacity: usize, positions: usize },

    #[error("{positions} positions but {sizes} sizes")]
    SizeCountMismatch { positions: usize, sizes: usize },

    #[error("{positions} positions but {rotations} rotations")]
    RotationCountMismatch { positions: usize, rotations: usize },
}

/// Transforms for a batch of identical meshes.
///
/// The capacity is fixed when the buffer is created. A different body count
/// needs a new buffer; writes that do not match the capacity are refused
/// before anything is touched.
#[derive(Clone, Debug)]
pub struct InstanceBuffer {
    transforms: Vec<Transform>,
    dirty: bool,
}

impl InstanceBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            transforms: vec![Transform::IDENTITY; capacity],
            dirty: true,
        }
    }

    pub fn capacity(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Overwrite every instance transform for this frame.
    ///
    /// `sizes` are uniform scales. `rotations` default to identity.
    pub fn update(
        &mut self,
        positions: &[Vec3],
        sizes: &[f32],
        rotations: Option<&[Quat]>,
    ) -> Result<(), InstanceError> {
        if positions.len() != self.capacity() {
            return Err(InstanceError::CapacityMismatch {
                capacity: self.capacity(),
                positions: positions.len(),
            });
        }
        if sizes.len() != positions.len() {
            return Err(InstanceError::SizeCountMismatch {
                positions: positions.len(),
                sizes: sizes.len(),
            });
        }
        if let Some(rotations) = rotations
            && rotations.len() != positions.len()
        {
            return Err(InstanceError::RotationCountMismatch {
                positions: positions.len(),
                rotations: rotations.len(),
            });
        }

        for (i, transform) in self.transforms.iter_mut().enumerate() {
            *transform = Transform {
                translation: positions[i],
                rotation: rotations.map_or(Quat::IDENTITY, |r| r[i]),
                scale: Vec3::splat(sizes[i]),
            };
        }
        self.dirty = true;
        Ok(())
    }

    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    pub fn get(&self, index: usize) -> Option<&Transform> {
        self.transforms.get(index)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag, returning whether it was set.
    ///
    /// The host calls this once per frame before uploading.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}
