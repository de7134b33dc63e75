//! Pointer picking against instanced bodies.
//!
//! Every instance is a unit sphere scaled by its transform, so a ray/sphere
//! test per instance is enough. The nearest hit in front of the ray wins.

use bevy::prelude::*;

use super::InstanceBuffer;
use crate::types::NeoId;

/// Hover callback: the body under the pointer, or `None` when it left all bodies.
pub type HoverCallback = Box<dyn FnMut(Option<&NeoId>) + Send + Sync>;

/// Click callback: the body that was clicked.
pub type ClickCallback = Box<dyn FnMut(&NeoId) + Send + Sync>;

/// Distance along `ray` to the first intersection with a sphere, if any.
pub fn ray_sphere_distance(ray: Ray3d, center: Vec3, radius: f32) -> Option<f32> {
    let direction = *ray.direction;
    let to_center = center - ray.origin;
    let along = to_center.dot(direction);
    let closest_sq = to_center.length_squared() - along * along;
    let radius_sq = radius * radius;
    if closest_sq > radius_sq {
        return None;
    }

    let half_chord = (radius_sq - closest_sq).sqrt();
    let entry = along - half_chord;
    let exit = along + half_chord;
    if exit < 0.0 {
        // Sphere is entirely behind the ray origin
        return None;
    }
    Some(entry.max(0.0))
}

/// Index of the nearest instance hit by `ray`.
///
/// `padding` scales the pick sphere relative to the drawn one so small
/// bodies stay easy to hit.
pub fn hit_test(ray: Ray3d, buffer: &InstanceBuffer, padding: f32) -> Option<usize> {
    buffer
        .transforms()
        .iter()
        .enumerate()
        .filter_map(|(index, transform)| {
            let radius = transform.scale.max_element() * padding;
            ray_sphere_distance(ray, transform.translation, radius).map(|d| (index, d))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _)| index)
}

/// Turns pointer rays into hover/click notifications for body identities.
#[derive(Default)]
pub struct FieldPicker {
    hovered: Option<usize>,
    hover_callbacks: Vec<HoverCallback>,
    click_callbacks: Vec<ClickCallback>,
}

impl FieldPicker {
    /// Register a hover callback.
    pub fn on_hover(&mut self, callback: impl FnMut(Option<&NeoId>) + Send + Sync + 'static) {
        self.hover_callbacks.push(Box::new(callback));
    }

    /// Register a click callback.
    pub fn on_click(&mut self, callback: impl FnMut(&NeoId) + Send + Sync + 'static) {
        self.click_callbacks.push(Box::new(callback));
    }

    /// Index of the instance currently under the pointer.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Forget the hovered instance without notifying anyone.
    ///
    /// Used when the field is rebuilt and old indices stop meaning anything.
    pub fn reset(&mut self) {
        self.hovered = None;
    }

    /// Handle pointer movement.
    ///
    /// Hover callbacks fire when the hovered body changes: with the new
    /// identity on entering a body, with `None` when the pointer leaves all
    /// bodies. A `None` ray (pointer outside the viewport) counts as a miss.
    pub fn pointer_moved(
        &mut self,
        ray: Option<Ray3d>,
        buffer: &InstanceBuffer,
        ids: &[NeoId],
        padding: f32,
    ) -> Option<usize> {
        let hit = ray
            .and_then(|ray| hit_test(ray, buffer, padding))
            .filter(|&index| index < ids.len());

        if hit != self.hovered {
            self.hovered = hit;
            let id = hit.map(|index| &ids[index]);
            for callback in &mut self.hover_callbacks {
                callback(id);
            }
        }
        hit
    }

    /// Handle a click. Click callbacks fire only on a hit.
    pub fn pointer_clicked(
        &mut self,
        ray: Ray3d,
        buffer: &InstanceBuffer,
        ids: &[NeoId],
        padding: f32,
    ) -> Option<usize> {
        let hit = hit_test(ray, buffer, padding).filter(|&index| index < ids.len())?;
        for callback in &mut self.click_callbacks {
            callback(&ids[hit]);
        }
        Some(hit)
    }
}
