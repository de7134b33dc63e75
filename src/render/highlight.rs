//! Hover and selection highlighting for NEO markers.

use bevy::prelude::*;

use crate::field::AsteroidField;
use crate::types::NeoId;

use super::field::FieldSet;

/// Plugin providing hover highlighting.
pub struct HighlightPlugin;

impl Plugin for HighlightPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoveredAsteroid>()
            .init_resource::<SelectedAsteroid>()
            .add_systems(Update, draw_highlight.after(FieldSet));
    }
}

/// Resource tracking the NEO under the pointer.
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct HoveredAsteroid {
    pub id: Option<NeoId>,
}

/// Resource tracking the NEO picked by the last click.
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct SelectedAsteroid {
    pub id: Option<NeoId>,
}

const HOVER_COLOR: Color = Color::srgba(0.0, 1.0, 1.0, 0.8);
const SELECTED_COLOR: Color = Color::srgba(1.0, 0.85, 0.2, 0.9);

/// Outline the hovered and selected markers with wire spheres.
fn draw_highlight(
    mut gizmos: Gizmos,
    field: Res<AsteroidField>,
    hovered: Res<HoveredAsteroid>,
    selected: Res<SelectedAsteroid>,
) {
    let marked = [(&hovered.id, HOVER_COLOR), (&selected.id, SELECTED_COLOR)];
    for (id, color) in marked {
        let Some(index) = id.as_ref().and_then(|id| field.index_of(id)) else {
            continue;
        };
        let Some(transform) = field.buffer().get(index) else {
            continue;
        };
        let radius = transform.scale.max_element().max(0.05) * 2.0;
        gizmos.sphere(Isometry3d::from_translation(transform.translation), radius, color);
    }
}
