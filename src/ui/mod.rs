//! UI module providing egui-based overlays.
//!
//! Header bar, hover tooltip, info panel, impact modal and toasts. Every
//! system here only reads the scene state, except for the selection and
//! impact actions the panels expose.

mod header;
pub mod icons;
mod impact_modal;
mod info_panel;
pub mod notifications;
mod tooltip;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::neo::NearEarthObject;

pub use notifications::{NotificationKind, Notifications};

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            .init_resource::<Notifications>()
            .add_systems(Update, notifications::expire_notifications)
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    header::header_system,
                    info_panel::info_panel_system,
                    tooltip::tooltip_system,
                    impact_modal::impact_modal_system,
                    notifications::notifications_system,
                )
                    .chain()
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}

/// Colors shared by the overlays.
pub(crate) mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(20, 20, 30, 225);
    pub const PANEL_BORDER: Color32 = Color32::from_rgb(60, 60, 80);
    pub const DANGER: Color32 = Color32::from_rgb(224, 85, 85);
    pub const SAFE: Color32 = Color32::from_rgb(85, 176, 85);
    pub const ACCENT: Color32 = Color32::from_rgb(85, 153, 221);
    pub const WARNING: Color32 = Color32::from_rgb(230, 180, 60);
    pub const MUTED: Color32 = Color32::from_rgb(150, 150, 165);
}

/// Headline numbers for a catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub total: usize,
    pub hazardous: usize,
}

impl CatalogSummary {
    pub fn of(bodies: &[NearEarthObject]) -> Self {
        Self {
            total: bodies.len(),
            hazardous: bodies.iter().filter(|b| b.hazardous).count(),
        }
    }
}

/// Approach figures as display strings, `None` when the body has no approach.
pub(crate) struct ApproachText {
    pub distance: String,
    pub velocity: String,
    pub date: String,
}

impl ApproachText {
    pub fn of(body: &NearEarthObject) -> Option<Self> {
        let approach = body.first_approach()?;
        Some(Self {
            distance: body
                .approach_distance_lunar()
                .map_or_else(|| "unknown".to_string(), |ld| format!("{ld:.1} LD")),
            velocity: approach
                .velocity_km_s
                .map_or_else(|| "unknown".to_string(), |v| format!("{v:.1} km/s")),
            date: approach.date_full.clone().unwrap_or_else(|| approach.date.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;

    #[test]
    fn test_summary_counts_hazardous() {
        let bodies = vec![
            fixtures::neo_at_distance("a", 0.1),
            fixtures::hazardous_neo_at_distance("b", 0.2),
            fixtures::hazardous_neo_at_distance("c", 0.3),
        ];
        assert_eq!(
            CatalogSummary::of(&bodies),
            CatalogSummary {
                total: 3,
                hazardous: 2
            }
        );
    }

    #[test]
    fn test_approach_text() {
        let text = ApproachText::of(&fixtures::neo_at_distance("a", 0.1)).unwrap();
        assert_eq!(text.velocity, "12.0 km/s");
        assert_eq!(text.date, "2024-01-01");
        assert!(ApproachText::of(&fixtures::neo_without_approach("b")).is_none());
    }
}
