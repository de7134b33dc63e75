//! Hover tooltip placed next to the hovered marker.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::camera::MainCamera;
use crate::field::AsteroidField;
use crate::render::HoveredAsteroid;

use super::{ApproachText, colors, icons};

/// Offset from the marker's screen position to the tooltip's corner.
const TOOLTIP_OFFSET: egui::Vec2 = egui::vec2(20.0, -50.0);

pub fn tooltip_system(
    mut contexts: EguiContexts,
    hovered: Res<HoveredAsteroid>,
    field: Res<AsteroidField>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
) {
    let Some(id) = &hovered.id else {
        return;
    };
    let (Some(body), Some(position)) = (field.body(id), field.position_of(id)) else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Ok(screen) = camera.world_to_viewport(camera_transform, position) else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("asteroid_tooltip"))
        .fixed_pos(egui::pos2(screen.x, screen.y) + TOOLTIP_OFFSET)
        .interactable(false)
        .order(egui::Order::Tooltip)
        .show(ctx, |ui| {
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .stroke(egui::Stroke::new(1.0, colors::PANEL_BORDER))
                .inner_margin(egui::Margin::same(10))
                .corner_radius(6)
                .show(ui, |ui| {
                    ui.set_max_width(220.0);
                    ui.horizontal(|ui| {
                        let dot = if body.hazardous { colors::DANGER } else { colors::SAFE };
                        ui.label(egui::RichText::new("\u{25CF}").color(dot));
                        ui.label(egui::RichText::new(&body.name).strong());
                    });

                    egui::Grid::new("tooltip_grid").num_columns(2).show(ui, |ui| {
                        ui.label(egui::RichText::new("Size").color(colors::MUTED));
                        ui.label(format!("{:.2} km", body.diameter_km.max));
                        ui.end_row();

                        if let Some(approach) = ApproachText::of(body) {
                            ui.label(egui::RichText::new("Distance").color(colors::MUTED));
                            ui.label(approach.distance);
                            ui.end_row();
                            ui.label(egui::RichText::new("Speed").color(colors::MUTED));
                            ui.label(approach.velocity);
                            ui.end_row();
                            ui.label(egui::RichText::new("Date").color(colors::MUTED));
                            ui.label(approach.date);
                            ui.end_row();
                        }
                    });

                    if body.hazardous {
                        ui.add_space(4.0);
                        ui.horizontal(|ui| {
                            ui.label(icons::icon_colored(icons::WARNING, 14.0, colors::DANGER));
                            ui.label(
                                egui::RichText::new("Potentially hazardous")
                                    .color(colors::DANGER)
                                    .size(12.0),
                            );
                        });
                    }
                });
        });
}
