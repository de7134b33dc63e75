//! Info panel: catalog stats, asteroid list and the selected asteroid's details.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::impact::{ActiveImpact, ImpactSimulation};
use crate::loader::BodyCatalog;
use crate::neo::NearEarthObject;
use crate::render::{HoveredAsteroid, SelectedAsteroid};

use super::notifications::{NotificationKind, Notifications};
use super::{ApproachText, CatalogSummary, colors, icons};

/// System that renders the info panel.
pub fn info_panel_system(
    mut contexts: EguiContexts,
    catalog: Res<BodyCatalog>,
    mut selected: ResMut<SelectedAsteroid>,
    mut hovered: ResMut<HoveredAsteroid>,
    mut impact: ResMut<ActiveImpact>,
    mut notifications: ResMut<Notifications>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let panel_frame = egui::Frame::NONE
        .fill(colors::PANEL_BG)
        .inner_margin(egui::Margin::same(12));

    egui::SidePanel::right("info_panel")
        .resizable(false)
        .default_width(260.0)
        .frame(panel_frame)
        .show(ctx, |ui| {
            ui.heading("Asteroid Monitor");
            let summary = CatalogSummary::of(&catalog.bodies);
            ui.horizontal(|ui| {
                ui.label(format!("Total: {}", summary.total));
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("Hazardous: {}", summary.hazardous))
                        .color(colors::DANGER),
                );
            });
            ui.separator();

            render_body_list(ui, &catalog.bodies, &mut selected, &mut hovered);

            let selected_body = selected
                .id
                .as_ref()
                .and_then(|id| catalog.bodies.iter().find(|b| &b.id == id));

            if let Some(body) = selected_body {
                ui.separator();
                match render_body_details(ui, body) {
                    DetailAction::Close => selected.id = None,
                    DetailAction::SimulateImpact => {
                        let kind = if body.hazardous {
                            NotificationKind::Warning
                        } else {
                            NotificationKind::Info
                        };
                        notifications.push(
                            kind,
                            "Impact simulation started",
                            format!("Simulating impact of {}", body.name),
                        );
                        info!(id = %body.id, "Starting impact simulation");
                        impact.0 = Some(ImpactSimulation::new(body.clone()));
                    }
                    DetailAction::None => {}
                }
            }

            ui.separator();
            for line in [
                "Drag to rotate the view",
                "Scroll to zoom",
                "Hover asteroids for info",
                "Click asteroids for details",
                "Space pauses, O toggles orbits",
            ] {
                ui.label(egui::RichText::new(line).size(11.0).color(colors::MUTED));
            }
        });
}

fn render_body_list(
    ui: &mut egui::Ui,
    bodies: &[NearEarthObject],
    selected: &mut SelectedAsteroid,
    hovered: &mut HoveredAsteroid,
) {
    egui::ScrollArea::vertical()
        .max_height(260.0)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for body in bodies {
                let is_selected = selected.id.as_ref() == Some(&body.id);
                let dot = if body.hazardous { colors::DANGER } else { colors::SAFE };
                let response = ui
                    .horizontal(|ui| {
                        ui.label(egui::RichText::new("\u{25CF}").color(dot));
                        ui.selectable_label(is_selected, &body.name)
                    })
                    .inner;

                if response.clicked() {
                    selected.id = Some(body.id.clone());
                }
                if response.hovered() && hovered.id.as_ref() != Some(&body.id) {
                    hovered.id = Some(body.id.clone());
                }
            }
        });
}

enum DetailAction {
    None,
    Close,
    SimulateImpact,
}

fn render_body_details(ui: &mut egui::Ui, body: &NearEarthObject) -> DetailAction {
    let mut action = DetailAction::None;

    ui.horizontal(|ui| {
        ui.label(icons::icon_colored(icons::ASTEROID, 16.0, colors::ACCENT));
        ui.label(egui::RichText::new(&body.name).strong().size(15.0));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button(icons::CLOSE).on_hover_text("Deselect").clicked() {
                action = DetailAction::Close;
            }
        });
    });

    let (status, color) = if body.hazardous {
        ("Potentially hazardous", colors::DANGER)
    } else {
        ("Non-hazardous", colors::SAFE)
    };
    ui.label(egui::RichText::new(status).color(color));

    egui::Grid::new("asteroid_details")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Diameter").color(colors::MUTED));
            ui.label(format!(
                "{:.2} - {:.2} km",
                body.diameter_km.min, body.diameter_km.max
            ));
            ui.end_row();

            if let Some(approach) = ApproachText::of(body) {
                ui.label(egui::RichText::new("Miss distance").color(colors::MUTED));
                ui.label(approach.distance);
                ui.end_row();
                ui.label(egui::RichText::new("Velocity").color(colors::MUTED));
                ui.label(approach.velocity);
                ui.end_row();
                ui.label(egui::RichText::new("Approach").color(colors::MUTED));
                ui.label(approach.date);
                ui.end_row();
            }

            if let Some(h) = body.absolute_magnitude {
                ui.label(egui::RichText::new("Magnitude").color(colors::MUTED));
                ui.label(format!("{h:.1} H"));
                ui.end_row();
            }
        });

    ui.add_space(6.0);
    let button_color = if body.hazardous { colors::DANGER } else { colors::ACCENT };
    let label = egui::RichText::new(format!("{} Simulate impact", icons::TARGET))
        .color(egui::Color32::WHITE);
    let simulate = egui::Button::new(label).fill(button_color);
    if ui.add(simulate).clicked() {
        action = DetailAction::SimulateImpact;
    }

    if !body.jpl_url.is_empty() {
        ui.hyperlink_to(format!("{} NASA JPL details", icons::LINK), &body.jpl_url);
    }

    action
}
