//! Top bar with catalog counts and data source, plus the loading spinner.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::loader::{BodyCatalog, DataSource, LoadState};
use crate::time::SimulationClock;

use super::{CatalogSummary, colors, icons};

pub fn header_system(
    mut contexts: EguiContexts,
    catalog: Res<BodyCatalog>,
    state: Res<LoadState>,
    clock: Res<SimulationClock>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let summary = CatalogSummary::of(&catalog.bodies);

    egui::TopBottomPanel::top("header")
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(16, 8))
                .stroke(egui::Stroke::new(1.0, colors::PANEL_BORDER)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(icons::icon_colored(icons::PLANET, 20.0, colors::ACCENT));
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new("NEO Watch").strong().size(18.0));
                    ui.label(
                        egui::RichText::new("Near-Earth objects approaching this week")
                            .size(12.0)
                            .color(colors::MUTED),
                    );
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    match *state {
                        LoadState::Loading => {
                            let text = egui::RichText::new("Contacting NASA...");
                            ui.label(text.color(colors::MUTED));
                        }
                        LoadState::Loaded { source } => {
                            let (icon, text, color) = match source {
                                DataSource::Live => (icons::CLOUD, "Live NASA data", colors::SAFE),
                                DataSource::Demo => (icons::OFFLINE, "Demo data", colors::WARNING),
                            };
                            ui.label(egui::RichText::new(text).color(color));
                            ui.label(icons::icon_colored(icon, 16.0, color));
                        }
                    }

                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("{} hazardous", summary.hazardous))
                            .color(colors::DANGER),
                    );
                    ui.label(format!("{} asteroids", summary.total));

                    if clock.paused {
                        ui.separator();
                        ui.label(icons::icon_colored(icons::PAUSE, 16.0, colors::WARNING));
                    }
                });
            });
        });

    if state.is_loading() {
        egui::Area::new(egui::Id::new("loading_spinner"))
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .interactable(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add(egui::Spinner::new().size(48.0).color(colors::ACCENT));
                    ui.add_space(8.0);
                    ui.label(egui::RichText::new("Loading asteroid data...").size(16.0));
                });
            });
    }
}
