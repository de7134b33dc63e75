//! Modal showing the running impact simulation.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::impact::{ActiveImpact, ImpactPhase, ImpactSimulation};

use super::{colors, icons};

/// NASA's planetary defense overview, linked from the aftermath view.
pub const PLANETARY_DEFENSE_URL: &str = "https://www.nasa.gov/planetary-defense/";

pub fn impact_modal_system(mut contexts: EguiContexts, mut active: ResMut<ActiveImpact>) {
    let Some(simulation) = active.0.as_ref() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    if show_impact_modal(ctx, simulation) {
        active.0 = None;
    }
}

/// Draw the modal for `simulation`; returns whether the user closed it.
fn show_impact_modal(ctx: &egui::Context, simulation: &ImpactSimulation) -> bool {
    let title = match simulation.phase() {
        ImpactPhase::Approach => "Asteroid approaching",
        ImpactPhase::Impact => "IMPACT!",
        ImpactPhase::Aftermath => "Impact assessment",
    };

    // The modal's backdrop swallows the pointer, so neither the panels nor
    // the scene react until it is closed
    let mut close = false;
    egui::Modal::new(egui::Id::new("impact_modal"))
        .backdrop_color(egui::Color32::from_rgba_unmultiplied(5, 5, 12, 170))
        .frame(
            egui::Frame::window(&ctx.style())
                .fill(colors::PANEL_BG)
                .stroke(egui::Stroke::new(1.0, colors::DANGER)),
        )
        .show(ctx, |ui| {
            ui.set_width(360.0);
            ui.vertical_centered(|ui| {
                ui.heading(title);
            });
            ui.add_space(6.0);
            match simulation.phase() {
                ImpactPhase::Approach => render_approach(ui, simulation),
                ImpactPhase::Impact => render_impact(ui),
                ImpactPhase::Aftermath => {
                    render_aftermath(ui, simulation);
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if ui.button("Return to Monitor").clicked() {
                            close = true;
                        }
                        ui.hyperlink_to(
                            format!("{} Planetary defense", icons::LINK),
                            PLANETARY_DEFENSE_URL,
                        );
                    });
                }
            }
            if simulation.phase() != ImpactPhase::Aftermath {
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button(format!("{} Close", icons::CLOSE)).clicked() {
                        close = true;
                    }
                });
            }
        });

    close
}

fn render_approach(ui: &mut egui::Ui, simulation: &ImpactSimulation) {
    let estimate = &simulation.estimate;
    ui.vertical_centered(|ui| {
        ui.label(icons::icon_colored(icons::CLOCK, 40.0, colors::WARNING));
        ui.label(
            egui::RichText::new(format!("T-{}", simulation.countdown()))
                .size(28.0)
                .strong()
                .color(colors::DANGER),
        );
        ui.label(egui::RichText::new("Seconds to impact").color(colors::MUTED));
    });
    ui.add_space(6.0);
    egui::Grid::new("impact_approach").num_columns(2).show(ui, |ui| {
        ui.label(egui::RichText::new("Object").color(colors::MUTED));
        ui.label(&simulation.body.name);
        ui.end_row();
        ui.label(egui::RichText::new("Diameter").color(colors::MUTED));
        ui.label(format!("{:.2} km", estimate.diameter_km));
        ui.end_row();
        ui.label(egui::RichText::new("Velocity").color(colors::MUTED));
        ui.label(format!("{:.1} km/s", estimate.velocity_km_s));
        ui.end_row();
        ui.label(egui::RichText::new("Impact energy").color(colors::MUTED));
        ui.label(format!("~{:.2e}", estimate.energy));
        ui.end_row();
    });
}

fn render_impact(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        let pulse = (ui.input(|i| i.time) * 6.0).sin() as f32 * 0.5 + 0.5;
        let flash = egui::Color32::from_rgb(224, (85.0 + 120.0 * pulse) as u8, 85);
        ui.label(icons::icon_colored(icons::EXPLOSION, 56.0, flash));
        ui.label(
            egui::RichText::new("IMPACT!")
                .size(28.0)
                .strong()
                .color(colors::DANGER),
        );
        ui.label(egui::RichText::new("Calculating damage...").color(colors::MUTED));
    });
    ui.ctx().request_repaint();
}

fn render_aftermath(ui: &mut egui::Ui, simulation: &ImpactSimulation) {
    let estimate = &simulation.estimate;
    ui.vertical_centered(|ui| {
        ui.label(icons::icon_colored(icons::PLANET, 40.0, colors::DANGER));
        ui.label(
            egui::RichText::new("Catastrophic impact")
                .strong()
                .color(colors::DANGER),
        );
    });
    ui.add_space(6.0);

    egui::Grid::new("impact_aftermath").num_columns(2).show(ui, |ui| {
        ui.label(egui::RichText::new("Crater diameter").color(colors::MUTED));
        ui.label(format!("{:.1} km", estimate.crater_diameter_km));
        ui.end_row();
        ui.label(egui::RichText::new("Impact energy").color(colors::MUTED));
        ui.label(format!("{:.1e}", estimate.energy));
        ui.end_row();
        if estimate.tsunami_height_m > 0.0 {
            ui.label(egui::RichText::new("Tsunami height").color(colors::MUTED));
            ui.label(format!("{:.0} m", estimate.tsunami_height_m));
            ui.end_row();
        }
    });

    let effects = estimate.effects();
    if !effects.is_empty() {
        ui.add_space(6.0);
        ui.label(egui::RichText::new("Potential effects").strong().color(colors::DANGER));
        for effect in effects {
            ui.label(format!("\u{2022} {effect}"));
        }
    }

    ui.add_space(6.0);
    ui.label(egui::RichText::new("Planetary defense").strong().color(colors::ACCENT));
    ui.label(
        egui::RichText::new(
            "This is why NASA monitors near-Earth objects and develops deflection technologies.",
        )
        .size(12.0)
        .color(colors::MUTED),
    );
}
