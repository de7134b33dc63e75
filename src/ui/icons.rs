//! Phosphor glyphs used by the overlays.
//!
//! The glyphs live in a font that egui does not ship; [`setup_fonts`] installs
//! it on the first egui pass and flips [`FontsInitialized`], which gates every
//! other UI system.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Set once the Phosphor font has been handed to egui.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

pub fn setup_fonts(mut contexts: EguiContexts, mut fonts_ready: ResMut<FontsInitialized>) {
    if fonts_ready.0 {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut definitions = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut definitions, egui_phosphor::Variant::Regular);
    ctx.set_fonts(definitions);
    fonts_ready.0 = true;

    debug!("Installed Phosphor glyph font");
}

/// A glyph as rich text at the given size and color.
pub fn icon_colored(icon: &str, size: f32, color: egui::Color32) -> egui::RichText {
    egui::RichText::new(icon).size(size).color(color)
}

use egui_phosphor::regular as ph;

pub const CLOSE: &str = ph::X;
pub const ASTEROID: &str = ph::ASTERISK;
pub const PLANET: &str = ph::GLOBE;
pub const WARNING: &str = ph::WARNING;
pub const INFO: &str = ph::INFO;
pub const TARGET: &str = ph::CROSSHAIR;
pub const LINK: &str = ph::ARROW_SQUARE_OUT;
pub const CLOUD: &str = ph::CLOUD;
pub const OFFLINE: &str = ph::CLOUD_SLASH;
pub const EXPLOSION: &str = ph::FIRE;
pub const CLOCK: &str = ph::CLOCK;
pub const PAUSE: &str = ph::PAUSE;
