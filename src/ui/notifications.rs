//! Timed toast notifications in the bottom-right corner.

use std::collections::VecDeque;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::{colors, icons};

/// Seconds a notification stays on screen.
pub const NOTIFICATION_SECONDS: f32 = 4.0;

/// Oldest notifications are dropped past this count.
const MAX_NOTIFICATIONS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Seconds left on screen.
    pub remaining: f32,
}

/// Queue of notifications currently shown.
#[derive(Resource, Default, Debug)]
pub struct Notifications {
    entries: VecDeque<Notification>,
}

impl Notifications {
    pub fn push(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) {
        if self.entries.len() == MAX_NOTIFICATIONS {
            self.entries.pop_front();
        }
        self.entries.push_back(Notification {
            kind,
            title: title.into(),
            message: message.into(),
            remaining: NOTIFICATION_SECONDS,
        });
    }

    /// Count down and drop expired entries.
    pub fn tick(&mut self, dt: f32) {
        for entry in &mut self.entries {
            entry.remaining -= dt;
        }
        self.entries.retain(|entry| entry.remaining > 0.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn expire_notifications(time: Res<Time>, mut notifications: ResMut<Notifications>) {
    if notifications.is_empty() {
        return;
    }
    notifications.tick(time.delta_secs());
}

pub fn notifications_system(mut contexts: EguiContexts, notifications: Res<Notifications>) {
    if notifications.is_empty() {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("notifications"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .interactable(false)
        .show(ctx, |ui| {
            for notification in notifications.iter() {
                let (icon, accent) = match notification.kind {
                    NotificationKind::Info => (icons::INFO, colors::ACCENT),
                    NotificationKind::Warning => (icons::WARNING, colors::WARNING),
                    NotificationKind::Error => (icons::WARNING, colors::DANGER),
                };
                egui::Frame::NONE
                    .fill(colors::PANEL_BG)
                    .stroke(egui::Stroke::new(1.0, accent))
                    .inner_margin(egui::Margin::symmetric(12, 8))
                    .corner_radius(6)
                    .show(ui, |ui| {
                        ui.set_width(260.0);
                        ui.horizontal(|ui| {
                            ui.label(icons::icon_colored(icon, 16.0, accent));
                            ui.vertical(|ui| {
                                ui.label(egui::RichText::new(&notification.title).strong());
                                ui.label(egui::RichText::new(&notification.message).size(12.0));
                            });
                        });
                    });
                ui.add_space(6.0);
            }
        });
}
