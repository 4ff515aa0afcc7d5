//! Session table panel — one row per catalog record with its two actions.
//!
//! Rows are redrawn in full from the state's current catalog snapshot on
//! every frame, and actions carry the record's id, resolved at click time.

use egui::{self, RichText};

use crate::state::UiState;
use crate::theme::*;

/// A row action, keyed by session id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    /// Load this session into the form and make it the default
    FillIn(String),
    /// Delete this session on the server and locally
    Delete(String),
}

/// Render the session table. Returns an action for the caller to dispatch.
pub fn session_table(ui: &mut egui::Ui, state: &UiState) -> Option<TableAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            if state.sessions.is_empty() {
                ui.label(
                    RichText::new("No sessions yet")
                        .color(TEXT_SECONDARY)
                        .italics(),
                );
                return;
            }

            egui::Grid::new("session_table")
                .striped(true)
                .num_columns(4)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Session ID").color(TEXT_SECONDARY).small());
                    ui.label(RichText::new("Created on").color(TEXT_SECONDARY).small());
                    ui.label("");
                    ui.label("");
                    ui.end_row();

                    for record in &state.sessions {
                        ui.label(RichText::new(&record.id).monospace().color(TEXT_PRIMARY));
                        ui.label(RichText::new(&record.created_on).color(TEXT_PRIMARY));

                        if ui
                            .button(RichText::new("Fill in existing session ID").color(ACCENT))
                            .clicked()
                        {
                            action = Some(TableAction::FillIn(record.id.clone()));
                        }

                        if ui.button(RichText::new("Delete").color(ERROR)).clicked() {
                            action = Some(TableAction::Delete(record.id.clone()));
                        }

                        ui.end_row();
                    }
                });
        });

    action
}
