//! Top toolbar: preset, display, and viewport selectors plus the theme,
//! builder, and export controls.

use eframe::egui::{self, Align, Layout};

use crate::presets::ChatPreset;
use crate::state::{DisplayMode, ThemeMode, Viewport};

/// Actions that the toolbar can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    /// Replace the transcript with a preset conversation.
    ApplyPreset(ChatPreset),
    ToggleTheme,
    ToggleEditMode,
    /// Queue a JSON export of the transcript.
    Export,
}

/// Render the toolbar. Returns Some(ToolbarAction) if an action was
/// requested; display mode and viewport are edited in place.
pub fn render_toolbar(
    ui: &mut egui::Ui,
    preset: ChatPreset,
    display_mode: &mut DisplayMode,
    viewport: &mut Viewport,
    theme_mode: ThemeMode,
    edit_mode: bool,
) -> Option<ToolbarAction> {
    let mut action: Option<ToolbarAction> = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        egui::ComboBox::from_id_salt("preset_select")
            .selected_text(preset.label())
            .show_ui(ui, |ui| {
                for candidate in ChatPreset::ALL {
                    if ui
                        .selectable_label(candidate == preset, candidate.label())
                        .clicked()
                    {
                        action = Some(ToolbarAction::ApplyPreset(candidate));
                    }
                }
            });

        egui::ComboBox::from_id_salt("display_select")
            .selected_text(display_mode.label())
            .show_ui(ui, |ui| {
                for candidate in DisplayMode::ALL {
                    ui.selectable_value(display_mode, candidate, candidate.label());
                }
            });

        // Phone dimensions only matter when the interface is on screen.
        if matches!(display_mode, DisplayMode::PhoneFrame | DisplayMode::Viewport) {
            egui::ComboBox::from_id_salt("viewport_select")
                .selected_text(viewport.label())
                .show_ui(ui, |ui| {
                    for candidate in Viewport::ALL {
                        ui.selectable_value(viewport, candidate, candidate.label());
                    }
                });
        }

        ui.separator();

        let theme_label = match theme_mode {
            ThemeMode::Dark => "☀ Light Theme",
            ThemeMode::Light => "🌙 Dark Theme",
        };
        if ui.button(theme_label).clicked() {
            action = Some(ToolbarAction::ToggleTheme);
        }

        let edit_label = if edit_mode { "Hide Builder" } else { "Edit Mode" };
        if ui.button(edit_label).clicked() {
            action = Some(ToolbarAction::ToggleEditMode);
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui
                .button("Export JSON")
                .on_hover_text("Write the transcript to the exports folder")
                .clicked()
            {
                action = Some(ToolbarAction::Export);
            }
        });
    });

    action
}
