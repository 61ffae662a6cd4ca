//! Main update loop, global shortcuts, and panel orchestration

use eframe::egui::{self, Margin, RichText};
use std::time::Duration;

use super::StudioApp;
use crate::presets;
use crate::state::DisplayMode;
use crate::ui::{messages, phone, toolbar};

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Global keyboard shortcuts (work even when input doesn't have focus)
        let (toggle_edit, toggle_theme, export) = ctx.input(|i| {
            (
                // Ctrl+E: Toggle the authoring panel
                i.modifiers.ctrl && i.key_pressed(egui::Key::E),
                // Ctrl+T: Toggle theme
                i.modifiers.ctrl && i.key_pressed(egui::Key::T),
                // Ctrl+S: Export the transcript
                i.modifiers.ctrl && i.key_pressed(egui::Key::S),
            )
        });
        if toggle_edit {
            self.edit_mode = !self.edit_mode;
        }
        if toggle_theme {
            self.toggle_theme(ctx);
        }
        if export {
            self.export_transcript();
        }

        // Purge old status messages (toasts) older than 4 seconds
        self.state.purge_old_status_messages(4);

        let theme = self.theme();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            let action = toolbar::render_toolbar(
                ui,
                self.state.preset,
                &mut self.display_mode,
                &mut self.viewport,
                self.theme_mode,
                self.edit_mode,
            );
            ui.add_space(4.0);

            match action {
                Some(toolbar::ToolbarAction::ApplyPreset(preset)) => {
                    self.state.apply_preset(preset);
                    self.draft = presets::preset_draft(preset);
                }
                Some(toolbar::ToolbarAction::ToggleTheme) => self.toggle_theme(ctx),
                Some(toolbar::ToolbarAction::ToggleEditMode) => {
                    self.edit_mode = !self.edit_mode;
                }
                Some(toolbar::ToolbarAction::Export) => self.export_transcript(),
                None => {}
            }
        });

        if self.edit_mode {
            self.builder.show(
                ctx,
                &theme,
                &mut self.draft,
                &mut self.state,
                &mut self.images,
            );
        }

        let show_preview = self.edit_mode && !self.draft.hide_preview;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme.scene_bg))
            .show(ctx, |ui| {
                egui::ScrollArea::both()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.add_space(24.0);
                            match self.display_mode {
                                DisplayMode::PhoneFrame => phone::render_phone(
                                    ui,
                                    &theme,
                                    self.viewport,
                                    &mut self.state,
                                    &self.draft,
                                    &mut self.images,
                                    &self.clock,
                                    show_preview,
                                ),
                                DisplayMode::Viewport => phone::render_interface(
                                    ui,
                                    &theme,
                                    self.viewport,
                                    &mut self.state,
                                    &self.draft,
                                    &mut self.images,
                                    &self.clock,
                                    show_preview,
                                ),
                                DisplayMode::Messages => {
                                    ui.scope(|ui| {
                                        ui.set_width(390.0);
                                        messages::render_transcript(
                                            ui,
                                            &theme,
                                            &self.state,
                                            &self.draft,
                                            &mut self.images,
                                            &self.clock,
                                            show_preview,
                                        );
                                    });
                                }
                                DisplayMode::LastMessage => {
                                    ui.scope(|ui| {
                                        ui.set_width(390.0);
                                        messages::render_last_message(
                                            ui,
                                            &theme,
                                            &self.state,
                                            &self.draft,
                                            &mut self.images,
                                            &self.clock,
                                            show_preview,
                                        );
                                    });
                                }
                            }
                            ui.add_space(24.0);
                        });
                    });
            });

        // Status toasts in the bottom-right corner
        if !self.state.status_messages.is_empty() {
            egui::Area::new(egui::Id::new("status_toasts"))
                .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
                .show(ctx, |ui| {
                    for (text, _) in &self.state.status_messages {
                        egui::Frame::new()
                            .fill(theme.panel_bg)
                            .corner_radius(6.0)
                            .inner_margin(Margin::symmetric(12, 8))
                            .show(ui, |ui| {
                                ui.label(RichText::new(text).color(theme.panel_text));
                            });
                    }
                });
            // Keep repainting so toasts expire without input
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
