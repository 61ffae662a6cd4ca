//! The authoring side panel: compose the next message, insert day dividers,
//! and edit the header/profile metadata.

use std::path::Path;

use eframe::egui::{self, Align, Layout, Margin, RichText};

use crate::chatlog::{Direction, ImageId, MessageKind};
use crate::draft::MessageDraft;
use crate::images::ImageStore;
use crate::state::StudioState;
use crate::ui::theme::ChatTheme;
use crate::validation;

const PANEL_WIDTH: f32 = 380.0;

/// Panel-local buffers: path fields for the image loaders and the divider
/// label under composition. Everything message-shaped lives in the draft.
pub struct BuilderPanel {
    pub divider_label: String,
    pub message_image_path: String,
    pub reaction_avatar_path: String,
    pub avatar_path: String,
    pub wallpaper_path: String,
}

impl Default for BuilderPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl BuilderPanel {
    pub fn new() -> Self {
        Self {
            divider_label: "Today".into(),
            message_image_path: String::new(),
            reaction_avatar_path: String::new(),
            avatar_path: String::new(),
            wallpaper_path: String::new(),
        }
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        theme: &ChatTheme,
        draft: &mut MessageDraft,
        state: &mut StudioState,
        images: &mut ImageStore,
    ) {
        egui::SidePanel::right("builder_panel")
            .resizable(false)
            .exact_width(PANEL_WIDTH)
            .frame(
                egui::Frame::new()
                    .fill(theme.panel_bg)
                    .inner_margin(Margin::symmetric(16, 20)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        self.panel_contents(ui, theme, draft, state, images);
                    });
            });
    }

    fn panel_contents(
        &mut self,
        ui: &mut egui::Ui,
        theme: &ChatTheme,
        draft: &mut MessageDraft,
        state: &mut StudioState,
        images: &mut ImageStore,
    ) {
        ui.spacing_mut().item_spacing.y = 8.0;

        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Add New Message")
                    .size(20.0)
                    .strong()
                    .color(theme.panel_text),
            );
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui
                    .button("Reset")
                    .on_hover_text("Reset New Message Inputs")
                    .clicked()
                {
                    draft.reset();
                }
                let preview_label = if draft.hide_preview { "Show Preview" } else { "Hide Preview" };
                if ui.button(preview_label).clicked() {
                    draft.hide_preview = !draft.hide_preview;
                }
            });
        });

        section_label(ui, theme, "MESSAGE DIRECTION");
        ui.horizontal(|ui| {
            ui.selectable_value(&mut draft.direction, Direction::Inbound, "Incoming");
            ui.selectable_value(&mut draft.direction, Direction::Outbound, "Outgoing");
        });

        section_label(ui, theme, "MESSAGE TYPE");
        ui.horizontal(|ui| {
            ui.selectable_value(&mut draft.kind, MessageKind::File, "File");
            ui.selectable_value(&mut draft.kind, MessageKind::Text, "Text");
            ui.selectable_value(&mut draft.kind, MessageKind::Image, "Image");
        });

        match draft.kind {
            MessageKind::File => {
                section_label(ui, theme, "FILE DETAILS");
                ui.add(
                    egui::TextEdit::singleline(&mut draft.file_name)
                        .hint_text("Image / file name"),
                );
                ui.add(
                    egui::TextEdit::singleline(&mut draft.file_extension)
                        .hint_text("Extension (.PNG)"),
                );
                ui.add(egui::TextEdit::singleline(&mut draft.file_size).hint_text("Size in MB"));
                ui.checkbox(&mut draft.is_compressed_image, "Compressed image preview");
                if let Some(id) =
                    image_loader(ui, images, state, &mut self.message_image_path, "Load thumbnail")
                {
                    draft.image = Some(id);
                }
            }
            MessageKind::Text => {
                section_label(ui, theme, "MESSAGE CONTENT");
                ui.add(
                    egui::TextEdit::multiline(&mut draft.text)
                        .hint_text("Text Message...")
                        .desired_rows(3)
                        .desired_width(f32::INFINITY),
                );
            }
            MessageKind::Image => {
                section_label(ui, theme, "MESSAGE CONTENT");
                ui.add(
                    egui::TextEdit::multiline(&mut draft.text)
                        .hint_text("Caption (optional)")
                        .desired_rows(2)
                        .desired_width(f32::INFINITY),
                );
                if let Some(id) =
                    image_loader(ui, images, state, &mut self.message_image_path, "Load image")
                {
                    draft.image = Some(id);
                }
                let hint = if draft.image.is_some() { "Image loaded" } else { "No image loaded" };
                ui.label(RichText::new(hint).size(12.0).color(theme.header_muted));
            }
        }

        section_label(ui, theme, "CHAT BUTTONS");
        buttons_editor(ui, draft);

        section_label(ui, theme, "REACTION");
        ui.checkbox(&mut draft.reaction_enabled, "Show reaction pill");
        if draft.reaction_enabled {
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut draft.reaction_emoji).desired_width(48.0),
                );
                ui.label(RichText::new("Emoji").size(12.0).color(theme.header_muted));
            });
            if let Some(id) = image_loader(
                ui,
                images,
                state,
                &mut self.reaction_avatar_path,
                "Load reactor avatar",
            ) {
                draft.reaction_avatar = Some(id);
            }
        }

        section_label(ui, theme, "TIMESTAMP");
        ui.add(
            egui::TextEdit::singleline(&mut draft.timestamp)
                .hint_text("Blank = studio clock (e.g. 12:34)"),
        );

        ui.add_space(6.0);
        let add_button = egui::Button::new(
            RichText::new("Add To Chat")
                .size(15.0)
                .strong()
                .color(theme.accent_text),
        )
        .fill(theme.accent)
        .min_size(egui::vec2(ui.available_width(), 36.0));
        if ui.add(add_button).clicked() {
            state.commit_draft(draft);
        }

        ui.separator();

        section_label(ui, theme, "DAY DIVIDER");
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.divider_label)
                    .hint_text("Monday")
                    .desired_width(200.0),
            );
            let valid = validation::validate_divider_label(&self.divider_label).is_ok();
            if ui
                .add_enabled(valid, egui::Button::new("Add Divider"))
                .clicked()
            {
                if let Err(e) = state.add_day_divider(&self.divider_label) {
                    state.push_status(e.to_string());
                }
            }
        });

        ui.separator();

        egui::CollapsingHeader::new("Profile & Header")
            .default_open(false)
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing.y = 8.0;

                ui.label(RichText::new("Last seen line").size(12.0).color(theme.header_muted));
                if ui
                    .add(egui::TextEdit::singleline(&mut state.header.last_seen))
                    .changed()
                {
                    state.header.last_seen =
                        validation::sanitize_single_line(&state.header.last_seen);
                }
                ui.checkbox(
                    &mut state.header.show_quick_actions,
                    "Show Block / Add to Contacts",
                );

                if let Some(id) =
                    image_loader(ui, images, state, &mut self.avatar_path, "Load avatar")
                {
                    state.header.avatar = Some(id);
                }
                if let Some(id) =
                    image_loader(ui, images, state, &mut self.wallpaper_path, "Load wallpaper")
                {
                    state.wallpaper = Some(id);
                }

                ui.checkbox(&mut state.intro_card.visible, "Show new user card");
                if state.intro_card.visible {
                    ui.add(
                        egui::TextEdit::singleline(&mut state.intro_card.username)
                            .hint_text("Username"),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut state.intro_card.country)
                            .hint_text("🇳🇬 Nigeria"),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut state.intro_card.registration)
                            .hint_text("January 2024"),
                    );
                }
            });
    }
}

fn section_label(ui: &mut egui::Ui, theme: &ChatTheme, text: &str) {
    ui.add_space(6.0);
    ui.label(
        RichText::new(text)
            .size(11.0)
            .strong()
            .color(theme.header_muted),
    );
}

/// Row and button edits are collected first so the draft is only mutated
/// after iteration.
fn buttons_editor(ui: &mut egui::Ui, draft: &mut MessageDraft) {
    enum RowEdit {
        Add(usize),
        Remove(usize),
    }

    let mut edit: Option<RowEdit> = None;
    for (row_idx, row) in draft.buttons.iter_mut().enumerate() {
        ui.horizontal(|ui| {
            if ui
                .small_button("−")
                .on_hover_text("Remove Button From Row")
                .clicked()
            {
                edit = Some(RowEdit::Remove(row_idx));
            }
            for button in row.iter_mut() {
                ui.add(egui::TextEdit::singleline(&mut button.label).desired_width(86.0));
            }
            if ui
                .small_button("+")
                .on_hover_text("Add Button To Row")
                .clicked()
            {
                edit = Some(RowEdit::Add(row_idx));
            }
        });
    }

    match edit {
        Some(RowEdit::Add(row)) => draft.add_button(row),
        Some(RowEdit::Remove(row)) => draft.remove_button(row),
        None => {}
    }

    if ui.button("Add Row of Buttons").clicked() {
        draft.add_button_row();
    }
}

/// A path field plus load button. Returns the new image id on a successful
/// load; validation failures surface as status toasts.
fn image_loader(
    ui: &mut egui::Ui,
    images: &mut ImageStore,
    state: &mut StudioState,
    path: &mut String,
    label: &str,
) -> Option<ImageId> {
    let mut loaded = None;
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(path)
                .hint_text("path/to/image.png")
                .desired_width(190.0),
        );
        if ui.button(label).clicked() {
            match validation::validate_image_path(path) {
                Ok(()) => loaded = Some(images.load(Path::new(path.trim()))),
                Err(e) => state.push_status(e),
            }
        }
    });
    loaded
}
