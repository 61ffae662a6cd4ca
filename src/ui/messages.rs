//! Transcript rendering: day dividers, message groups, bubbles, reactions,
//! chat buttons, the intro card, and the live draft preview.

use eframe::egui::{self, Align, Color32, CornerRadius, FontId, Layout, Margin, RichText};

use crate::chatlog::{ChatEntry, Direction, Message, MessageKind, Reaction};
use crate::draft::MessageDraft;
use crate::images::ImageStore;
use crate::layout;
use crate::state::StudioState;
use crate::ui::theme::ChatTheme;

/// Widest a text block inside a bubble can be.
const TEXT_MAX_WIDTH: f32 = 250.0;
/// Pixel width of the time/status marker, by direction (checks take room).
const STATUS_WIDTH_IN: f32 = 28.0;
const STATUS_WIDTH_OUT: f32 = 43.0;

const GROUP_GAP: f32 = 10.0;
const INTRA_GROUP_GAP: f32 = 5.0;
const FILE_THUMB_SIZE: f32 = 74.0;

fn status_width(direction: Direction) -> f32 {
    match direction {
        Direction::Inbound => STATUS_WIDTH_IN,
        Direction::Outbound => STATUS_WIDTH_OUT,
    }
}

fn bubble_radius(direction: Direction) -> CornerRadius {
    match direction {
        Direction::Inbound => CornerRadius {
            nw: 16,
            ne: 18,
            sw: 18,
            se: 18,
        },
        Direction::Outbound => CornerRadius {
            nw: 18,
            ne: 16,
            sw: 18,
            se: 18,
        },
    }
}

fn bubble_colors(theme: &ChatTheme, direction: Direction) -> (Color32, Color32, Color32) {
    match direction {
        Direction::Inbound => (theme.bubble_in, theme.bubble_text_in, theme.bubble_label_in),
        Direction::Outbound => (theme.bubble_out, theme.bubble_text_out, theme.bubble_label_out),
    }
}

/// Render the whole message area: intro card, entries, and the preview.
#[allow(clippy::too_many_arguments)]
pub fn render_transcript(
    ui: &mut egui::Ui,
    theme: &ChatTheme,
    state: &StudioState,
    draft: &MessageDraft,
    images: &mut ImageStore,
    clock: &str,
    show_preview: bool,
) {
    egui::Frame::new()
        .inner_margin(Margin::symmetric(8, 16))
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = GROUP_GAP;

            if state.intro_card.visible {
                ui.add_space(18.0);
                ui.vertical_centered(|ui| {
                    render_intro_card(ui, theme, state);
                });
                ui.add_space(6.0);
            }

            for entry in &state.log.entries {
                match entry {
                    ChatEntry::DayDivider { label } => render_day_divider(ui, theme, label),
                    ChatEntry::MessageGroup(msgs) => render_group(ui, theme, msgs, images, clock),
                }
            }

            if show_preview {
                render_preview(ui, theme, draft, images, clock);
            }
        });
}

/// "Last message only" display mode: just the newest bubble (and the draft
/// preview when it is visible).
pub fn render_last_message(
    ui: &mut egui::Ui,
    theme: &ChatTheme,
    state: &StudioState,
    draft: &MessageDraft,
    images: &mut ImageStore,
    clock: &str,
    show_preview: bool,
) {
    ui.spacing_mut().item_spacing.y = GROUP_GAP;
    if let Some(msg) = state.log.last_message() {
        ui.with_layout(Layout::top_down(group_align(msg.direction)), |ui| {
            render_message_with_buttons(ui, theme, msg, images, clock);
        });
    }
    if show_preview {
        render_preview(ui, theme, draft, images, clock);
    }
}

fn group_align(direction: Direction) -> Align {
    match direction {
        Direction::Inbound => Align::Min,
        Direction::Outbound => Align::Max,
    }
}

fn render_group(
    ui: &mut egui::Ui,
    theme: &ChatTheme,
    msgs: &[Message],
    images: &mut ImageStore,
    clock: &str,
) {
    let Some(first) = msgs.first() else { return };
    ui.with_layout(Layout::top_down(group_align(first.direction)), |ui| {
        ui.spacing_mut().item_spacing.y = INTRA_GROUP_GAP;
        for msg in msgs {
            render_message_with_buttons(ui, theme, msg, images, clock);
        }
    });
}

/// A bubble plus its reaction pill and button rows, stacked in the group's
/// alignment.
fn render_message_with_buttons(
    ui: &mut egui::Ui,
    theme: &ChatTheme,
    msg: &Message,
    images: &mut ImageStore,
    clock: &str,
) {
    render_bubble(ui, theme, msg, images, clock);

    if let Some(reaction) = &msg.reaction {
        // Pill overlaps the bubble's bottom edge.
        ui.add_space(-9.0);
        ui.horizontal(|ui| {
            ui.add_space(10.0);
            render_reaction(ui, theme, reaction, images);
        });
    }

    if !msg.buttons.is_empty() {
        ui.add_space(3.0);
        render_button_rows(ui, theme, &msg.buttons);
    }
}

fn render_bubble(
    ui: &mut egui::Ui,
    theme: &ChatTheme,
    msg: &Message,
    images: &mut ImageStore,
    clock: &str,
) {
    match msg.kind {
        MessageKind::Text => render_text_bubble(ui, theme, msg, clock),
        MessageKind::File => render_file_bubble(ui, theme, msg, images),
        MessageKind::Image => render_photo_bubble(ui, theme, msg, images, clock),
    }
}

fn render_text_bubble(ui: &mut egui::Ui, theme: &ChatTheme, msg: &Message, clock: &str) {
    let (fill, text_color, label_color) = bubble_colors(theme, msg.direction);

    egui::Frame::new()
        .fill(fill)
        .corner_radius(bubble_radius(msg.direction))
        .inner_margin(Margin::symmetric(14, 8))
        .show(ui, |ui| {
            render_caption_block(
                ui,
                msg,
                TEXT_MAX_WIDTH,
                text_color,
                label_color,
                clock,
            );
        });
}

fn render_file_bubble(ui: &mut egui::Ui, theme: &ChatTheme, msg: &Message, images: &mut ImageStore) {
    let (fill, text_color, label_color) = bubble_colors(theme, msg.direction);

    egui::Frame::new()
        .fill(fill)
        .corner_radius(bubble_radius(msg.direction))
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                render_file_thumbnail(ui, theme, msg, images);
                ui.add_space(8.0);
                ui.vertical(|ui| {
                    ui.spacing_mut().item_spacing.y = 2.0;
                    ui.label(
                        RichText::new(format!("{}{}", msg.file_name, msg.file_extension))
                            .size(15.0)
                            .color(text_color),
                    );
                    ui.label(
                        RichText::new(format!("{}  MB", msg.file_size))
                            .size(13.0)
                            .color(label_color),
                    );
                });
            });
        });
}

fn render_file_thumbnail(
    ui: &mut egui::Ui,
    theme: &ChatTheme,
    msg: &Message,
    images: &mut ImageStore,
) {
    let texture = msg
        .image
        .filter(|_| msg.is_compressed_image)
        .and_then(|id| images.texture(ui.ctx(), id));

    if let Some(texture) = texture {
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(FILE_THUMB_SIZE, FILE_THUMB_SIZE), egui::Sense::hover());
        egui::Image::new(&texture).corner_radius(11.0).paint_at(ui, rect);
        return;
    }

    // Document icon placeholder with the extension across it.
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(FILE_THUMB_SIZE, FILE_THUMB_SIZE), egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 11.0, theme.matte);
    let label = msg
        .file_extension
        .trim_start_matches('.')
        .to_ascii_uppercase();
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        if label.is_empty() { "FILE".into() } else { label },
        FontId::proportional(13.0),
        theme.matte_text,
    );
}

fn render_photo_bubble(
    ui: &mut egui::Ui,
    theme: &ChatTheme,
    msg: &Message,
    images: &mut ImageStore,
    clock: &str,
) {
    let (fill, text_color, label_color) = bubble_colors(theme, msg.direction);
    let has_caption = !msg.text.is_empty();

    let natural = msg.image.map_or((0, 0), |id| images.natural_size(id));
    let (frame_w, frame_h) = layout::image_frame(natural.0, natural.1, has_caption);
    let size = egui::vec2(frame_w as f32, frame_h as f32);

    egui::Frame::new()
        .fill(fill)
        .corner_radius(bubble_radius(msg.direction))
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = 0.0;

            let photo_radius = photo_corner_radius(msg.direction, has_caption);
            let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
            match msg.image.and_then(|id| images.texture(ui.ctx(), id)) {
                Some(texture) => {
                    egui::Image::new(&texture)
                        .corner_radius(photo_radius)
                        .paint_at(ui, rect);
                }
                None => {
                    // Decode failed or no image picked: placeholder frame.
                    ui.painter().rect_filled(rect, photo_radius, theme.matte);
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Photo",
                        FontId::proportional(13.0),
                        theme.matte_label,
                    );
                }
            }

            if has_caption {
                egui::Frame::new()
                    .inner_margin(Margin::symmetric(14, 8))
                    .show(ui, |ui| {
                        ui.set_width(size.x - 28.0);
                        render_caption_block(
                            ui,
                            msg,
                            size.x - 28.0,
                            text_color,
                            label_color,
                            clock,
                        );
                    });
            }
        });
}

/// Photo corners follow the bubble; a caption squares off the bottom edge.
fn photo_corner_radius(direction: Direction, has_caption: bool) -> CornerRadius {
    let mut radius = bubble_radius(direction);
    radius.nw = radius.nw.saturating_sub(1);
    radius.ne = radius.ne.saturating_sub(1);
    if has_caption {
        radius.sw = 0;
        radius.se = 0;
    } else {
        radius.sw = radius.sw.saturating_sub(1);
        radius.se = radius.se.saturating_sub(1);
    }
    radius
}

/// Text plus the trailing time/status marker, placed inline after the last
/// line when the fit heuristic says it fits, below it otherwise.
fn render_caption_block(
    ui: &mut egui::Ui,
    msg: &Message,
    max_width: f32,
    text_color: Color32,
    label_color: Color32,
    clock: &str,
) {
    let fit = layout::line_fit(&msg.text, msg.direction);
    let marker = marker_label(msg, clock);
    let text = RichText::new(&msg.text).size(15.0).color(text_color);

    if fit.inline {
        ui.with_layout(Layout::left_to_right(Align::Max), |ui| {
            ui.spacing_mut().item_spacing.x = 6.0;
            ui.scope(|ui| {
                ui.set_max_width(max_width - status_width(msg.direction) - 6.0);
                ui.add(egui::Label::new(text).wrap());
            });
            ui.label(marker.size(11.0).color(label_color));
        });
    } else {
        ui.vertical(|ui| {
            ui.spacing_mut().item_spacing.y = 5.0;
            ui.set_max_width(max_width);
            ui.add(egui::Label::new(text).wrap());
            ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                ui.label(marker.size(11.0).color(label_color));
            });
        });
    }
}

/// Time plus delivery checks for outbound messages.
fn marker_label(msg: &Message, clock: &str) -> RichText {
    let time = msg.timestamp.as_deref().unwrap_or(clock);
    match msg.direction {
        Direction::Inbound => RichText::new(time.to_string()),
        Direction::Outbound => RichText::new(format!("{} ✓✓", time)),
    }
}

fn render_reaction(
    ui: &mut egui::Ui,
    theme: &ChatTheme,
    reaction: &Reaction,
    images: &mut ImageStore,
) {
    egui::Frame::new()
        .fill(theme.reaction_pill)
        .corner_radius(18.0)
        .inner_margin(Margin::symmetric(12, 6))
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.x = 8.0;
            ui.horizontal(|ui| {
                let emoji = if reaction.emoji.is_empty() {
                    "❤"
                } else {
                    reaction.emoji.as_str()
                };
                ui.label(RichText::new(emoji).size(18.0).color(theme.reaction_text));

                if let Some(texture) = reaction.avatar.and_then(|id| images.texture(ui.ctx(), id))
                {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(20.0, 20.0), egui::Sense::hover());
                    egui::Image::new(&texture).corner_radius(10.0).paint_at(ui, rect);
                }
            });
        });
}

fn render_button_rows(ui: &mut egui::Ui, theme: &ChatTheme, buttons: &[Vec<crate::chatlog::ChatButton>]) {
    ui.spacing_mut().item_spacing.y = 4.0;
    for row in buttons {
        if row.is_empty() {
            continue;
        }
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            for button in row {
                egui::Frame::new()
                    .fill(theme.chat_button)
                    .corner_radius(10.0)
                    .inner_margin(Margin::symmetric(14, 7))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(&button.label)
                                .size(14.0)
                                .color(theme.chat_button_text),
                        );
                    });
            }
        });
    }
}

fn render_day_divider(ui: &mut egui::Ui, theme: &ChatTheme, label: &str) {
    ui.vertical_centered(|ui| {
        egui::Frame::new()
            .fill(theme.matte)
            .corner_radius(14.0)
            .inner_margin(Margin::symmetric(8, 2))
            .show(ui, |ui| {
                ui.label(
                    RichText::new(label)
                        .size(12.0)
                        .strong()
                        .color(theme.matte_text),
                );
            });
    });
}

fn render_intro_card(ui: &mut egui::Ui, theme: &ChatTheme, state: &StudioState) {
    let card = &state.intro_card;

    egui::Frame::new()
        .fill(theme.matte)
        .corner_radius(16.0)
        .inner_margin(Margin {
            left: 16,
            right: 16,
            top: 18,
            bottom: 16,
        })
        .show(ui, |ui| {
            ui.set_width(193.0);
            ui.spacing_mut().item_spacing.y = 8.0;

            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(&card.username)
                        .size(15.0)
                        .strong()
                        .color(theme.matte_text),
                );
                ui.label(
                    RichText::new("Not a contact")
                        .size(12.0)
                        .color(theme.matte_label),
                );
            });

            intro_row(ui, theme, "Phone Number", &card.country);
            intro_row(ui, theme, "Registration", &card.registration);

            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("Not an official account")
                        .size(13.0)
                        .color(theme.matte_label),
                );
            });
        });
}

fn intro_row(ui: &mut egui::Ui, theme: &ChatTheme, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        ui.allocate_ui_with_layout(
            egui::vec2(82.0, 16.0),
            Layout::right_to_left(Align::Center),
            |ui| {
                ui.label(RichText::new(label).size(12.0).color(theme.matte_label));
            },
        );
        ui.label(RichText::new(value).size(12.0).strong().color(theme.matte_text));
    });
}

/// The draft rendered in place, flagged with a PREVIEW tag.
fn render_preview(
    ui: &mut egui::Ui,
    theme: &ChatTheme,
    draft: &MessageDraft,
    images: &mut ImageStore,
    clock: &str,
) {
    let msg = draft.as_message();
    ui.with_layout(Layout::top_down(group_align(msg.direction)), |ui| {
        ui.spacing_mut().item_spacing.y = 2.0;

        egui::Frame::new()
            .fill(theme.accent)
            .corner_radius(CornerRadius {
                nw: 5,
                ne: 5,
                sw: 0,
                se: 0,
            })
            .inner_margin(Margin::symmetric(14, 2))
            .show(ui, |ui| {
                ui.label(
                    RichText::new("PREVIEW")
                        .size(9.0)
                        .strong()
                        .color(theme.accent_text),
                );
            });

        render_message_with_buttons(ui, theme, &msg, images, clock);
    });
}
