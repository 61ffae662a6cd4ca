//! Chat header: status bar, back link, editable recipient identity, and the
//! optional quick-actions strip.

use eframe::egui::{self, Align, Layout, RichText, Sense, TextStyle};

use crate::images::ImageStore;
use crate::state::StudioState;
use crate::ui::phone;
use crate::ui::theme::{self, ChatTheme};
use crate::validation;

const AVATAR_SIZE: f32 = 37.0;

/// Render the header surface with the status bar and chat row. The recipient
/// name is edited in place, exactly like tapping the title in a real client.
pub fn render_header(
    ui: &mut egui::Ui,
    theme: &ChatTheme,
    state: &mut StudioState,
    images: &mut ImageStore,
    clock: &str,
) {
    let rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(rect, 0.0, theme.header_surface);

    ui.vertical(|ui| {
        ui.spacing_mut().item_spacing.y = 0.0;
        phone::render_status_bar(ui, theme, clock);
        render_chat_row(ui, theme, state, images);
    });
}

fn render_chat_row(
    ui: &mut egui::Ui,
    theme: &ChatTheme,
    state: &mut StudioState,
    images: &mut ImageStore,
) {
    let header = &mut state.header;
    let row_height = phone::HEADER_HEIGHT - phone::STATUS_BAR_HEIGHT;

    ui.allocate_ui_with_layout(
        egui::vec2(ui.available_width(), row_height),
        Layout::left_to_right(Align::Center),
        |ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("‹").size(26.0).color(theme.header_text));
            ui.add_space(2.0);
            ui.label(RichText::new("Chats").size(17.0).color(theme.header_text));

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.add_space(8.0);
                let texture = header.avatar.and_then(|id| images.texture(ui.ctx(), id));
                theme::render_avatar(ui, &header.recipient_name, AVATAR_SIZE, texture.as_ref());

                // Title block centered in the remaining width.
                ui.with_layout(Layout::top_down(Align::Center), |ui| {
                    ui.add_space(6.0);
                    let title = egui::TextEdit::singleline(&mut header.recipient_name)
                        .frame(false)
                        .horizontal_align(Align::Center)
                        .font(TextStyle::Name("header_title".into()))
                        .text_color(theme.header_text)
                        .hint_text("Username or Group");
                    if ui.add(title).changed() {
                        header.recipient_name =
                            validation::sanitize_single_line(&header.recipient_name);
                    }
                    ui.label(
                        RichText::new(&header.last_seen)
                            .size(13.0)
                            .color(theme.header_muted),
                    );
                });
            });
        },
    );
}

/// The "Block User / Add to Contacts" strip shown under the header.
pub fn render_quick_actions(ui: &mut egui::Ui, theme: &ChatTheme) {
    let rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(rect, 0.0, theme.header_surface);

    let (_, _) = ui.allocate_exact_size(
        egui::vec2(rect.width(), phone::QUICK_ACTIONS_HEIGHT),
        Sense::hover(),
    );
    let painter = ui.painter();
    let cy = rect.center().y;

    painter.text(
        egui::pos2(rect.left() + 87.0, cy),
        egui::Align2::LEFT_CENTER,
        "Block User",
        egui::FontId::proportional(15.0),
        theme.danger,
    );
    painter.text(
        egui::pos2(rect.left() + 212.0, cy),
        egui::Align2::LEFT_CENTER,
        "Add to Contacts",
        egui::FontId::proportional(15.0),
        theme.link,
    );
    painter.text(
        egui::pos2(rect.right() - 22.0, cy),
        egui::Align2::CENTER_CENTER,
        "✕",
        egui::FontId::proportional(14.0),
        theme.link,
    );
}
