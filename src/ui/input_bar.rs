//! Decorative bottom input bar: attach button, "Message" capsule, sticker
//! and mic glyphs, and the home indicator. Nothing here is interactive —
//! it exists to complete the screenshot.

use eframe::egui::{self, Color32, FontId, Rect};

use crate::ui::phone;
use crate::ui::theme::ChatTheme;

const SIDE_BTN: f32 = 36.0;
const SIDE_GAP: f32 = 8.0;
const CAPSULE_HEIGHT: f32 = 40.0;
const CAPSULE_INNER_PAD: f32 = 12.0;
const TOP_Y: f32 = 8.0;

const GLASS_FILL: Color32 = Color32::from_rgba_premultiplied(20, 20, 20, 20);
const GLASS_ICON: Color32 = Color32::WHITE;

pub fn render_input_bar(ui: &mut egui::Ui, theme: &ChatTheme) {
    let rect = ui.available_rect_before_wrap();
    let painter = ui.painter();
    let row_cy = rect.top() + TOP_Y + CAPSULE_HEIGHT / 2.0;

    // Attach button (left).
    let attach_center = egui::pos2(rect.left() + SIDE_GAP + SIDE_BTN / 2.0, row_cy);
    painter.circle_filled(attach_center, SIDE_BTN / 2.0, GLASS_FILL);
    painter.text(
        attach_center,
        egui::Align2::CENTER_CENTER,
        "📎",
        FontId::proportional(17.0),
        GLASS_ICON,
    );

    // Message capsule between the two round buttons.
    let capsule_left = SIDE_GAP + SIDE_BTN + CAPSULE_INNER_PAD;
    let capsule = Rect::from_min_size(
        egui::pos2(rect.left() + capsule_left, rect.top() + TOP_Y),
        egui::vec2(rect.width() - capsule_left * 2.0, CAPSULE_HEIGHT),
    );
    painter.rect_filled(capsule, CAPSULE_HEIGHT / 2.0, GLASS_FILL);
    painter.text(
        egui::pos2(capsule.left() + 14.0, capsule.center().y),
        egui::Align2::LEFT_CENTER,
        "Message",
        FontId::proportional(14.0),
        theme.header_muted,
    );
    painter.text(
        egui::pos2(capsule.right() - 19.0, capsule.center().y),
        egui::Align2::CENTER_CENTER,
        "😊",
        FontId::proportional(15.0),
        theme.header_muted,
    );

    // Mic button (right).
    let mic_center = egui::pos2(rect.right() - SIDE_GAP - SIDE_BTN / 2.0, row_cy);
    painter.circle_filled(mic_center, SIDE_BTN / 2.0, GLASS_FILL);
    painter.text(
        mic_center,
        egui::Align2::CENTER_CENTER,
        "🎙",
        FontId::proportional(16.0),
        GLASS_ICON,
    );

    phone::render_home_indicator(painter, rect, theme.matte_text);
}
