//! Color themes and styling utilities for the phone mock and studio chrome.
//!
//! Two palettes cover the whole app. The bubble/matte values mirror the
//! Telegram-style reference mock: inbound bubbles sit on a translucent matte
//! so they read against any wallpaper, outbound bubbles carry the classic
//! green tint in light mode. The panel/accent values style the authoring
//! side of the window.

use eframe::egui::{self, Color32, FontFamily, FontId, TextStyle};
use std::collections::BTreeMap;

use crate::state::ThemeMode;

/// Named colors for one theme mode.
#[derive(Clone, Debug)]
pub struct ChatTheme {
    pub name: &'static str,

    // Phone scene
    pub scene_bg: Color32,
    pub header_surface: Color32,
    pub header_text: Color32,
    pub header_muted: Color32,

    // Bubbles
    pub bubble_in: Color32,
    pub bubble_out: Color32,
    pub bubble_text_in: Color32,
    pub bubble_text_out: Color32,
    pub bubble_label_in: Color32,
    pub bubble_label_out: Color32,

    // Matte chrome over the wallpaper (day dividers, intro card)
    pub matte: Color32,
    pub matte_text: Color32,
    pub matte_label: Color32,

    // Inline chat buttons and reactions
    pub chat_button: Color32,
    pub chat_button_text: Color32,
    pub reaction_pill: Color32,
    pub reaction_text: Color32,

    // Header quick actions
    pub danger: Color32,
    pub link: Color32,

    // Studio chrome (authoring panel, toolbar)
    pub panel_bg: Color32,
    pub panel_text: Color32,
    pub accent: Color32,
    pub accent_hover: Color32,
    pub accent_text: Color32,
    pub input_bg: Color32,
}

impl ChatTheme {
    pub fn dark() -> Self {
        Self {
            name: "Dark",

            scene_bg: Color32::from_rgb(0x15, 0x15, 0x15),
            header_surface: Color32::from_rgb(0x1C, 0x1C, 0x1D),
            header_text: Color32::WHITE,
            header_muted: Color32::from_rgb(0x8D, 0x8D, 0x8F),

            bubble_in: Color32::from_rgba_unmultiplied(0x21, 0x21, 0x21, 138),
            bubble_out: Color32::from_rgb(0x36, 0x36, 0x38),
            bubble_text_in: Color32::WHITE,
            bubble_text_out: Color32::WHITE,
            bubble_label_in: Color32::from_rgb(0xB1, 0xB8, 0xC2),
            bubble_label_out: Color32::from_rgb(0x8D, 0x8D, 0x8F),

            matte: Color32::from_rgba_unmultiplied(0x21, 0x21, 0x21, 138),
            matte_text: Color32::WHITE,
            matte_label: Color32::from_rgb(0xB1, 0xB8, 0xC2),

            chat_button: Color32::from_rgba_unmultiplied(255, 255, 255, 51),
            chat_button_text: Color32::WHITE,
            reaction_pill: Color32::WHITE,
            reaction_text: Color32::BLACK,

            danger: Color32::from_rgb(0xFF, 0x00, 0x0B),
            link: Color32::from_rgb(0x3C, 0xA6, 0xFC),

            panel_bg: Color32::from_rgb(0x25, 0x25, 0x25),
            panel_text: Color32::WHITE,
            accent: Color32::from_rgb(0xD3, 0xFF, 0x8D),
            accent_hover: Color32::from_rgb(0xEA, 0xFF, 0xC8),
            accent_text: Color32::BLACK,
            input_bg: Color32::from_rgba_unmultiplied(0, 0, 0, 77),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "Light",

            scene_bg: Color32::from_rgb(0x15, 0x15, 0x15),
            header_surface: Color32::from_rgb(0xF6, 0xF6, 0xF6),
            header_text: Color32::BLACK,
            header_muted: Color32::from_rgb(0x8D, 0x8D, 0x8F),

            // Inbound stays matte even in light mode so it reads on photos.
            bubble_in: Color32::from_rgba_unmultiplied(0x21, 0x21, 0x21, 138),
            bubble_out: Color32::from_rgb(0xE1, 0xFE, 0xC6),
            bubble_text_in: Color32::WHITE,
            bubble_text_out: Color32::BLACK,
            bubble_label_in: Color32::from_rgb(0xB1, 0xB8, 0xC2),
            bubble_label_out: Color32::from_rgb(0x3E, 0xAA, 0x3C),

            matte: Color32::from_rgba_unmultiplied(0x21, 0x21, 0x21, 138),
            matte_text: Color32::WHITE,
            matte_label: Color32::from_rgb(0xB1, 0xB8, 0xC2),

            chat_button: Color32::from_rgba_unmultiplied(0x24, 0x24, 0x24, 135),
            chat_button_text: Color32::WHITE,
            reaction_pill: Color32::WHITE,
            reaction_text: Color32::BLACK,

            danger: Color32::from_rgb(0xFF, 0x00, 0x0B),
            link: Color32::from_rgb(0x35, 0x98, 0xFD),

            panel_bg: Color32::WHITE,
            panel_text: Color32::BLACK,
            accent: Color32::from_rgb(0x28, 0x51, 0xB7),
            accent_hover: Color32::from_rgb(0x56, 0x7F, 0xE7),
            accent_text: Color32::WHITE,
            input_bg: Color32::from_rgba_unmultiplied(0, 0, 0, 21),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }
}

/// Text styles used across the studio: the standard hierarchy plus the
/// bubble-specific sizes of the phone mock.
pub fn configure_text_styles() -> BTreeMap<TextStyle, FontId> {
    use FontFamily::Proportional;

    [
        (TextStyle::Small, FontId::new(10.0, Proportional)),
        (TextStyle::Body, FontId::new(14.0, Proportional)),
        (TextStyle::Button, FontId::new(13.0, Proportional)),
        (TextStyle::Heading, FontId::new(16.0, Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace)),
        // Phone-mock styles
        (TextStyle::Name("bubble".into()), FontId::new(15.0, Proportional)),
        (TextStyle::Name("bubble_meta".into()), FontId::new(11.0, Proportional)),
        (TextStyle::Name("divider".into()), FontId::new(12.0, Proportional)),
        (TextStyle::Name("header_title".into()), FontId::new(17.0, Proportional)),
    ]
    .into()
}

/// Apply widget styling and the mode's base visuals to the egui context.
pub fn apply_app_style(ctx: &egui::Context, mode: ThemeMode) {
    let mut style = (*ctx.style()).clone();
    style.text_styles = configure_text_styles();
    style.visuals = match mode {
        ThemeMode::Dark => egui::Visuals::dark(),
        ThemeMode::Light => egui::Visuals::light(),
    };

    style.visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(6);
    style.visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(6);
    style.visuals.widgets.active.corner_radius = egui::CornerRadius::same(6);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);

    ctx.set_style(style);
}

/// Deterministic avatar background from a display name (FNV-1a pick into a
/// small palette, so the same recipient always gets the same color).
pub fn avatar_color(name: &str) -> Color32 {
    const PALETTE: [Color32; 7] = [
        Color32::from_rgb(0xE5, 0x72, 0x52),
        Color32::from_rgb(0xF2, 0xA6, 0x3C),
        Color32::from_rgb(0x8E, 0x6F, 0xE0),
        Color32::from_rgb(0x4C, 0xB1, 0xF5),
        Color32::from_rgb(0x52, 0xC4, 0x7E),
        Color32::from_rgb(0xE8, 0x5C, 0x8A),
        Color32::from_rgb(0x5C, 0x9C, 0xE8),
    ];

    let mut hash: u64 = 1469598103934665603;
    for b in name.as_bytes() {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(1099511628211);
    }
    PALETTE[(hash % PALETTE.len() as u64) as usize]
}

/// Render a circular avatar: the loaded picture when one exists, otherwise a
/// colored disc with the name's initial.
pub fn render_avatar(
    ui: &mut egui::Ui,
    name: &str,
    size: f32,
    texture: Option<&egui::TextureHandle>,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());

    if let Some(texture) = texture {
        egui::Image::new(texture)
            .corner_radius(size / 2.0)
            .paint_at(ui, rect);
        return response;
    }

    let painter = ui.painter();
    painter.circle_filled(rect.center(), size / 2.0, avatar_color(name));

    let initial = name
        .trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initial,
        FontId::new(size * 0.45, FontFamily::Proportional),
        Color32::WHITE,
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_color_deterministic() {
        assert_eq!(avatar_color("Alex Carter"), avatar_color("Alex Carter"));
        assert_ne!(avatar_color("Alex Carter"), avatar_color("StoreBot"));
    }

    #[test]
    fn test_theme_for_mode() {
        assert_eq!(ChatTheme::for_mode(ThemeMode::Dark).name, "Dark");
        assert_eq!(ChatTheme::for_mode(ThemeMode::Light).name, "Light");
    }

    #[test]
    fn test_inbound_matte_is_translucent() {
        // Inbound bubbles must stay readable over wallpapers in both modes.
        assert!(ChatTheme::dark().bubble_in.a() < 255);
        assert!(ChatTheme::light().bubble_in.a() < 255);
    }
}
