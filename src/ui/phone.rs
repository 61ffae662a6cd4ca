//! Phone chrome and interface composition: bezel, iOS status bar, home
//! indicator, and the header / wallpapered message area / input bar stack.

use eframe::egui::{self, Color32, FontId, Pos2, Rect, Sense, Stroke, UiBuilder};

use crate::draft::MessageDraft;
use crate::images::ImageStore;
use crate::state::{StudioState, Viewport};
use crate::ui::theme::ChatTheme;
use crate::ui::{header, input_bar, messages};

pub const HEADER_HEIGHT: f32 = 89.0;
pub const INPUT_BAR_HEIGHT: f32 = 80.0;
pub const STATUS_BAR_HEIGHT: f32 = 44.0;
pub const QUICK_ACTIONS_HEIGHT: f32 = 41.0;

const BEZEL: f32 = 14.0;
const BEZEL_RADIUS: f32 = 54.0;

/// The full framed phone: bezel, side buttons, and the interface inside.
#[allow(clippy::too_many_arguments)]
pub fn render_phone(
    ui: &mut egui::Ui,
    theme: &ChatTheme,
    viewport: Viewport,
    state: &mut StudioState,
    draft: &MessageDraft,
    images: &mut ImageStore,
    clock: &str,
    show_preview: bool,
) {
    let (vw, vh) = viewport.size();
    let outer = egui::vec2(vw + BEZEL * 2.0, vh + BEZEL * 2.0);
    let (rect, _) = ui.allocate_exact_size(outer, Sense::hover());

    let painter = ui.painter();
    painter.rect_filled(rect, BEZEL_RADIUS, Color32::from_rgb(0x0B, 0x0B, 0x0C));

    // Side buttons on the bezel.
    let button = |y: f32, h: f32, left: bool| {
        let x = if left { rect.left() - 2.5 } else { rect.right() - 0.5 };
        Rect::from_min_size(egui::pos2(x, rect.top() + y), egui::vec2(3.0, h))
    };
    for (y, h, left) in [
        (110.0, 26.0, true),
        (160.0, 44.0, true),
        (212.0, 44.0, true),
        (170.0, 68.0, false),
    ] {
        painter.rect_filled(button(y, h, left), 1.5, Color32::from_rgb(0x1F, 0x1F, 0x21));
    }

    let screen = rect.shrink(BEZEL);
    let mut screen_ui = ui.new_child(UiBuilder::new().max_rect(screen));
    render_interface(
        &mut screen_ui,
        theme,
        viewport,
        state,
        draft,
        images,
        clock,
        show_preview,
    );
}

/// The interface without a bezel: header on top, scrollable message area
/// over the wallpaper, input bar at the bottom.
#[allow(clippy::too_many_arguments)]
pub fn render_interface(
    ui: &mut egui::Ui,
    theme: &ChatTheme,
    viewport: Viewport,
    state: &mut StudioState,
    draft: &MessageDraft,
    images: &mut ImageStore,
    clock: &str,
    show_preview: bool,
) {
    let (vw, vh) = viewport.size();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(vw, vh), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, theme.scene_bg);

    let header_rect = Rect::from_min_size(rect.min, egui::vec2(vw, HEADER_HEIGHT));
    let bar_rect = Rect::from_min_size(
        egui::pos2(rect.left(), rect.bottom() - INPUT_BAR_HEIGHT),
        egui::vec2(vw, INPUT_BAR_HEIGHT),
    );
    let msg_rect = Rect::from_min_max(
        egui::pos2(rect.left(), header_rect.bottom()),
        egui::pos2(rect.right(), bar_rect.top()),
    );

    if let Some(id) = state.wallpaper {
        if let Some(texture) = images.texture(ui.ctx(), id) {
            painter.image(
                texture.id(),
                msg_rect,
                Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
    }

    let mut msg_ui = ui.new_child(UiBuilder::new().max_rect(msg_rect));
    egui::ScrollArea::vertical()
        .max_height(msg_rect.height())
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(&mut msg_ui, |ui| {
            messages::render_transcript(ui, theme, state, draft, images, clock, show_preview);
        });

    let mut header_ui = ui.new_child(UiBuilder::new().max_rect(header_rect));
    header::render_header(&mut header_ui, theme, state, images, clock);

    if state.header.show_quick_actions {
        let strip = Rect::from_min_size(
            egui::pos2(rect.left(), header_rect.bottom()),
            egui::vec2(vw, QUICK_ACTIONS_HEIGHT),
        );
        let mut strip_ui = ui.new_child(UiBuilder::new().max_rect(strip));
        header::render_quick_actions(&mut strip_ui, theme);
    }

    let mut bar_ui = ui.new_child(UiBuilder::new().max_rect(bar_rect));
    input_bar::render_input_bar(&mut bar_ui, theme);
}

/// iOS status bar row: clock on the left, signal / wifi / battery glyphs on
/// the right, all painter-drawn.
pub fn render_status_bar(ui: &mut egui::Ui, theme: &ChatTheme, clock: &str) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), STATUS_BAR_HEIGHT),
        Sense::hover(),
    );
    let painter = ui.painter();
    let cy = rect.bottom() - 15.0;

    painter.text(
        egui::pos2(rect.left() + 52.0, cy),
        egui::Align2::CENTER_CENTER,
        clock,
        FontId::proportional(15.0),
        theme.header_text,
    );

    let right = rect.right() - 24.0;

    // Battery: shell, charge level, nub.
    let body = Rect::from_center_size(egui::pos2(right - 12.0, cy), egui::vec2(24.0, 12.0));
    painter.rect_filled(body, 3.0, theme.header_muted.gamma_multiply(0.45));
    let charge = body.shrink(2.0);
    let charge = Rect::from_min_size(charge.min, egui::vec2(charge.width() * 0.82, charge.height()));
    painter.rect_filled(charge, 2.0, theme.header_text);
    painter.rect_filled(
        Rect::from_center_size(egui::pos2(body.right() + 2.2, cy), egui::vec2(1.6, 4.2)),
        1.0,
        theme.header_muted.gamma_multiply(0.45),
    );

    // Wifi: three arcs fanning up from a point.
    let wifi_center = egui::pos2(right - 43.0, cy + 4.5);
    let stroke = Stroke::new(1.8, theme.header_text);
    for radius in [3.2_f32, 6.4, 9.6] {
        stroke_arc(painter, wifi_center, radius, -2.25, -0.9, stroke);
    }
    painter.circle_filled(wifi_center, 1.5, theme.header_text);

    // Signal: four rising bars.
    let base_x = right - 76.0;
    for (i, h) in [4.5_f32, 6.5, 8.5, 10.5].iter().enumerate() {
        let bar = Rect::from_min_size(
            egui::pos2(base_x + i as f32 * 4.6, cy + 5.0 - h),
            egui::vec2(3.0, *h),
        );
        painter.rect_filled(bar, 1.0, theme.header_text);
    }
}

/// Draw the iOS home indicator bar near the bottom of `area`.
pub fn render_home_indicator(painter: &egui::Painter, area: Rect, color: Color32) {
    let bar = Rect::from_center_size(
        egui::pos2(area.center().x, area.bottom() - 8.0),
        egui::vec2(134.0, 5.0),
    );
    painter.rect_filled(bar, 2.5, color);
}

fn stroke_arc(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
    stroke: Stroke,
) {
    const SEGMENTS: usize = 14;
    let points: Vec<Pos2> = (0..=SEGMENTS)
        .map(|i| {
            let t = start_angle + (end_angle - start_angle) * i as f32 / SEGMENTS as f32;
            center + egui::vec2(t.cos(), t.sin()) * radius
        })
        .collect();
    painter.add(egui::Shape::line(points, stroke));
}
