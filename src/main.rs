//! Chat Mockup Studio - compose fake messenger conversations and render
//! them in a phone frame for screenshots.
//!
//! Architecture:
//! - Main thread: runs the egui UI over a typed `StudioState`
//! - Export thread: serializes transcript snapshots to JSON in the
//!   background, fed through a crossbeam channel

use eframe::egui;

use chatmock_studio::app::StudioApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1300.0, 1040.0])
            .with_min_inner_size([900.0, 700.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Chat Mockup Studio",
        options,
        Box::new(|cc| Ok(Box::new(StudioApp::new(cc)))),
    )
}
