//! Core StudioApp struct definition and initialization

use chrono::Local;
use eframe::egui;

use crate::config::{self, Project, Settings};
use crate::draft::MessageDraft;
use crate::export::{ExportSnapshot, Exporter};
use crate::images::ImageStore;
use crate::presets;
use crate::state::{DisplayMode, StudioState, ThemeMode, Viewport};
use crate::ui;
use crate::ui::builder::BuilderPanel;
use crate::ui::theme::ChatTheme;

pub struct StudioApp {
    // Composed mockup (transcript, header, intro card, wallpaper)
    pub state: StudioState,

    // Message under composition in the authoring panel
    pub draft: MessageDraft,

    // Loaded images and their egui textures
    pub images: ImageStore,

    // Panel-local buffers (paths, divider label)
    pub builder: BuilderPanel,

    // Display preferences
    pub theme_mode: ThemeMode,
    pub display_mode: DisplayMode,
    pub viewport: Viewport,
    pub edit_mode: bool,

    // Background transcript export; None if the worker failed to start
    pub exporter: Option<Exporter>,

    /// Studio clock shown in the status bar and on unstamped messages.
    pub clock: String,
}

impl StudioApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Try to load persisted settings and apply theme in creation context
        let settings = config::load_settings().unwrap_or_default();
        ui::theme::apply_app_style(&cc.egui_ctx, settings.theme);

        // Restore the last composed mockup, or start from the default preset
        let (state, images) = match config::load_project() {
            Some(project) => (project.state, ImageStore::restore(&project.images)),
            None => (StudioState::new(), ImageStore::new()),
        };

        let draft = presets::preset_draft(state.preset);

        let exporter = match Exporter::new() {
            Ok(exporter) => Some(exporter),
            Err(e) => {
                eprintln!("Failed to start exporter: {}", e);
                None
            }
        };

        Self {
            state,
            draft,
            images,
            builder: BuilderPanel::new(),
            theme_mode: settings.theme,
            display_mode: settings.display_mode,
            viewport: settings.viewport,
            edit_mode: settings.edit_mode,
            exporter,
            clock: Local::now().format("%H:%M").to_string(),
        }
    }

    pub(super) fn theme(&self) -> ChatTheme {
        ChatTheme::for_mode(self.theme_mode)
    }

    pub(super) fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme_mode = self.theme_mode.toggled();
        ui::theme::apply_app_style(ctx, self.theme_mode);
    }

    /// Queue a JSON export of the current transcript.
    pub(super) fn export_transcript(&mut self) {
        match &self.exporter {
            Some(exporter) => {
                exporter.export(ExportSnapshot {
                    context: self.state.preset.label().to_string(),
                    recipient: self.state.header.recipient_name.clone(),
                    log: self.state.log.clone(),
                });
                self.state.push_status("Transcript export queued");
            }
            None => self.state.push_status("Exporter unavailable"),
        }
    }

    fn settings(&self) -> Settings {
        Settings {
            theme: self.theme_mode,
            display_mode: self.display_mode,
            viewport: self.viewport,
            edit_mode: self.edit_mode,
        }
    }
}

impl Drop for StudioApp {
    fn drop(&mut self) {
        // Persist settings and the composed mockup on exit
        if let Err(e) = config::save_settings(&self.settings()) {
            eprintln!("Failed to save settings: {}", e);
        }
        let project = Project {
            state: self.state.clone(),
            images: self.images.persisted_paths(),
        };
        if let Err(e) = config::save_project(&project) {
            eprintln!("Failed to save project: {}", e);
        }
    }
}
