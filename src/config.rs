use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::chatlog::ImageId;
use crate::state::{DisplayMode, StudioState, ThemeMode, Viewport};

/// Studio preferences persisted between runs.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Settings {
    pub theme: ThemeMode,
    pub display_mode: DisplayMode,
    pub viewport: Viewport,
    /// Whether the authoring panel is open.
    pub edit_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Dark,
            display_mode: DisplayMode::PhoneFrame,
            viewport: Viewport::Large,
            edit_mode: true,
        }
    }
}

/// The composed mockup plus the source paths of every loaded image, so the
/// image store can be rebuilt on the next run.
#[derive(Serialize, Deserialize, Default)]
pub struct Project {
    pub state: StudioState,
    pub images: Vec<(ImageId, PathBuf)>,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "chatmock", "chatmock-studio")
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(proj) = project_dirs() {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Failed to create config dir: {}", e);
            return None;
        }
        return Some(dir.join("settings.json"));
    }
    None
}

pub fn project_path() -> Option<PathBuf> {
    if let Some(proj) = project_dirs() {
        let dir = proj.data_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Failed to create data dir: {}", e);
            return None;
        }
        return Some(dir.join("project.json"));
    }
    None
}

pub fn load_settings() -> Option<Settings> {
    let path = settings_path()?;
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

pub fn save_settings(settings: &Settings) -> std::io::Result<()> {
    if let Some(path) = settings_path() {
        let mut file = fs::File::create(path)?;
        let data = serde_json::to_string_pretty(settings).unwrap();
        file.write_all(data.as_bytes())?;
    }
    Ok(())
}

pub fn load_project() -> Option<Project> {
    let path = project_path()?;
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

pub fn save_project(project: &Project) -> std::io::Result<()> {
    if let Some(path) = project_path() {
        let mut file = fs::File::create(path)?;
        let data = serde_json::to_string_pretty(project).unwrap();
        file.write_all(data.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_round_trip() {
        let settings = Settings {
            theme: ThemeMode::Light,
            display_mode: DisplayMode::Messages,
            viewport: Viewport::Small,
            edit_mode: false,
        };

        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.theme, ThemeMode::Light);
        assert_eq!(back.display_mode, DisplayMode::Messages);
        assert_eq!(back.viewport, Viewport::Small);
        assert!(!back.edit_mode);
    }

    #[test]
    fn test_project_round_trip_keeps_transcript() {
        use crate::chatlog::{ChatLog, Direction, Message};

        let mut project = Project::default();
        project.state.log = ChatLog::new()
            .with_message(Message::text(Direction::Inbound, "Hi"))
            .with_message(Message::text(Direction::Outbound, "Hello"));
        project.images.push((ImageId(3), PathBuf::from("wall.png")));

        let json = serde_json::to_string(&project).unwrap();
        let back: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(back.state.log, project.state.log);
        assert_eq!(back.images, project.images);
    }

    #[test]
    fn test_default_settings_open_editor() {
        let settings = Settings::default();
        assert!(settings.edit_mode);
        assert_eq!(settings.theme, ThemeMode::Dark);
    }
}
