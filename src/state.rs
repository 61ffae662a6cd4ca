//! Core studio state, separated from UI logic.
//!
//! `StudioState` holds everything that describes the composed mockup:
//! the transcript, header metadata, intro card, wallpaper, and transient
//! status toasts. This separation allows UI components to receive state as
//! a parameter rather than owning it, and gives the whole mockup one typed
//! value that serializes as the project file.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::chatlog::{ChatLog, EmptyLabel, ImageId};
use crate::draft::MessageDraft;
use crate::presets::{self, ChatPreset};

/// Dark or light rendering of both the phone mock and the studio chrome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "Dark",
            ThemeMode::Light => "Light",
        }
    }
}

/// How much of the phone mock is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayMode {
    /// Full framed phone.
    #[default]
    PhoneFrame,
    /// Interface only, no bezel.
    Viewport,
    /// The message area alone.
    Messages,
    /// Just the most recent bubble.
    LastMessage,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 4] = [
        DisplayMode::PhoneFrame,
        DisplayMode::Viewport,
        DisplayMode::Messages,
        DisplayMode::LastMessage,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::PhoneFrame => "Framed Phone",
            DisplayMode::Viewport => "Viewport",
            DisplayMode::Messages => "Chat Messages",
            DisplayMode::LastMessage => "Last Message Only",
        }
    }
}

/// Phone dimensions the interface is laid out for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Viewport {
    #[default]
    Large,
    Medium,
    Small,
}

impl Viewport {
    pub const ALL: [Viewport; 3] = [Viewport::Large, Viewport::Medium, Viewport::Small];

    pub fn size(self) -> (f32, f32) {
        match self {
            Viewport::Large => (390.0, 932.0),
            Viewport::Medium => (390.0, 844.0),
            Viewport::Small => (375.0, 667.0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Viewport::Large => "390x932 (Default)",
            Viewport::Medium => "390x844 (iPhone 12/13 Pro)",
            Viewport::Small => "375x667 (iPhone SE)",
        }
    }
}

/// Recipient metadata shown in the chat header.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeaderProfile {
    pub recipient_name: String,
    pub last_seen: String,
    pub avatar: Option<ImageId>,
    /// "Block User / Add to Contacts" strip under the header.
    pub show_quick_actions: bool,
}

impl Default for HeaderProfile {
    fn default() -> Self {
        Self {
            recipient_name: "Random User".into(),
            last_seen: "last seen just now".into(),
            avatar: None,
            show_quick_actions: false,
        }
    }
}

/// The "new user" card rendered at the top of the message area.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IntroCard {
    pub visible: bool,
    pub username: String,
    pub country: String,
    pub registration: String,
}

impl Default for IntroCard {
    fn default() -> Self {
        Self {
            visible: true,
            username: "Random User".into(),
            country: "🇳🇬 Nigeria".into(),
            registration: "January 2024".into(),
        }
    }
}

/// Everything that makes up the composed mockup.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StudioState {
    /// The canonical transcript.
    pub log: ChatLog,

    /// Which canned context the transcript started from.
    pub preset: ChatPreset,

    pub header: HeaderProfile,
    pub intro_card: IntroCard,

    /// Wallpaper behind the message area.
    pub wallpaper: Option<ImageId>,

    /// Status toast messages with creation time (auto-expire).
    #[serde(skip)]
    pub status_messages: Vec<(String, Instant)>,
}

impl Default for StudioState {
    fn default() -> Self {
        Self::new()
    }
}

impl StudioState {
    /// Fresh state seeded with the default preset's conversation.
    pub fn new() -> Self {
        let preset = ChatPreset::default();
        let header = HeaderProfile {
            recipient_name: preset.recipient_name().into(),
            ..HeaderProfile::default()
        };

        Self {
            log: presets::preset_log(preset),
            preset,
            header,
            intro_card: IntroCard::default(),
            wallpaper: None,
            status_messages: Vec::new(),
        }
    }

    /// Replace the transcript with a preset's sample conversation and point
    /// the header at the matching recipient.
    pub fn apply_preset(&mut self, preset: ChatPreset) {
        self.preset = preset;
        self.log = presets::preset_log(preset);
        self.header.recipient_name = preset.recipient_name().into();
    }

    /// Commit the authoring draft to the transcript.
    pub fn commit_draft(&mut self, draft: &mut MessageDraft) {
        self.log = draft.commit(&self.log);
    }

    /// Append a day divider; a blank label leaves the transcript untouched.
    pub fn add_day_divider(&mut self, label: &str) -> Result<(), EmptyLabel> {
        self.log = self.log.with_day_divider(label)?;
        Ok(())
    }

    /// Queue a status toast.
    pub fn push_status(&mut self, text: impl Into<String>) {
        self.status_messages.push((text.into(), Instant::now()));
    }

    /// Purge status messages older than the given duration.
    pub fn purge_old_status_messages(&mut self, max_age_secs: u64) {
        self.status_messages
            .retain(|(_, created)| created.elapsed().as_secs() < max_age_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chatlog::Direction;

    #[test]
    fn test_studio_state_new() {
        let state = StudioState::new();
        assert_eq!(state.preset, ChatPreset::Bot);
        assert_eq!(state.header.recipient_name, "StoreBot");
        assert!(!state.log.is_empty());
        assert!(state.intro_card.visible);
    }

    #[test]
    fn test_apply_preset() {
        let mut state = StudioState::new();
        state.apply_preset(ChatPreset::Friend);
        assert_eq!(state.preset, ChatPreset::Friend);
        assert_eq!(state.header.recipient_name, "Alex Carter");
        assert_eq!(state.log.message_count(), 9);

        state.apply_preset(ChatPreset::Empty);
        assert!(state.log.is_empty());
    }

    #[test]
    fn test_commit_draft_extends_log() {
        let mut state = StudioState::new();
        state.apply_preset(ChatPreset::Empty);

        let mut draft = MessageDraft::new();
        draft.direction = Direction::Inbound;
        draft.text = "Hi".into();
        state.commit_draft(&mut draft);

        assert_eq!(state.log.message_count(), 1);
        assert_eq!(draft.direction, Direction::Outbound);
    }

    #[test]
    fn test_add_day_divider_rejects_blank() {
        let mut state = StudioState::new();
        let before = state.log.clone();

        assert!(state.add_day_divider("  ").is_err());
        assert_eq!(state.log, before);

        assert!(state.add_day_divider("Monday").is_ok());
        assert_eq!(state.log.entries.len(), before.entries.len() + 1);
    }

    #[test]
    fn test_purge_old_status_messages() {
        let mut state = StudioState::new();
        state.push_status("Exported");
        // Fresh toasts survive a zero-age purge boundary of 1 second.
        state.purge_old_status_messages(1);
        assert_eq!(state.status_messages.len(), 1);
        // A max age of zero drops everything.
        state.purge_old_status_messages(0);
        assert!(state.status_messages.is_empty());
    }

    #[test]
    fn test_viewport_sizes() {
        assert_eq!(Viewport::Small.size(), (375.0, 667.0));
        assert!(Viewport::Large.size().1 > Viewport::Medium.size().1);
    }
}
