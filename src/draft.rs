//! Editor state for the authoring panel.
//!
//! `MessageDraft` is the one mutable, message-shaped record the panel edits
//! field by field. Committing builds an immutable [`Message`] and appends it
//! through the transcript's grouping rules; the draft itself survives the
//! commit so the user can keep firing variations into the chat.

use crate::chatlog::{ChatButton, ChatLog, Direction, ImageId, Message, MessageKind, Reaction};

/// Mutable message under composition, plus ephemeral panel flags.
#[derive(Clone, Debug)]
pub struct MessageDraft {
    pub direction: Direction,
    pub kind: MessageKind,
    pub text: String,
    pub file_name: String,
    pub file_size: String,
    pub file_extension: String,
    pub is_compressed_image: bool,
    pub image: Option<ImageId>,
    /// Display-time override; blank commits as "use the studio clock".
    pub timestamp: String,
    pub reaction_enabled: bool,
    pub reaction_emoji: String,
    pub reaction_avatar: Option<ImageId>,
    pub buttons: Vec<Vec<ChatButton>>,

    /// Hide the live preview bubble without losing the draft.
    pub hide_preview: bool,
}

impl Default for MessageDraft {
    fn default() -> Self {
        Self {
            direction: Direction::Inbound,
            kind: MessageKind::Text,
            text: "Sample Text".into(),
            file_name: "File_Name".into(),
            file_size: "1.4".into(),
            file_extension: ".PNG".into(),
            is_compressed_image: true,
            image: None,
            timestamp: String::new(),
            reaction_enabled: false,
            reaction_emoji: "❤".into(),
            reaction_avatar: None,
            buttons: Vec::new(),
            hide_preview: false,
        }
    }
}

impl MessageDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore the default sample inputs. Preview visibility is an
    /// independent panel preference and is kept.
    pub fn reset(&mut self) {
        let hide_preview = self.hide_preview;
        *self = Self::default();
        self.hide_preview = hide_preview;
    }

    /// Append an empty-but-labeled button row.
    pub fn add_button_row(&mut self) {
        let row = self.buttons.len();
        self.buttons
            .push(vec![ChatButton::new(format!("Button {}-1", row + 1))]);
    }

    /// Append a button to an existing row.
    pub fn add_button(&mut self, row: usize) {
        if let Some(buttons) = self.buttons.get_mut(row) {
            let label = format!("Button {}-{}", row + 1, buttons.len() + 1);
            buttons.push(ChatButton::new(label));
        }
    }

    /// Remove the last button of a row; removing the only button removes the
    /// row itself, so no row is ever left empty.
    pub fn remove_button(&mut self, row: usize) {
        match self.buttons.get_mut(row) {
            Some(buttons) if buttons.len() > 1 => {
                buttons.pop();
            }
            Some(_) => {
                self.buttons.remove(row);
            }
            None => {}
        }
    }

    pub fn set_button_label(&mut self, row: usize, index: usize, label: impl Into<String>) {
        if let Some(button) = self.buttons.get_mut(row).and_then(|r| r.get_mut(index)) {
            button.label = label.into();
        }
    }

    /// Build the immutable message this draft currently describes.
    pub fn as_message(&self) -> Message {
        let timestamp = match self.timestamp.trim() {
            "" => None,
            t => Some(t.to_string()),
        };
        let reaction = if self.reaction_enabled {
            Some(Reaction {
                emoji: self.reaction_emoji.clone(),
                avatar: self.reaction_avatar,
            })
        } else {
            None
        };

        Message {
            direction: self.direction,
            kind: self.kind,
            text: self.text.clone(),
            file_name: self.file_name.clone(),
            file_size: self.file_size.clone(),
            file_extension: self.file_extension.clone(),
            is_compressed_image: self.is_compressed_image,
            image: self.image,
            timestamp,
            reaction,
            buttons: self.buttons.clone(),
        }
    }

    /// Commit the draft to the transcript and return the extended log.
    ///
    /// The committed message keeps the direction as composed; afterwards the
    /// draft's own direction flips so that repeated commits alternate sides.
    /// That alternation is authoring convenience only — the log's grouping
    /// rules never change a direction.
    #[must_use]
    pub fn commit(&mut self, log: &ChatLog) -> ChatLog {
        let next = log.with_message(self.as_message());
        self.direction = self.direction.flipped();
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chatlog::ChatEntry;

    #[test]
    fn test_default_draft_is_sample_text() {
        let draft = MessageDraft::new();
        assert_eq!(draft.kind, MessageKind::Text);
        assert_eq!(draft.direction, Direction::Inbound);
        assert_eq!(draft.text, "Sample Text");
        assert!(!draft.hide_preview);
    }

    #[test]
    fn test_button_rows_never_empty() {
        let mut draft = MessageDraft::new();
        draft.add_button_row();
        draft.add_button(0);
        assert_eq!(draft.buttons[0].len(), 2);
        assert_eq!(draft.buttons[0][1].label, "Button 1-2");

        draft.remove_button(0);
        assert_eq!(draft.buttons[0].len(), 1);

        // Removing the last button drops the whole row.
        draft.remove_button(0);
        assert!(draft.buttons.is_empty());

        // Out-of-range row is a no-op.
        draft.remove_button(5);
    }

    #[test]
    fn test_set_button_label() {
        let mut draft = MessageDraft::new();
        draft.add_button_row();
        draft.set_button_label(0, 0, "Track my order");
        assert_eq!(draft.buttons[0][0].label, "Track my order");
    }

    #[test]
    fn test_blank_timestamp_commits_as_none() {
        let mut draft = MessageDraft::new();
        draft.timestamp = "   ".into();
        assert_eq!(draft.as_message().timestamp, None);

        draft.timestamp = "12:34".into();
        assert_eq!(draft.as_message().timestamp.as_deref(), Some("12:34"));
    }

    #[test]
    fn test_reaction_only_when_enabled() {
        let mut draft = MessageDraft::new();
        draft.reaction_emoji = "🔥".into();
        assert!(draft.as_message().reaction.is_none());

        draft.reaction_enabled = true;
        let msg = draft.as_message();
        assert_eq!(msg.reaction.unwrap().emoji, "🔥");
    }

    #[test]
    fn test_commit_appends_and_flips_direction() {
        let mut draft = MessageDraft::new();
        draft.direction = Direction::Inbound;
        draft.text = "first".into();

        let log = draft.commit(&ChatLog::new());
        assert_eq!(draft.direction, Direction::Outbound);

        draft.text = "second".into();
        let log = draft.commit(&log);
        assert_eq!(draft.direction, Direction::Inbound);

        // Alternating directions produce two singleton groups.
        assert_eq!(log.entries.len(), 2);
        for entry in &log.entries {
            assert!(matches!(entry, ChatEntry::MessageGroup(msgs) if msgs.len() == 1));
        }
    }

    #[test]
    fn test_committed_message_keeps_composed_direction() {
        let mut draft = MessageDraft::new();
        draft.direction = Direction::Outbound;

        let log = draft.commit(&ChatLog::new());
        assert_eq!(
            log.last_message().map(|m| m.direction),
            Some(Direction::Outbound)
        );
    }

    #[test]
    fn test_reset_keeps_preview_preference() {
        let mut draft = MessageDraft::new();
        draft.hide_preview = true;
        draft.text = "edited".into();
        draft.add_button_row();

        draft.reset();
        assert_eq!(draft.text, "Sample Text");
        assert!(draft.buttons.is_empty());
        assert!(draft.hide_preview);
    }
}
