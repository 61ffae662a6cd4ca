//! The chat transcript model: messages, day dividers, and the grouping rules
//! that merge consecutive same-direction messages into visual runs.
//!
//! Everything here is a plain value type. Append operations are
//! copy-on-write: they take the log by reference and return a new log, so a
//! failed append can never leave the caller holding a half-updated
//! transcript.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the conversation a message belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Received message, rendered on the left.
    Inbound,
    /// Sent message, rendered on the right with delivery checks.
    Outbound,
}

impl Direction {
    /// The opposite side. Used by the authoring panel to alternate sides
    /// after each commit; the log itself never calls this.
    pub fn flipped(self) -> Self {
        match self {
            Direction::Inbound => Direction::Outbound,
            Direction::Outbound => Direction::Inbound,
        }
    }
}

/// What a bubble renders as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    /// Document row: preview thumbnail, name, extension, size.
    File,
    /// Plain text bubble.
    Text,
    /// Photo bubble with an optional caption.
    Image,
}

/// Opaque handle to an image held by the presentation layer's image store.
/// The transcript only carries the reference, never pixel data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageId(pub u64);

/// A single tappable button rendered beneath a bubble.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatButton {
    pub label: String,
}

impl ChatButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

/// Emoji reaction pill attached to a bubble.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    pub emoji: String,
    /// Mini avatar of the reacting user, if one was loaded.
    pub avatar: Option<ImageId>,
}

/// One composed message. Immutable: edits in the authoring panel build a new
/// `Message` rather than mutating one already in the log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub direction: Direction,
    pub kind: MessageKind,
    pub text: String,
    pub file_name: String,
    pub file_size: String,
    pub file_extension: String,
    /// File bubbles: show an image thumbnail instead of the document icon.
    pub is_compressed_image: bool,
    pub image: Option<ImageId>,
    /// Display time ("12:34"). `None` means "use the studio clock".
    pub timestamp: Option<String>,
    pub reaction: Option<Reaction>,
    /// Rows of buttons rendered beneath the bubble.
    pub buttons: Vec<Vec<ChatButton>>,
}

impl Message {
    /// A plain text message with everything else empty.
    pub fn text(direction: Direction, text: impl Into<String>) -> Self {
        Self {
            direction,
            kind: MessageKind::Text,
            text: text.into(),
            file_name: String::new(),
            file_size: String::new(),
            file_extension: String::new(),
            is_compressed_image: false,
            image: None,
            timestamp: None,
            reaction: None,
            buttons: Vec::new(),
        }
    }

    /// A photo message with an optional caption.
    pub fn photo(direction: Direction, image: Option<ImageId>, caption: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Image,
            text: caption.into(),
            image,
            ..Self::text(direction, "")
        }
    }

    /// A document message.
    pub fn file(
        direction: Direction,
        name: impl Into<String>,
        size: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            kind: MessageKind::File,
            file_name: name.into(),
            file_size: size.into(),
            file_extension: extension.into(),
            is_compressed_image: true,
            ..Self::text(direction, "")
        }
    }

    pub fn with_buttons(mut self, buttons: Vec<Vec<ChatButton>>) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn with_reaction(mut self, reaction: Reaction) -> Self {
        self.reaction = Some(reaction);
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }
}

/// One unit of the transcript: a centered day label, or a run of messages
/// that all share a direction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ChatEntry {
    DayDivider { label: String },
    /// Invariant: non-empty, all messages share one direction.
    MessageGroup(Vec<Message>),
}

/// Error returned when a day divider is appended with a blank label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyLabel;

impl fmt::Display for EmptyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day divider label cannot be empty")
    }
}

impl std::error::Error for EmptyLabel {}

/// The canonical transcript: an ordered list of dividers and message runs.
///
/// Entries are only ever created by the append operations below; nothing in
/// the core removes or reorders them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatLog {
    pub entries: Vec<ChatEntry>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of messages across all groups.
    pub fn message_count(&self) -> usize {
        self.entries
            .iter()
            .map(|e| match e {
                ChatEntry::MessageGroup(msgs) => msgs.len(),
                ChatEntry::DayDivider { .. } => 0,
            })
            .sum()
    }

    /// The most recently appended message, if any.
    pub fn last_message(&self) -> Option<&Message> {
        self.entries.iter().rev().find_map(|e| match e {
            ChatEntry::MessageGroup(msgs) => msgs.last(),
            ChatEntry::DayDivider { .. } => None,
        })
    }

    /// Append a message, merging it into the last group when the direction
    /// matches, otherwise starting a new group. The message's direction is
    /// taken as given; side-alternation is the authoring panel's business.
    #[must_use]
    pub fn with_message(&self, msg: Message) -> ChatLog {
        let mut next = self.clone();
        match next.entries.last_mut() {
            Some(ChatEntry::MessageGroup(msgs))
                if msgs.last().map(|m| m.direction) == Some(msg.direction) =>
            {
                msgs.push(msg);
            }
            _ => next.entries.push(ChatEntry::MessageGroup(vec![msg])),
        }
        next
    }

    /// Append a day divider. Dividers never merge, even with an adjacent
    /// divider. A blank or whitespace-only label is rejected and `self` is
    /// left untouched.
    pub fn with_day_divider(&self, label: &str) -> Result<ChatLog, EmptyLabel> {
        let label = label.trim();
        if label.is_empty() {
            return Err(EmptyLabel);
        }
        let mut next = self.clone();
        next.entries.push(ChatEntry::DayDivider {
            label: label.to_string(),
        });
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inbound(text: &str) -> Message {
        Message::text(Direction::Inbound, text)
    }

    fn outbound(text: &str) -> Message {
        Message::text(Direction::Outbound, text)
    }

    #[test]
    fn test_append_merges_same_direction() {
        let log = ChatLog::new()
            .with_message(inbound("Hi"))
            .with_message(inbound("There"));

        assert_eq!(log.entries.len(), 1);
        match &log.entries[0] {
            ChatEntry::MessageGroup(msgs) => {
                assert_eq!(msgs.len(), 2);
                assert!(msgs.iter().all(|m| m.direction == Direction::Inbound));
            }
            other => panic!("expected message group, got {:?}", other),
        }
    }

    #[test]
    fn test_append_starts_new_group_on_direction_change() {
        let log = ChatLog::new()
            .with_message(inbound("Hi"))
            .with_message(inbound("There"))
            .with_message(outbound("Hello"));

        assert_eq!(log.entries.len(), 2);
        match (&log.entries[0], &log.entries[1]) {
            (ChatEntry::MessageGroup(first), ChatEntry::MessageGroup(second)) => {
                assert_eq!(first.len(), 2);
                assert_eq!(second.len(), 1);
                assert_eq!(second[0].direction, Direction::Outbound);
                assert_eq!(second[0].text, "Hello");
            }
            other => panic!("expected two message groups, got {:?}", other),
        }
    }

    #[test]
    fn test_append_is_copy_on_write() {
        let original = ChatLog::new().with_message(inbound("Hi"));
        let extended = original.with_message(inbound("There"));

        assert_eq!(original.message_count(), 1);
        assert_eq!(extended.message_count(), 2);
    }

    #[test]
    fn test_divider_never_merges() {
        let log = ChatLog::new();
        let log = log.with_day_divider("Monday").unwrap();
        let log = log.with_day_divider("Tuesday").unwrap();

        assert_eq!(log.entries.len(), 2);
        assert!(matches!(&log.entries[0], ChatEntry::DayDivider { label } if label == "Monday"));
        assert!(matches!(&log.entries[1], ChatEntry::DayDivider { label } if label == "Tuesday"));
    }

    #[test]
    fn test_divider_splits_groups() {
        let log = ChatLog::new()
            .with_message(inbound("before"))
            .with_day_divider("Today")
            .unwrap()
            .with_message(inbound("after"));

        // Same direction on both sides of a divider must not merge.
        assert_eq!(log.entries.len(), 3);
        assert_eq!(log.message_count(), 2);
    }

    #[test]
    fn test_divider_rejects_blank_labels() {
        let log = ChatLog::new().with_message(inbound("Hi"));

        assert_eq!(log.with_day_divider("").unwrap_err(), EmptyLabel);
        assert_eq!(log.with_day_divider("   ").unwrap_err(), EmptyLabel);
        // Rejection left the original untouched.
        assert_eq!(log.entries.len(), 1);
    }

    #[test]
    fn test_divider_label_is_trimmed() {
        let log = ChatLog::new().with_day_divider("  Monday  ").unwrap();
        assert!(matches!(&log.entries[0], ChatEntry::DayDivider { label } if label == "Monday"));
    }

    #[test]
    fn test_last_message_skips_dividers() {
        let log = ChatLog::new()
            .with_message(outbound("latest"))
            .with_day_divider("Today")
            .unwrap();

        assert_eq!(log.last_message().map(|m| m.text.as_str()), Some("latest"));
        assert!(ChatLog::new().last_message().is_none());
    }

    #[test]
    fn test_direction_flipped() {
        assert_eq!(Direction::Inbound.flipped(), Direction::Outbound);
        assert_eq!(Direction::Outbound.flipped(), Direction::Inbound);
    }
}
