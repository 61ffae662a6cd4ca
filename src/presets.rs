//! Canned conversation contexts: a friend chat, a bot chat with suggestion
//! buttons, and an empty chat. Selecting one replaces the transcript and
//! seeds a matching reply draft.

use crate::chatlog::{ChatButton, ChatLog, Direction, Message};
use crate::draft::MessageDraft;
use serde::{Deserialize, Serialize};

/// Which sample context the transcript starts from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatPreset {
    #[default]
    Bot,
    Friend,
    Empty,
}

impl ChatPreset {
    pub const ALL: [ChatPreset; 3] = [ChatPreset::Bot, ChatPreset::Friend, ChatPreset::Empty];

    pub fn label(self) -> &'static str {
        match self {
            ChatPreset::Bot => "Bot Chat",
            ChatPreset::Friend => "Friend Chat",
            ChatPreset::Empty => "Empty Chat",
        }
    }

    /// Display name shown in the chat header for this context.
    pub fn recipient_name(self) -> &'static str {
        match self {
            ChatPreset::Bot => "StoreBot",
            ChatPreset::Friend => "Alex Carter",
            ChatPreset::Empty => "Random User",
        }
    }
}

/// Build the sample transcript for a preset.
pub fn preset_log(preset: ChatPreset) -> ChatLog {
    match preset {
        ChatPreset::Bot => bot_chat(),
        ChatPreset::Friend => friend_chat(),
        ChatPreset::Empty => ChatLog::new(),
    }
}

/// Seed a reply draft that fits the preset's conversation.
pub fn preset_draft(preset: ChatPreset) -> MessageDraft {
    let mut draft = MessageDraft::new();
    draft.direction = Direction::Outbound;
    draft.text = match preset {
        ChatPreset::Bot => {
            "I'd like to know about any special offers or updates you have! What's new and exciting?"
                .into()
        }
        ChatPreset::Friend => {
            "Marketing sounds exciting! Are you working with a big team?".into()
        }
        ChatPreset::Empty => return MessageDraft::new(),
    };
    draft
}

fn friend_chat() -> ChatLog {
    let inbound = |text: &str| Message::text(Direction::Inbound, text);
    let outbound = |text: &str| Message::text(Direction::Outbound, text);

    let mut photo = Message::photo(
        Direction::Outbound,
        None,
        "I'm good! Just got back from a 15km run in the mountains.",
    );
    photo.file_name = "Rocky Mountains".into();
    photo.file_size = "1.4".into();
    photo.file_extension = ".JPG".into();

    [
        inbound("Hey! How's it going?"),
        inbound("I'm working on a new project."),
        photo,
        outbound("Doing some work on the side"),
        inbound("Only a couple of miles, nothing crazy."),
        outbound("Thanks! So, anything new?"),
        inbound("Actually, I have some news! I got a new job."),
        outbound("Congrats! What's the role?"),
        inbound("Thanks! It's in marketing."),
    ]
    .into_iter()
    .fold(ChatLog::new(), |log, msg| log.with_message(msg))
}

fn bot_chat() -> ChatLog {
    let welcome = "Welcome to our store!\n\
        We're so glad to have you here. 😊\n\
        \n\
        Here's how we can assist you today:\n\
        \n\
        1. Track Your Order – Easily check the status of your recent purchase.\n\
        2. Browse Products – Discover our range of categories, from electronics to home goods.\n\
        3. Talk to Support – Need help? We're here to assist you with any queries.\n\
        \n\
        Choose one of the options below, or type your question to get started!";

    let reply = Message::text(Direction::Inbound, welcome).with_buttons(vec![
        vec![ChatButton::new("🧾 Track my order")],
        vec![ChatButton::new("🔎 Browse products")],
        vec![ChatButton::new("📣 Talk to support")],
    ]);

    ChatLog::new()
        .with_message(Message::text(Direction::Outbound, "Hello! Start"))
        .with_message(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chatlog::ChatEntry;

    fn groups_are_homogeneous(log: &ChatLog) -> bool {
        log.entries.iter().all(|entry| match entry {
            ChatEntry::MessageGroup(msgs) => {
                !msgs.is_empty() && msgs.iter().all(|m| m.direction == msgs[0].direction)
            }
            ChatEntry::DayDivider { .. } => true,
        })
    }

    #[test]
    fn test_friend_chat_groups() {
        let log = friend_chat();
        assert!(groups_are_homogeneous(&log));
        assert_eq!(log.message_count(), 9);
        // Consecutive inbound openers merge into one group.
        match &log.entries[0] {
            ChatEntry::MessageGroup(msgs) => assert_eq!(msgs.len(), 2),
            other => panic!("expected group, got {:?}", other),
        }
    }

    #[test]
    fn test_bot_chat_has_button_rows() {
        let log = bot_chat();
        assert!(groups_are_homogeneous(&log));
        let reply = log.last_message().unwrap();
        assert_eq!(reply.direction, Direction::Inbound);
        assert_eq!(reply.buttons.len(), 3);
        assert!(reply.buttons.iter().all(|row| row.len() == 1));
    }

    #[test]
    fn test_empty_preset() {
        assert!(preset_log(ChatPreset::Empty).is_empty());
    }

    #[test]
    fn test_preset_drafts_reply_outbound() {
        assert_eq!(preset_draft(ChatPreset::Bot).direction, Direction::Outbound);
        assert_eq!(
            preset_draft(ChatPreset::Friend).direction,
            Direction::Outbound
        );
        // The empty chat starts from the stock sample draft.
        assert_eq!(preset_draft(ChatPreset::Empty).text, "Sample Text");
    }
}
