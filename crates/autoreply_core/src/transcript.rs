use std::fmt;

use chrono::{DateTime, Utc};

pub type MessageId = u64;
pub type Timestamp = DateTime<Utc>;

/// System notice appended once the simulated connection completes.
pub const CONNECTED_NOTICE: &str = "WhatsApp connection established. Auto-reply is now active.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    System,
    User,
    AutoReply,
}

impl Sender {
    pub fn label(self) -> &'static str {
        match self {
            Sender::System => "System",
            Sender::User => "User",
            Sender::AutoReply => "Auto Reply",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub sender: Sender,
    pub text: String,
    pub timestamp: Timestamp,
    pub is_auto_reply: bool,
}

/// Append-only transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageLog {
    entries: Vec<Message>,
    next_id: MessageId,
}

impl Default for MessageLog {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, sender: Sender, text: impl Into<String>, at: Timestamp) -> MessageId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Message {
            id,
            sender,
            text: text.into(),
            timestamp: at,
            is_auto_reply: sender == Sender::AutoReply,
        });
        id
    }

    pub fn entries(&self) -> &[Message] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
