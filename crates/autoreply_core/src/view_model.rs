use crate::{ConnectionState, MessageId, RuleId, Sender, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub connection: ConnectionState,
    /// Present until the connection completes.
    pub qr_payload: Option<String>,
    pub rules: Vec<RuleRowView>,
    pub enabled_rule_count: usize,
    pub messages: Vec<MessageRowView>,
    pub trigger_input: String,
    pub response_input: String,
    pub message_input: String,
    pub pending_timers: usize,
    pub dirty: bool,
}

impl AppViewModel {
    pub fn is_connected(&self) -> bool {
        self.connection == ConnectionState::Connected
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRowView {
    pub rule_id: RuleId,
    pub trigger: String,
    pub response: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRowView {
    pub message_id: MessageId,
    pub sender: Sender,
    pub text: String,
    pub timestamp: Timestamp,
    pub is_auto_reply: bool,
}
