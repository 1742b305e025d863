use std::collections::BTreeMap;
use std::time::Duration;

use crate::view_model::{AppViewModel, MessageRowView, RuleRowView};
use crate::{MessageLog, RuleId, RuleStore, Sender, SimulatorSettings, Timestamp, CONNECTED_NOTICE};

pub type TimerId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// Work deferred until its timer fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingEvent {
    CompleteConnection,
    /// Response text is captured when the message is submitted, so editing or
    /// deleting the rule afterwards does not change the reply.
    AutoReply { rule_id: RuleId, response: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct FormInputs {
    trigger: String,
    response: String,
    message: String,
}

/// Whole session: connection, rules, transcript, form buffers and the
/// pending-timer queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    settings: SimulatorSettings,
    connection: ConnectionState,
    rules: RuleStore,
    log: MessageLog,
    inputs: FormInputs,
    pending: BTreeMap<TimerId, PendingEvent>,
    next_timer_id: TimerId,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(SimulatorSettings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: SimulatorSettings) -> Self {
        let mut rules = RuleStore::new();
        for seed in &settings.seed_rules {
            if let Some(id) = rules.add(&seed.trigger, &seed.response) {
                if !seed.enabled {
                    rules.toggle(id);
                }
            }
        }
        Self {
            settings,
            connection: ConnectionState::Disconnected,
            rules,
            log: MessageLog::new(),
            inputs: FormInputs::default(),
            pending: BTreeMap::new(),
            next_timer_id: 1,
            dirty: true,
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            connection: self.connection,
            qr_payload: (self.connection != ConnectionState::Connected)
                .then(|| self.settings.qr_payload.clone()),
            rules: self
                .rules
                .iter()
                .map(|rule| RuleRowView {
                    rule_id: rule.id,
                    trigger: rule.trigger.clone(),
                    response: rule.response.clone(),
                    enabled: rule.enabled,
                })
                .collect(),
            enabled_rule_count: self.rules.enabled_count(),
            messages: self
                .log
                .entries()
                .iter()
                .map(|message| MessageRowView {
                    message_id: message.id,
                    sender: message.sender,
                    text: message.text.clone(),
                    timestamp: message.timestamp,
                    is_auto_reply: message.is_auto_reply,
                })
                .collect(),
            trigger_input: self.inputs.trigger.clone(),
            response_input: self.inputs.response.clone(),
            message_input: self.inputs.message.clone(),
            pending_timers: self.pending.len(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn connection(&self) -> ConnectionState {
        self.connection
    }

    pub fn rules(&self) -> &RuleStore {
        &self.rules
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn pending(&self) -> impl Iterator<Item = (TimerId, &PendingEvent)> {
        self.pending.iter().map(|(id, event)| (*id, event))
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn rules_mut(&mut self) -> &mut RuleStore {
        &mut self.rules
    }

    pub(crate) fn begin_connecting(&mut self) -> bool {
        if self.connection != ConnectionState::Disconnected {
            return false;
        }
        self.connection = ConnectionState::Connecting;
        true
    }

    pub(crate) fn complete_connection(&mut self, at: Timestamp) {
        self.connection = ConnectionState::Connected;
        self.log.append(Sender::System, CONNECTED_NOTICE, at);
    }

    pub(crate) fn append_message(&mut self, sender: Sender, text: String, at: Timestamp) {
        self.log.append(sender, text, at);
    }

    pub(crate) fn set_trigger_input(&mut self, text: String) {
        self.inputs.trigger = text;
    }

    pub(crate) fn set_response_input(&mut self, text: String) {
        self.inputs.response = text;
    }

    pub(crate) fn set_message_input(&mut self, text: String) {
        self.inputs.message = text;
    }

    pub(crate) fn rule_form(&self) -> (&str, &str) {
        (&self.inputs.trigger, &self.inputs.response)
    }

    pub(crate) fn clear_rule_form(&mut self) {
        self.inputs.trigger.clear();
        self.inputs.response.clear();
    }

    pub(crate) fn message_input(&self) -> &str {
        &self.inputs.message
    }

    pub(crate) fn take_message_input(&mut self) -> String {
        std::mem::take(&mut self.inputs.message)
    }

    /// Registers deferred work and returns the timer id to schedule.
    pub(crate) fn defer(&mut self, event: PendingEvent) -> TimerId {
        let timer_id = self.next_timer_id;
        self.next_timer_id += 1;
        self.pending.insert(timer_id, event);
        timer_id
    }

    pub(crate) fn take_pending(&mut self, timer_id: TimerId) -> Option<PendingEvent> {
        self.pending.remove(&timer_id)
    }

    pub(crate) fn drain_pending(&mut self) -> Vec<TimerId> {
        std::mem::take(&mut self.pending).into_keys().collect()
    }

    pub(crate) fn connect_delay(&self) -> Duration {
        self.settings.connect_delay
    }

    pub(crate) fn reply_delay(&self) -> Duration {
        self.settings.reply_delay
    }
}
