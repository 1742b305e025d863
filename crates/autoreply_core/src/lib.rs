//! Auto-reply core: pure session state machine and view-model helpers.
mod dispatch;
mod effect;
mod msg;
mod rules;
mod settings;
mod state;
mod transcript;
mod update;
mod view_model;

pub use dispatch::first_match;
pub use effect::Effect;
pub use msg::Msg;
pub use rules::{Rule, RuleId, RuleStore};
pub use settings::{RuleSeed, SimulatorSettings, DEFAULT_QR_PAYLOAD};
pub use state::{AppState, ConnectionState, PendingEvent, TimerId};
pub use transcript::{Message, MessageId, MessageLog, Sender, Timestamp, CONNECTED_NOTICE};
pub use update::update;
pub use view_model::{AppViewModel, MessageRowView, RuleRowView};
