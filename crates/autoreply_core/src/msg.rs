use crate::{RuleId, TimerId, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User clicked "Simulate Connection".
    ConnectClicked,
    /// User edited the trigger keyword input.
    TriggerInputChanged(String),
    /// User edited the auto-reply text input.
    ResponseInputChanged(String),
    /// User submitted the rule form.
    AddRuleClicked,
    /// User flipped a rule between enabled and disabled.
    RuleToggled { rule_id: RuleId },
    /// User removed a rule.
    RuleDeleted { rule_id: RuleId },
    /// User edited the test message input.
    MessageInputChanged(String),
    /// User sent the test message at `at`.
    SendClicked { at: Timestamp },
    /// A scheduled timer fired at `at`.
    TimerElapsed { timer_id: TimerId, at: Timestamp },
    /// User asked for the screen to be drawn again.
    RedrawRequested,
    /// User asked to leave; pending timers are cancelled.
    QuitRequested,
    /// Fallback for blank input.
    NoOp,
}
