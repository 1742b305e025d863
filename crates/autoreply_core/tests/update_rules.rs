use autoreply_core::{update, AppState, Effect, Msg, RuleRowView, RuleSeed, SimulatorSettings};
use pretty_assertions::assert_eq;

fn empty_state() -> AppState {
    AppState::with_settings(SimulatorSettings {
        seed_rules: Vec::new(),
        ..SimulatorSettings::default()
    })
}

fn add_rule(state: AppState, trigger: &str, response: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::TriggerInputChanged(trigger.to_string()));
    let (state, _) = update(state, Msg::ResponseInputChanged(response.to_string()));
    update(state, Msg::AddRuleClicked)
}

#[test]
fn default_session_starts_with_seed_rules() {
    let view = AppState::new().view();
    let triggers: Vec<_> = view.rules.iter().map(|r| r.trigger.as_str()).collect();

    assert_eq!(triggers, vec!["hello", "price", "hours"]);
    assert_eq!(view.enabled_rule_count, 3);
}

#[test]
fn disabled_seed_is_loaded_disabled() {
    let state = AppState::with_settings(SimulatorSettings {
        seed_rules: vec![RuleSeed {
            trigger: "refund".to_string(),
            response: "Refunds take 5 days.".to_string(),
            enabled: false,
        }],
        ..SimulatorSettings::default()
    });
    let view = state.view();

    assert_eq!(view.rules.len(), 1);
    assert!(!view.rules[0].enabled);
    assert_eq!(view.enabled_rule_count, 0);
}

#[test]
fn add_rule_appends_enabled_lowercased_rule() {
    let (mut state, effects) = add_rule(empty_state(), "Refund", "Refunds take 5 days.");
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(
        view.rules,
        vec![RuleRowView {
            rule_id: 1,
            trigger: "refund".to_string(),
            response: "Refunds take 5 days.".to_string(),
            enabled: true,
        }]
    );
    assert_eq!(view.trigger_input, "");
    assert_eq!(view.response_input, "");
    assert!(state.consume_dirty());
}

#[test]
fn add_rule_grows_store_by_one() {
    let state = AppState::new();
    let before = state.rules().len();

    let (state, _) = add_rule(state, "ship", "We ship worldwide.");

    assert_eq!(state.rules().len(), before + 1);
    let last = state.rules().iter().last().unwrap();
    assert_eq!(last.trigger, "ship");
    assert!(last.enabled);
}

#[test]
fn blank_trigger_or_response_leaves_store_unchanged() {
    let mut state = empty_state();
    assert!(state.consume_dirty());

    let (mut state, _) = add_rule(state, "   ", "reply");
    assert!(state.rules().is_empty());
    assert!(!state.consume_dirty());
    // Rejected submissions keep what the user typed.
    assert_eq!(state.view().response_input, "reply");

    let (state, _) = add_rule(state, "hello", "");
    assert!(state.rules().is_empty());
    assert_eq!(state.view().trigger_input, "hello");
}

#[test]
fn toggle_twice_restores_flag() {
    let state = AppState::new();
    let (state, _) = update(state, Msg::RuleToggled { rule_id: 2 });
    assert!(!state.rules().get(2).unwrap().enabled);
    assert_eq!(state.view().enabled_rule_count, 2);

    let (state, _) = update(state, Msg::RuleToggled { rule_id: 2 });
    assert!(state.rules().get(2).unwrap().enabled);
}

#[test]
fn toggle_unknown_rule_is_noop() {
    let mut state = AppState::new();
    state.consume_dirty();

    let (mut next, effects) = update(state.clone(), Msg::RuleToggled { rule_id: 99 });
    assert_eq!(next, state);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn delete_removes_exactly_one_and_is_idempotent() {
    let state = AppState::new();
    let (mut state, _) = update(state, Msg::RuleDeleted { rule_id: 1 });
    assert_eq!(state.rules().len(), 2);
    assert!(state.rules().get(1).is_none());
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::RuleDeleted { rule_id: 1 });
    assert_eq!(state.rules().len(), 2);
    assert!(!state.consume_dirty());
}

#[test]
fn rule_ids_are_not_reused_after_delete() {
    let (state, _) = add_rule(empty_state(), "a", "1");
    let (state, _) = update(state, Msg::RuleDeleted { rule_id: 1 });
    let (state, _) = add_rule(state, "b", "2");

    let ids: Vec<_> = state.view().rules.iter().map(|r| r.rule_id).collect();
    assert_eq!(ids, vec![2]);
}
