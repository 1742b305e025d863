use autoreply_core::{update, AppState, Msg};

#[test]
fn noop_and_stale_timer_leave_state_untouched() {
    let state = AppState::new();
    let at = chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap();

    for msg in [Msg::NoOp, Msg::TimerElapsed { timer_id: 42, at }] {
        let (next, effects) = update(state.clone(), msg);
        assert_eq!(state, next);
        assert!(effects.is_empty());
    }
}
