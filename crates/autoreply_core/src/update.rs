use crate::{first_match, AppState, ConnectionState, Effect, Msg, PendingEvent, Sender};

/// Pure update function: applies a message to state and returns any effects.
///
/// Invalid input (blank form fields, unknown ids, sending before the
/// connection completes, stale timer ids) leaves the state untouched and
/// produces no effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ConnectClicked => {
            if state.begin_connecting() {
                state.mark_dirty();
                let timer_id = state.defer(PendingEvent::CompleteConnection);
                vec![Effect::ScheduleTimer {
                    timer_id,
                    delay: state.connect_delay(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::TriggerInputChanged(text) => {
            state.set_trigger_input(text);
            Vec::new()
        }
        Msg::ResponseInputChanged(text) => {
            state.set_response_input(text);
            Vec::new()
        }
        Msg::MessageInputChanged(text) => {
            state.set_message_input(text);
            Vec::new()
        }
        Msg::AddRuleClicked => {
            let (trigger, response) = state.rule_form();
            let (trigger, response) = (trigger.to_owned(), response.to_owned());
            if state.rules_mut().add(&trigger, &response).is_some() {
                state.clear_rule_form();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::RuleToggled { rule_id } => {
            if state.rules_mut().toggle(rule_id) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::RuleDeleted { rule_id } => {
            if state.rules_mut().delete(rule_id) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SendClicked { at } => {
            if state.connection() != ConnectionState::Connected
                || state.message_input().is_empty()
            {
                return (state, Vec::new());
            }

            let text = state.take_message_input();
            let matched = first_match(state.rules(), &text)
                .map(|rule| (rule.id, rule.response.clone()));
            state.append_message(Sender::User, text, at);
            state.mark_dirty();

            match matched {
                Some((rule_id, response)) => {
                    let timer_id = state.defer(PendingEvent::AutoReply { rule_id, response });
                    vec![Effect::ScheduleTimer {
                        timer_id,
                        delay: state.reply_delay(),
                    }]
                }
                None => Vec::new(),
            }
        }
        Msg::TimerElapsed { timer_id, at } => {
            match state.take_pending(timer_id) {
                Some(PendingEvent::CompleteConnection) => {
                    state.complete_connection(at);
                    state.mark_dirty();
                }
                Some(PendingEvent::AutoReply { response, .. }) => {
                    state.append_message(Sender::AutoReply, response, at);
                    state.mark_dirty();
                }
                None => {}
            }
            Vec::new()
        }
        Msg::RedrawRequested => {
            state.mark_dirty();
            Vec::new()
        }
        Msg::QuitRequested => {
            let mut effects: Vec<Effect> = state
                .drain_pending()
                .into_iter()
                .map(|timer_id| Effect::CancelTimer { timer_id })
                .collect();
            effects.push(Effect::Exit);
            effects
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
