use autoreply_core::{AppViewModel, ConnectionState, MessageRowView, RuleRowView, Timestamp};
use chrono::Local;

use super::constants::*;

pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(section("Connection Status"));
    match view.connection {
        ConnectionState::Disconnected => {
            lines.push("[ ] Disconnected".to_string());
        }
        ConnectionState::Connecting => {
            lines.push("[~] Connecting...".to_string());
        }
        ConnectionState::Connected => {
            lines.push("[x] Connected to WhatsApp".to_string());
            lines.push("    Auto-reply is active".to_string());
        }
    }
    if let Some(payload) = &view.qr_payload {
        lines.push(format!("    Scan this QR code with WhatsApp to connect: {payload}"));
        if view.connection == ConnectionState::Disconnected {
            lines.push(format!("    Type `{CMD_CONNECT}` to simulate the connection."));
        }
    }

    lines.push(section(&format!(
        "Auto-Reply Rules ({}/{} active)",
        view.enabled_rule_count,
        view.rules.len()
    )));
    if view.rules.is_empty() {
        lines.push("    (no rules)".to_string());
    }
    lines.extend(view.rules.iter().map(format_rule_row));

    if view.is_connected() {
        lines.push(section("Transcript"));
        lines.extend(view.messages.iter().map(format_message_row));
        if view.pending_timers > 0 {
            let noun = if view.pending_timers == 1 { "reply" } else { "replies" };
            lines.push(format!("    ({} {noun} pending)", view.pending_timers));
        }
    }

    lines
}

fn section(title: &str) -> String {
    format!("== {title} ==")
}

fn format_rule_row(rule: &RuleRowView) -> String {
    let status = if rule.enabled { "Enabled " } else { "Disabled" };
    format!(
        "[#{id}] {status} \"{trigger}\" -> {response}",
        id = rule.rule_id,
        trigger = rule.trigger,
        response = preview(&rule.response, RULE_PREVIEW_CHARS),
    )
}

fn format_message_row(message: &MessageRowView) -> String {
    // Auto replies are indented like the right-hand bubbles of a chat.
    let indent = if message.is_auto_reply { "        " } else { "" };
    format!(
        "{indent}[{time}] {sender}: {text}",
        time = format_time(message.timestamp),
        sender = message.sender,
        text = message.text,
    )
}

fn format_time(timestamp: Timestamp) -> String {
    timestamp
        .with_timezone(&Local)
        .format(TIME_FORMAT)
        .to_string()
}

fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoreply_core::{update, AppState, Msg};
    use chrono::{TimeZone, Utc};

    fn at(second: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, second).unwrap()
    }

    #[test]
    fn disconnected_screen_shows_qr_and_rules() {
        let lines = render(&AppState::new().view());

        assert!(lines.contains(&"[ ] Disconnected".to_string()));
        assert!(lines
            .iter()
            .any(|line| line.ends_with(autoreply_core::DEFAULT_QR_PAYLOAD)));
        assert!(lines.contains(&"== Auto-Reply Rules (3/3 active) ==".to_string()));
        assert!(lines
            .iter()
            .any(|line| line.starts_with("[#1] Enabled  \"hello\" -> Hi!")));
        assert!(!lines.contains(&"== Transcript ==".to_string()));
    }

    #[test]
    fn connected_screen_shows_transcript() {
        let (state, _) = update(AppState::new(), Msg::ConnectClicked);
        let (state, _) = update(state, Msg::TimerElapsed { timer_id: 1, at: at(2) });
        let (state, _) = update(state, Msg::RuleToggled { rule_id: 3 });
        let (state, _) = update(state, Msg::MessageInputChanged("hello".to_string()));
        let (state, _) = update(state, Msg::SendClicked { at: at(3) });

        let lines = render(&state.view());
        assert!(lines.contains(&"[x] Connected to WhatsApp".to_string()));
        assert!(lines.contains(&"== Auto-Reply Rules (2/3 active) ==".to_string()));
        assert!(lines.iter().any(|line| line.starts_with("[#3] Disabled")));
        assert!(lines.iter().any(|line| line.ends_with("] User: hello")));
        assert!(lines.contains(&"    (1 reply pending)".to_string()));
        assert!(!lines.iter().any(|line| line.contains("QR code")));
    }

    #[test]
    fn pending_count_is_pluralized() {
        let (state, _) = update(AppState::new(), Msg::ConnectClicked);
        let (state, _) = update(state, Msg::TimerElapsed { timer_id: 1, at: at(2) });
        let (state, _) = update(state, Msg::MessageInputChanged("hello".to_string()));
        let (state, _) = update(state, Msg::SendClicked { at: at(3) });
        let (state, _) = update(state, Msg::MessageInputChanged("hello again".to_string()));
        let (state, _) = update(state, Msg::SendClicked { at: at(4) });

        let lines = render(&state.view());
        assert!(lines.contains(&"    (2 replies pending)".to_string()));
        assert!(!lines.iter().any(|line| line.contains("reply pending")));
    }

    #[test]
    fn long_responses_are_shortened() {
        let text = "x".repeat(100);
        let shortened = preview(&text, 10);
        assert_eq!(shortened, "xxxxxxx...");
        assert_eq!(preview("short", 10), "short");
    }
}
