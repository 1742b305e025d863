use super::constants::*;

const TITLE: &str = "Auto WhatsApp Reply";
const TAGLINE: &str = "Automate your WhatsApp responses with custom rules";

/// Lines printed once at start-up.
pub fn banner() -> Vec<String> {
    let mut lines = vec![
        TITLE.to_string(),
        TAGLINE.to_string(),
        String::new(),
        "How it works: 1. Connect  2. Set rules  3. Auto-respond".to_string(),
    ];
    lines.push(format!("Type `{CMD_HELP}` for the list of commands."));
    lines.push(String::new());
    lines
}

pub fn help() -> Vec<String> {
    vec![
        "Commands:".to_string(),
        format!("  {CMD_CONNECT:<28} simulate scanning the QR code"),
        format!(
            "  {:<28} add a rule",
            format!("{CMD_ADD} <trigger> {RULE_SEPARATOR} <reply>")
        ),
        format!("  {:<28} enable or disable a rule", format!("{CMD_TOGGLE} <id>")),
        format!("  {:<28} remove a rule", format!("{CMD_DELETE} <id>")),
        format!("  {:<28} send a test message", format!("{CMD_SEND} <text>")),
        format!("  {CMD_SHOW:<28} redraw the screen"),
        format!("  {:<28} leave", format!("{CMD_QUIT} | {CMD_EXIT}")),
    ]
}
