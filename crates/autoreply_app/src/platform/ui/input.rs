use autoreply_core::{Msg, RuleId, Timestamp};
use thiserror::Error;

use super::constants::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Dispatch(Vec<Msg>),
    ShowHelp,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("expected `add <trigger> | <response>`")]
    MissingSeparator,
    #[error("{0:?} is not a rule id")]
    InvalidRuleId(String),
}

/// Translates one typed line into core messages.
///
/// Only the command shape is checked here; blank triggers, unknown ids and
/// the like are passed through so the core can ignore them.
pub fn parse_line(line: &str, now: Timestamp) -> Result<InputAction, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(InputAction::Dispatch(vec![Msg::NoOp]));
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let msgs = match command.to_ascii_lowercase().as_str() {
        CMD_CONNECT => vec![Msg::ConnectClicked],
        CMD_ADD => {
            if rest.is_empty() {
                return Err(InputError::MissingArgument(CMD_ADD));
            }
            let (trigger, response) = rest
                .split_once(RULE_SEPARATOR)
                .ok_or(InputError::MissingSeparator)?;
            vec![
                Msg::TriggerInputChanged(trigger.trim().to_string()),
                Msg::ResponseInputChanged(response.trim().to_string()),
                Msg::AddRuleClicked,
            ]
        }
        CMD_TOGGLE => vec![Msg::RuleToggled {
            rule_id: parse_rule_id(CMD_TOGGLE, rest)?,
        }],
        CMD_DELETE => vec![Msg::RuleDeleted {
            rule_id: parse_rule_id(CMD_DELETE, rest)?,
        }],
        CMD_SEND => vec![
            Msg::MessageInputChanged(rest.to_string()),
            Msg::SendClicked { at: now },
        ],
        CMD_SHOW => vec![Msg::RedrawRequested],
        CMD_HELP => return Ok(InputAction::ShowHelp),
        CMD_QUIT | CMD_EXIT => vec![Msg::QuitRequested],
        other => return Err(InputError::UnknownCommand(other.to_string())),
    };

    Ok(InputAction::Dispatch(msgs))
}

fn parse_rule_id(command: &'static str, rest: &str) -> Result<RuleId, InputError> {
    if rest.is_empty() {
        return Err(InputError::MissingArgument(command));
    }
    rest.trim_start_matches('#')
        .parse()
        .map_err(|_| InputError::InvalidRuleId(rest.to_string()))
}
