pub const CMD_CONNECT: &str = "connect";
pub const CMD_ADD: &str = "add";
pub const CMD_TOGGLE: &str = "toggle";
pub const CMD_DELETE: &str = "delete";
pub const CMD_SEND: &str = "send";
pub const CMD_SHOW: &str = "show";
pub const CMD_HELP: &str = "help";
pub const CMD_QUIT: &str = "quit";
pub const CMD_EXIT: &str = "exit";

/// Splits `add <trigger> | <response>`.
pub const RULE_SEPARATOR: char = '|';

pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const RULE_PREVIEW_CHARS: usize = 60;
