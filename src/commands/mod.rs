mod handlers;
mod parser;

pub use handlers::{HELP_TEXT, handle_command};
pub use parser::{Command, CommandResult, CommandStatus, parse_command};
