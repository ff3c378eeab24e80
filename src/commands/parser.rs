//! Command parsing
//!
//! Turns one line of terminal input into a [`Command`].

/// A command typed at the DrinkCraft prompt
#[derive(Debug, PartialEq)]
pub enum Command {
    SignIn { email: String, password: String },
    SignUp {
        email: String,
        password: String,
        display_name: String,
    },
    SignOut,
    Strength(String), // Score a password without submitting it
    Type(String),     // Switch hot / cold
    Menu,
    Add(String),
    Amount { id: String, amount: String },
    Remove(String),
    Name,
    Save,
    Show,
    Recipes,
    Help,
    Quit,
    Unknown(String),
}

/// Outcome status of executing a command
#[derive(Debug, PartialEq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    Quit,
}

/// Full result of a command execution
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

impl CommandResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Success,
            message: Some(message.into()),
        }
    }

    /// Failure whose reason is also the message shown to the user
    pub fn failure(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self {
            message: Some(reason.clone()),
            status: CommandStatus::Failure(reason),
        }
    }

    pub fn quit(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Quit,
            message: Some(message.into()),
        }
    }
}

// Parse raw input line into Command enum
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();
    let rest = parts.next().unwrap_or("").trim();

    let mut args = rest.split_whitespace();
    let first = args.next().unwrap_or("");
    let second = args.next().unwrap_or("");

    match cmd.as_str() {
        "SIGNIN" | "LOGIN" if !first.is_empty() && !second.is_empty() => Command::SignIn {
            email: first.to_string(),
            password: second.to_string(),
        },
        "SIGNUP" | "REGISTER" if !first.is_empty() && !second.is_empty() => Command::SignUp {
            email: first.to_string(),
            password: second.to_string(),
            display_name: args.collect::<Vec<_>>().join(" "),
        },
        "SIGNOUT" | "LOGOUT" => Command::SignOut,
        "STRENGTH" if !rest.is_empty() => Command::Strength(rest.to_string()),
        "TYPE" if !first.is_empty() => Command::Type(first.to_string()),
        "MENU" => Command::Menu,
        "ADD" if !first.is_empty() => Command::Add(first.to_string()),
        "AMOUNT" if !first.is_empty() => Command::Amount {
            id: first.to_string(),
            amount: rest[first.len()..].trim().to_string(),
        },
        "REMOVE" | "RM" if !first.is_empty() => Command::Remove(first.to_string()),
        "NAME" => Command::Name,
        "SAVE" => Command::Save,
        "SHOW" => Command::Show,
        "RECIPES" => Command::Recipes,
        "HELP" | "?" => Command::Help,
        "QUIT" | "Q" | "EXIT" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}
