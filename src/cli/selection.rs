// Turns the raw launcher selection into a typed command

use crate::cli::error::CommandError;

/// What a selection asks for. All but `Selection` are chosen by a one-character prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `+<text>`
    Create,
    /// `!<id>`
    MarkDone,
    /// `?<id>`
    MarkUndone,
    /// `-done`, `-all` or `-<id>`
    Clear,
    /// `><id> <text>`
    Edit,
    /// `p<id> <priority>`
    SetPriority,
    /// Anything else: a line of the rendered list
    Selection,
}

impl Action {
    /// Actions reachable through a prefix character
    pub const PREFIXED: [Action; 6] = [
        Action::Create,
        Action::MarkDone,
        Action::MarkUndone,
        Action::Clear,
        Action::Edit,
        Action::SetPriority,
    ];

    pub fn prefix(&self) -> Option<char> {
        match self {
            Action::Create => Some('+'),
            Action::MarkDone => Some('!'),
            Action::MarkUndone => Some('?'),
            Action::Clear => Some('-'),
            Action::Edit => Some('>'),
            Action::SetPriority => Some('p'),
            Action::Selection => None,
        }
    }

    pub fn from_prefix(c: char) -> Option<Action> {
        Self::PREFIXED.into_iter().find(|a| a.prefix() == Some(c))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub action: Action,
    pub value: String,
}

/// Classify a raw selection.
///
/// Empty input means "just show the list" and yields `None`. A recognized prefix takes the
/// trimmed remainder as its value, which must not be empty. Any other input becomes a
/// `Selection` carrying the whole input untouched.
pub fn interpret(raw: &str) -> Result<Option<Command>, CommandError> {
    let Some(first) = raw.chars().next() else {
        return Ok(None);
    };

    let command = match Action::from_prefix(first) {
        Some(action) => {
            let value = raw[first.len_utf8()..].trim();
            if value.is_empty() {
                return Err(CommandError::NoActionValue);
            }
            Command {
                action,
                value: value.to_string(),
            }
        }
        None => Command {
            action: Action::Selection,
            value: raw.to_string(),
        },
    };

    log::debug!("Interpreted {:?} as {:?}", raw, command);
    Ok(Some(command))
}
