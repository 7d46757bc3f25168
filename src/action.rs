use serde::{Deserialize, Serialize};
use strum::Display;

use crate::model::shell::Message;

/// User-level commands that key bindings resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, Deserialize)]
pub enum Action {
    Quit,
    SelectNext,
    SelectPrevious,
    Activate,
}

impl Action {
    /// The shell message this action sends, if it is handled by the shell.
    pub fn message(self) -> Option<Message> {
        match self {
            Action::Quit => None,
            Action::SelectNext => Some(Message::SelectNext),
            Action::SelectPrevious => Some(Message::SelectPrevious),
            Action::Activate => Some(Message::Activate),
        }
    }
}
