//! Profile editor model, messages and commands

use eddy_core::{Command, DebounceState, Millis, RequestId};
use serde::{Deserialize, Serialize};

/// State of the profile editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileModel {
    /// First name as currently edited
    pub first_name: String,
    /// Last name as currently edited
    pub last_name: String,
    /// Save progress of the current edits
    pub state: DebounceState,
    /// Identity the next save will be issued under
    pub next_request_id: RequestId,
}

impl ProfileModel {
    /// Full name as it would be saved
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Everything that can happen to the profile editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileMsg {
    /// The user changed the first name
    FirstNameEdited(String),
    /// The user changed the last name
    LastNameEdited(String),
    /// Tick subscription
    Tick { time_ms: Millis },
    /// Save `request_id` succeeded
    GotResponse { request_id: RequestId },
    /// Save `request_id` failed
    RequestFailed { request_id: RequestId },
}

/// Effects the profile editor asks for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileCmd {
    /// Nothing to do
    None,
    /// Save the names; the answer must carry `id`
    Request {
        id: RequestId,
        first_name: String,
        last_name: String,
    },
}

impl Command for ProfileCmd {
    fn is_none(&self) -> bool {
        matches!(self, ProfileCmd::None)
    }
}
