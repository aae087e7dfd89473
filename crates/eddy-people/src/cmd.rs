//! People list commands

use eddy_core::{Command, RequestId};
use serde::{Deserialize, Serialize};

/// Effects the people list asks for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeopleCmd {
    /// Nothing to do
    None,
    /// Fetch the list; the answer must carry `id`
    Fetch { id: RequestId },
}

impl Command for PeopleCmd {
    fn is_none(&self) -> bool {
        matches!(self, PeopleCmd::None)
    }
}
