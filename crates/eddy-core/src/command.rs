//! Commands (side effects) produced by the update function

use std::fmt::Debug;

/// A data-only description of a side effect, or the "no effect" sentinel
///
/// Commands are compared structurally: the runtime hands a command to the
/// executor only when it differs from the one produced by the previous
/// transition, so every freshly built `None` counts as unchanged.
pub trait Command: Clone + PartialEq + Debug + Send + 'static {
    /// Check if this is the "no effect" command
    fn is_none(&self) -> bool;
}

impl Command for () {
    fn is_none(&self) -> bool {
        true
    }
}
