//! Request identity for stale-response suppression
//!
//! A model stores the identity it currently expects. Commands carry that
//! identity out to the executor and result messages echo it back, so an
//! update can tell whether a result answers the latest request or one that
//! has since been superseded.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Monotonically increasing identity of an issued request
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RequestId(pub u64);

impl RequestId {
    /// The identity of the very first request
    pub const ZERO: RequestId = RequestId(0);

    /// Create a new request ID
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value
    pub fn raw(&self) -> u64 {
        self.0
    }

    /// The identity that follows this one (exactly one higher)
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Whether a result tagged with `other` answers the request this identity expects
    pub fn matches(self, other: RequestId) -> bool {
        self == other
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req:{}", self.0)
    }
}

impl From<u64> for RequestId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
