//! Debounced commit scheduling
//!
//! Defers a commit until an edit stream has been quiet for a fixed interval.
//! The state machine is driven by two inputs: edits, which always reset it,
//! and clock ticks, which establish a baseline time and later decide whether
//! enough quiet time has elapsed.
//!
//! ```text
//! edit ──► EditedUnknownTime ──tick──► Edited(t) ──tick ≥ t+interval──► Saving(id)
//!                                                                   │
//!                                          Clean ◄──── ok ──────────┤
//!                                   FailedToSave ◄──── failed ──────┘
//! ```
//!
//! The edit time is only learned on the first tick after the edit, so a
//! commit never fires sooner than one tick period after the last edit.

use crate::{Millis, RequestId};
use serde::{Deserialize, Serialize};

/// Where an edit stream stands relative to its last commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DebounceState {
    /// Edited, but no tick has been seen since
    EditedUnknownTime,
    /// Edited, first observed at `edit_time_ms`
    Edited { edit_time_ms: Millis },
    /// Commit `request_id` is in flight
    Saving { request_id: RequestId },
    /// Everything is committed
    #[default]
    Clean,
    /// The last commit failed; stays until the next edit
    FailedToSave,
}

/// What a tick did to a debounce state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to do
    Unchanged,
    /// The first tick after an edit; the state moves to the carried one
    Baseline(DebounceState),
    /// Quiet long enough; commit under the carried identity
    Commit(RequestId),
}

impl DebounceState {
    /// State after any edit, whatever the current state
    pub fn edited() -> Self {
        DebounceState::EditedUnknownTime
    }

    /// Apply a clock tick
    ///
    /// `next_request` is the identity a commit would be issued under; the
    /// caller advances its counter when the outcome is `Commit`.
    pub fn on_tick(&self, now_ms: Millis, interval_ms: Millis, next_request: RequestId) -> TickOutcome {
        match *self {
            DebounceState::EditedUnknownTime => TickOutcome::Baseline(DebounceState::Edited {
                edit_time_ms: now_ms,
            }),
            DebounceState::Edited { edit_time_ms } => {
                // A clock that went backwards reads as no time elapsed
                let elapsed = now_ms.saturating_sub(edit_time_ms);
                if elapsed >= interval_ms {
                    TickOutcome::Commit(next_request)
                } else {
                    TickOutcome::Unchanged
                }
            }
            DebounceState::Saving { .. } | DebounceState::Clean | DebounceState::FailedToSave => {
                TickOutcome::Unchanged
            }
        }
    }

    /// Settle an in-flight commit
    ///
    /// Returns the new state only when this is `Saving` under `request_id`;
    /// a result for any other request is stale.
    pub fn settle(&self, request_id: RequestId, ok: bool) -> Option<DebounceState> {
        match *self {
            DebounceState::Saving { request_id: current } if current.matches(request_id) => {
                Some(if ok {
                    DebounceState::Clean
                } else {
                    DebounceState::FailedToSave
                })
            }
            _ => None,
        }
    }

    /// Whether there are edits not yet confirmed as committed
    pub fn is_dirty(&self) -> bool {
        !matches!(self, DebounceState::Clean)
    }

    /// Short status line for display
    pub fn label(&self) -> &'static str {
        match self {
            DebounceState::Clean => "Saved",
            DebounceState::FailedToSave => "Failed to save",
            DebounceState::EditedUnknownTime
            | DebounceState::Edited { .. }
            | DebounceState::Saving { .. } => "Not saved",
        }
    }
}
