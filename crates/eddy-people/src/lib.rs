//! People list unit
//!
//! Loads a list of people and lets the user refetch it at any time. Every
//! fetch is tagged with the model's current request identity; a response is
//! applied only if that identity is still current, so answers to superseded
//! fetches (and duplicate answers to the same fetch) are dropped.
//!
//! A fetch that is still running after a short delay switches the model to
//! `LoadingLong`, which a view shows as a loading indicator instead of the
//! previous list.

mod cmd;
mod executor;
mod model;
mod msg;
mod update;

pub use cmd::PeopleCmd;
pub use executor::FetchExecutor;
pub use model::{FetchStatus, PeopleModel};
pub use msg::PeopleMsg;
pub use update::{init, PeopleProgram};

use eddy_core::{Clock, Every, Millis};
use std::time::Duration;

/// Subscription delivering the current time to the model once per period
pub fn clock_ticks<C: Clock + Clone>(clock: C, period: Duration) -> Every<C, fn(Millis) -> PeopleMsg> {
    Every::new(period, clock, tick as fn(Millis) -> PeopleMsg)
}

fn tick(time_ms: Millis) -> PeopleMsg {
    PeopleMsg::Tick { time_ms }
}
