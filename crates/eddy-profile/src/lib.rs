//! Profile editor unit
//!
//! Holds an editable first and last name and saves them once the user has
//! stopped typing for the debounce interval. Time only enters through the
//! `Tick` subscription, so the update function stays pure and a test can
//! drive it with any clock.

mod executor;
mod model;
mod update;

pub use executor::SaveExecutor;
pub use model::{ProfileCmd, ProfileModel, ProfileMsg};
pub use update::{init, ProfileProgram};

use eddy_core::{Clock, Every, Millis};
use std::time::Duration;

/// Subscription delivering the current time to the model once per period
pub fn ticks<C: Clock + Clone>(clock: C, period: Duration) -> Every<C, fn(Millis) -> ProfileMsg> {
    Every::new(period, clock, tick as fn(Millis) -> ProfileMsg)
}

fn tick(time_ms: Millis) -> ProfileMsg {
    ProfileMsg::Tick { time_ms }
}
