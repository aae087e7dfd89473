//! Eddy Core - Model / Message / Command runtime
//!
//! This crate provides the generic runtime and the two patterns built on it:
//! - `Program` - Pure `update(model, msg) -> (model, cmd)` contract
//! - `Engine` - Serialized transitions with change-only command hand-off
//! - `Executor` - Interprets commands outside the pure core
//! - `Subscription` - Long-lived sources such as recurring ticks
//! - `Runtime` - Tokio host wiring all of the above into a closed loop
//! - `RequestId` - Identity counter for stale-response suppression
//! - `DebounceState` - Tick-driven debounced commit scheduling
//!
//! ## The loop
//!
//! Every state change goes through one path: a message reaches the runtime,
//! `update` computes the next model and command, the runtime stores the
//! model and, if the command differs from the previous one, hands it to the
//! executor. Executors and subscriptions only ever talk back by emitting
//! messages.

mod clock;
mod command;
mod config;
pub mod debounce;
mod emitter;
mod engine;
mod error;
mod executor;
mod program;
mod request;
pub mod runtime;
pub mod subscription;
mod transition_log;

pub use clock::{Clock, ManualClock, Millis, MonotonicClock, SystemClock};
pub use command::Command;
pub use config::TimingConfig;
pub use debounce::{DebounceState, TickOutcome};
pub use emitter::Emitter;
pub use engine::Engine;
pub use error::{Error, Result};
pub use executor::{Executor, NoEffects};
pub use program::{Program, Transition};
pub use request::RequestId;
pub use runtime::{Dispatcher, Runtime, RuntimeBuilder, RuntimeHandle};
pub use subscription::{
    from_fn, Every, FromFn, Subscription, SubscriptionHandle, SubscriptionId, SubscriptionManager,
};
pub use transition_log::TransitionLog;
