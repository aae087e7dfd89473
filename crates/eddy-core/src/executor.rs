//! Effect executors interpret commands outside the pure core

use crate::{Command, Emitter};
use std::future::Future;

/// Performs the effect a command describes and reports back through messages
///
/// Executors hold no model state. The returned future is spawned by the
/// runtime and must not borrow from `self`; clone whatever collaborators it
/// needs. Failures are converted into result messages tagged with the
/// request identity the command carries; nothing is propagated across the
/// runtime boundary.
pub trait Executor<C: Command, M>: Send + Sync + 'static {
    /// Interpret `cmd`, emitting zero or more messages
    fn execute(&self, cmd: C, emit: Emitter<M>) -> impl Future<Output = ()> + Send + 'static;
}

/// Executor for units whose commands never perform anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEffects;

impl<C: Command, M: Send + 'static> Executor<C, M> for NoEffects {
    fn execute(&self, cmd: C, _emit: Emitter<M>) -> impl Future<Output = ()> + Send + 'static {
        if !cmd.is_none() {
            tracing::warn!(cmd = ?cmd, "command ignored by NoEffects executor");
        }
        std::future::ready(())
    }
}
