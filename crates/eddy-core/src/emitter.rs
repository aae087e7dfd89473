//! One-way message channel back into the runtime

use std::fmt;
use tokio::sync::mpsc;

/// Cloneable callback through which executors and subscriptions deliver messages
///
/// Messages are queued in send order and applied by the runtime one at a
/// time. Emitting never fails across the boundary: once the runtime has shut
/// down the message is dropped and `emit` returns `false`.
pub struct Emitter<M> {
    tx: mpsc::UnboundedSender<M>,
}

impl<M: Send + 'static> Emitter<M> {
    /// Create an emitter together with the receiving end
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<M>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Send a message, returning whether the runtime accepted it
    pub fn emit(&self, msg: M) -> bool {
        match self.tx.send(msg) {
            Ok(()) => true,
            Err(_) => {
                tracing::trace!("message dropped, runtime has shut down");
                false
            }
        }
    }

    /// Check whether the receiving runtime is gone
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl<M> Clone for Emitter<M> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<M> fmt::Debug for Emitter<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}
