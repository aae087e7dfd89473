//! Async host for an engine
//!
//! Wires a program, an executor and any subscriptions into a closed loop:
//!
//! ```text
//! message ─► dispatch ─► update ─► (model, cmd) ─► publish model
//!    ▲                                   │
//!    │                          cmd changed? ─► executor task
//!    └──────────── emitter ◄─────────────┴───── subscriptions
//! ```
//!
//! `dispatch` applies `update` synchronously under the engine lock and
//! returns as soon as the new model is stored; effects run as separate tokio
//! tasks. Messages coming back from executors and subscriptions are queued
//! and applied one at a time by a pump task through the same lock, so no two
//! updates ever run concurrently and messages apply in arrival order.

use crate::{
    Command, Emitter, Engine, Error, Executor, Program, Result, Subscription, SubscriptionId,
    SubscriptionManager, Transition,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// State shared between the handle, dispatchers and the pump
struct Shared<P: Program, E> {
    /// The serialization point
    engine: Mutex<Engine<P>>,
    /// Interprets changed commands
    executor: E,
    /// Handed to every executor run
    emitter: Emitter<P::Msg>,
    /// Latest model, for observers
    snapshot: watch::Sender<Arc<P::Model>>,
    /// Set once at teardown
    closed: AtomicBool,
}

impl<P, E> Shared<P, E>
where
    P: Program,
    E: Executor<P::Cmd, P::Msg>,
{
    fn engine(&self) -> MutexGuard<'_, Engine<P>> {
        // update is pure, so a panic inside it leaves the previous model intact
        self.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn dispatch(&self, msg: P::Msg) -> Result<()> {
        if self.closed.load(Ordering::Acquire) {
            return Err(Error::Closed);
        }

        let mut engine = self.engine();
        let handed = engine.dispatch(msg);
        let model = engine.model();
        self.snapshot.send_if_modified(|current| {
            if **current == *model {
                false
            } else {
                *current = Arc::new(model.clone());
                true
            }
        });

        // Spawned while still holding the lock so effects start in transition order
        if let Some(cmd) = handed {
            self.run(cmd);
        }
        Ok(())
    }

    fn run(&self, cmd: P::Cmd) {
        // None has nothing to run
        if cmd.is_none() {
            return;
        }
        tracing::debug!(cmd = ?cmd, "executing command");
        tokio::spawn(self.executor.execute(cmd, self.emitter.clone()));
    }
}

/// Entry point for starting units
pub struct Runtime;

impl Runtime {
    /// Start configuring a unit driven by `program` with effects run by `executor`
    pub fn builder<P, E>(program: P, executor: E) -> RuntimeBuilder<P, E>
    where
        P: Program,
        E: Executor<P::Cmd, P::Msg>,
    {
        RuntimeBuilder {
            program,
            executor,
            subscriptions: Vec::new(),
        }
    }
}

/// Configures a unit before it starts
pub struct RuntimeBuilder<P: Program, E> {
    program: P,
    executor: E,
    subscriptions: Vec<Box<dyn Subscription<P::Msg>>>,
}

impl<P, E> RuntimeBuilder<P, E>
where
    P: Program,
    E: Executor<P::Cmd, P::Msg>,
{
    /// Add a subscription that runs for the whole life of the unit
    pub fn subscription(mut self, sub: impl Subscription<P::Msg>) -> Self {
        self.subscriptions.push(Box::new(sub));
        self
    }

    /// Start the unit from its initial model and command
    ///
    /// The initial command, unless it is `None`, is executed once.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn start(self, init: Transition<P::Model, P::Cmd>) -> RuntimeHandle<P, E> {
        let (emitter, rx) = Emitter::channel();
        let (snapshot, _) = watch::channel(Arc::new(init.model.clone()));
        let (engine, first) = Engine::new(self.program, init);

        let shared = Arc::new(Shared {
            engine: Mutex::new(engine),
            executor: self.executor,
            emitter: emitter.clone(),
            snapshot,
            closed: AtomicBool::new(false),
        });

        let pump = tokio::spawn(pump(shared.clone(), rx));

        let mut subscriptions = SubscriptionManager::new();
        for sub in &self.subscriptions {
            subscriptions.start(sub.as_ref(), emitter.clone());
        }

        if let Some(cmd) = first {
            shared.run(cmd);
        }

        tracing::debug!(program = std::any::type_name::<P>(), "runtime started");
        RuntimeHandle {
            shared,
            subscriptions,
            pump: Some(pump),
        }
    }
}

/// Applies queued messages one at a time until the unit is torn down
async fn pump<P, E>(shared: Arc<Shared<P, E>>, mut rx: mpsc::UnboundedReceiver<P::Msg>)
where
    P: Program,
    E: Executor<P::Cmd, P::Msg>,
{
    while let Some(msg) = rx.recv().await {
        if shared.dispatch(msg).is_err() {
            break;
        }
    }
}

/// A running unit
///
/// Dropping the handle tears the unit down exactly like [`shutdown`](Self::shutdown).
pub struct RuntimeHandle<P: Program, E> {
    shared: Arc<Shared<P, E>>,
    subscriptions: SubscriptionManager,
    pump: Option<JoinHandle<()>>,
}

impl<P, E> RuntimeHandle<P, E>
where
    P: Program,
    E: Executor<P::Cmd, P::Msg>,
{
    /// Apply a message now
    ///
    /// Returns once the new model is stored; any resulting effect runs
    /// concurrently.
    pub fn dispatch(&self, msg: P::Msg) -> Result<()> {
        self.shared.dispatch(msg)
    }

    /// A cloneable synchronous dispatcher
    pub fn dispatcher(&self) -> Dispatcher<P, E> {
        Dispatcher {
            shared: self.shared.clone(),
        }
    }

    /// An emitter queueing messages for ordered, asynchronous delivery
    pub fn emitter(&self) -> Emitter<P::Msg> {
        self.shared.emitter.clone()
    }

    /// Snapshot of the current model
    pub fn model(&self) -> Arc<P::Model> {
        self.shared.snapshot.borrow().clone()
    }

    /// Receiver notified whenever the model changes
    pub fn watch(&self) -> watch::Receiver<Arc<P::Model>> {
        self.shared.snapshot.subscribe()
    }

    /// Number of messages applied so far
    pub fn dispatched(&self) -> u64 {
        self.shared.engine().dispatched()
    }

    /// Start an additional subscription
    pub fn subscribe<S>(&mut self, sub: &S) -> SubscriptionId
    where
        S: Subscription<P::Msg> + ?Sized,
    {
        self.subscriptions.start(sub, self.shared.emitter.clone())
    }

    /// Stop a subscription started on this unit
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscriptions.stop(id)
    }

    /// Number of active subscriptions
    pub fn subscriptions(&self) -> usize {
        self.subscriptions.len()
    }

    /// Tear the unit down
    ///
    /// Cancels every subscription and stops message delivery. Effects
    /// already in flight keep running, but whatever they emit is dropped.
    pub fn shutdown(mut self) {
        self.teardown();
    }
}

impl<P: Program, E> RuntimeHandle<P, E> {
    fn teardown(&mut self) {
        if self.shared.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        let stopped = self.subscriptions.stop_all();
        if let Some(pump) = self.pump.take() {
            pump.abort();
        }
        tracing::debug!(
            program = std::any::type_name::<P>(),
            subscriptions = stopped,
            "runtime shut down"
        );
    }
}

impl<P: Program, E> Drop for RuntimeHandle<P, E> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Synchronous dispatch into a unit, usable after the handle is gone
pub struct Dispatcher<P: Program, E> {
    shared: Arc<Shared<P, E>>,
}

impl<P, E> Dispatcher<P, E>
where
    P: Program,
    E: Executor<P::Cmd, P::Msg>,
{
    /// Apply a message now; fails with [`Error::Closed`] after teardown
    pub fn dispatch(&self, msg: P::Msg) -> Result<()> {
        self.shared.dispatch(msg)
    }

    /// Snapshot of the current model
    pub fn model(&self) -> Arc<P::Model> {
        self.shared.snapshot.borrow().clone()
    }
}

impl<P: Program, E> Clone for Dispatcher<P, E> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}
