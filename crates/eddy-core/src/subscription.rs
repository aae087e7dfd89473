//! Long-lived event sources registered alongside a unit
//!
//! A subscription emits messages independently of any command, for as
//! long as its handle is alive:
//! - `Subscription` - Anything that can be started against an emitter
//! - `SubscriptionHandle` - Exactly-once cancellation of one started source
//! - `Every` - Recurring timer emitting the current time
//! - `SubscriptionManager` - Registry of active subscriptions for one unit

use crate::{Clock, Emitter, Millis};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Cancellation handle for one started subscription
///
/// `cancel` consumes the handle, so the release runs at most once.
/// Dropping a handle that was never cancelled releases it as well.
#[must_use = "dropping the handle cancels the subscription"]
pub struct SubscriptionHandle {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl SubscriptionHandle {
    /// Create a handle that runs `release` on cancellation
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Create a handle that aborts a spawned task
    pub fn from_task(task: JoinHandle<()>) -> Self {
        Self::new(move || task.abort())
    }

    /// Create a handle with nothing to release
    pub fn noop() -> Self {
        Self { release: None }
    }

    /// Release the subscription
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for SubscriptionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionHandle")
            .field("armed", &self.release.is_some())
            .finish()
    }
}

/// An external event source that feeds messages into a unit
pub trait Subscription<M>: Send + Sync + 'static {
    /// Start emitting into `emit`; each call starts an independent source
    fn subscribe(&self, emit: Emitter<M>) -> SubscriptionHandle;
}

/// Subscription built from a closure, see [`from_fn`]
#[derive(Clone)]
pub struct FromFn<F> {
    start: F,
}

/// Wrap `Fn(Emitter<M>) -> SubscriptionHandle` as a subscription
pub fn from_fn<M, F>(start: F) -> FromFn<F>
where
    F: Fn(Emitter<M>) -> SubscriptionHandle + Send + Sync + 'static,
{
    FromFn { start }
}

impl<M, F> Subscription<M> for FromFn<F>
where
    F: Fn(Emitter<M>) -> SubscriptionHandle + Send + Sync + 'static,
{
    fn subscribe(&self, emit: Emitter<M>) -> SubscriptionHandle {
        (self.start)(emit)
    }
}

/// Recurring timer emitting `to_msg(now_ms)` once per period
///
/// The first message arrives one full period after subscribing. Ticks that
/// fall behind are delayed rather than delivered in a burst.
#[derive(Clone)]
pub struct Every<C, F> {
    period: Duration,
    clock: C,
    to_msg: F,
}

impl<C, F> Every<C, F> {
    /// Create a timer subscription; a zero period is raised to one millisecond
    pub fn new<M>(period: Duration, clock: C, to_msg: F) -> Self
    where
        F: Fn(Millis) -> M,
    {
        Self {
            period: period.max(Duration::from_millis(1)),
            clock,
            to_msg,
        }
    }

    /// The tick period
    pub fn period(&self) -> Duration {
        self.period
    }
}

impl<M, C, F> Subscription<M> for Every<C, F>
where
    M: Send + 'static,
    C: Clock + Clone,
    F: Fn(Millis) -> M + Clone + Send + Sync + 'static,
{
    fn subscribe(&self, emit: Emitter<M>) -> SubscriptionHandle {
        let period = self.period;
        let clock = self.clock.clone();
        let to_msg = self.to_msg.clone();

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                if !emit.emit(to_msg(clock.now_ms())) {
                    break;
                }
            }
        });

        SubscriptionHandle::from_task(task)
    }
}

/// Identifier of a subscription started through a manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub:{}", self.0)
    }
}

/// Active subscriptions of one unit, stopped together at teardown
#[derive(Debug, Default)]
pub struct SubscriptionManager {
    /// Handles in start order
    active: IndexMap<SubscriptionId, SubscriptionHandle>,
    /// Next ID to hand out
    next_id: u64,
}

impl SubscriptionManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a subscription, returning a fresh ID for it
    pub fn start<M, S>(&mut self, sub: &S, emit: Emitter<M>) -> SubscriptionId
    where
        S: Subscription<M> + ?Sized,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        let handle = sub.subscribe(emit);
        self.active.insert(id, handle);
        tracing::debug!(%id, "subscription started");
        id
    }

    /// Stop one subscription, returning whether it was active
    pub fn stop(&mut self, id: SubscriptionId) -> bool {
        match self.active.shift_remove(&id) {
            Some(handle) => {
                handle.cancel();
                tracing::debug!(%id, "subscription stopped");
                true
            }
            None => false,
        }
    }

    /// Stop every subscription, returning how many were active
    pub fn stop_all(&mut self) -> usize {
        let count = self.active.len();
        for (_, handle) in self.active.drain(..) {
            handle.cancel();
        }
        if count > 0 {
            tracing::debug!(count, "subscriptions stopped");
        }
        count
    }

    /// Check whether a subscription is active
    pub fn contains(&self, id: SubscriptionId) -> bool {
        self.active.contains_key(&id)
    }

    /// Number of active subscriptions
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Check if no subscription is active
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

impl Drop for SubscriptionManager {
    fn drop(&mut self) {
        self.stop_all();
    }
}
