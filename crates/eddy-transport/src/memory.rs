//! In-memory transport

use crate::{Person, Result, Transport, TransportError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Scripted transport holding its data in memory
///
/// Answers after an optional latency, can be switched into a failing mode,
/// and records every edit it accepts.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    /// Returned by `fetch_people`
    people: Mutex<Vec<Person>>,
    /// Every accepted edit, in order
    edits: Mutex<Vec<(String, String)>>,
    /// Fail every call while set
    failing: AtomicBool,
    /// Number of fetches attempted
    fetches: AtomicUsize,
    /// Delay before answering
    latency: Duration,
}

impl MemoryTransport {
    /// Create an empty transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport listing `people`
    pub fn with_people(people: Vec<Person>) -> Self {
        Self {
            people: Mutex::new(people),
            ..Self::default()
        }
    }

    /// Delay every answer by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Replace the listed people
    pub fn set_people(&self, people: Vec<Person>) {
        *self.people.lock().unwrap_or_else(PoisonError::into_inner) = people;
    }

    /// Switch failure mode on or off
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Edits accepted so far
    pub fn edits(&self) -> Vec<(String, String)> {
        self.edits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of fetches attempted so far
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    async fn answer(&self) -> Result<()> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(TransportError::Unavailable(
                "memory transport is failing".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn fetch_people(&self) -> Result<Vec<Person>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.answer().await?;
        Ok(self
            .people
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    async fn submit_edit(&self, first_name: &str, last_name: &str) -> Result<()> {
        self.answer().await?;
        self.edits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((first_name.to_string(), last_name.to_string()));
        Ok(())
    }
}
