//! Eddy Transport - network collaborators for eddy units
//!
//! Executors reach the outside world only through [`Transport`]:
//! - `HttpTransport` - JSON over HTTP with reqwest
//! - `MemoryTransport` - Scripted in-memory transport for tests and offline runs
//!
//! Every failure surfaces as a [`TransportError`] value so executors can
//! turn it into a result message.

mod config;
mod error;
mod http;
mod memory;
mod person;
mod transport;

pub use config::TransportConfig;
pub use error::{Result, TransportError};
pub use http::HttpTransport;
pub use memory::MemoryTransport;
pub use person::{EditRequest, Person};
pub use transport::Transport;
