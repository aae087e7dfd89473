//! People list messages

use eddy_core::{Millis, RequestId};
use eddy_transport::Person;

/// Everything that can happen to the people list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeopleMsg {
    /// The server answered fetch `fetch_id`
    GotResponse {
        people: Vec<Person>,
        fetch_id: RequestId,
    },
    /// Fetch `fetch_id` has been running for the waited-long delay
    WaitedLong { fetch_id: RequestId },
    /// The user asked for a fresh list
    RefetchRequested,
    /// Fetch `fetch_id` failed
    FetchFailed { fetch_id: RequestId, error: String },
    /// Clock subscription tick
    Tick { time_ms: Millis },
}
