//! People list model

use eddy_core::{Millis, RequestId};
use eddy_transport::Person;
use serde::{Deserialize, Serialize};

/// Where the current fetch stands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchStatus {
    /// A fetch is running; the previous list stays on display
    Loading { last_people: Vec<Person> },
    /// A fetch has been running for a while; show an indicator instead
    LoadingLong,
    /// The last fetch succeeded
    Loaded { people: Vec<Person> },
    /// The last fetch failed; the previous list stays on display
    Failed { last_people: Vec<Person>, error: String },
}

/// State of the people list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeopleModel {
    /// Identity the next response must carry to be accepted
    pub fetch_id: RequestId,
    /// Last time delivered by the clock subscription
    pub time_ms: Option<Millis>,
    /// Fetch status
    pub status: FetchStatus,
}

impl PeopleModel {
    /// The list a view should show right now
    ///
    /// `LoadingLong` shows nothing; callers wanting the last known list for
    /// a refetch use [`best_known_people`](Self::best_known_people).
    pub fn visible_people(&self) -> &[Person] {
        match &self.status {
            FetchStatus::Loading { last_people } | FetchStatus::Failed { last_people, .. } => {
                last_people
            }
            FetchStatus::Loaded { people } => people,
            FetchStatus::LoadingLong => &[],
        }
    }

    /// The most recent list known to the model
    pub fn best_known_people(&self) -> Vec<Person> {
        self.visible_people().to_vec()
    }

    /// Whether a fetch is in flight
    pub fn is_busy(&self) -> bool {
        matches!(
            self.status,
            FetchStatus::Loading { .. } | FetchStatus::LoadingLong
        )
    }

    /// Short status line for display
    pub fn status_line(&self) -> String {
        match &self.status {
            FetchStatus::Loading { last_people } => {
                format!("Refreshing ({} shown)", last_people.len())
            }
            FetchStatus::LoadingLong => "Loading...".to_string(),
            FetchStatus::Loaded { people } => format!("{} people", people.len()),
            FetchStatus::Failed { error, .. } => format!("Failed to load: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(status: FetchStatus) -> PeopleModel {
        PeopleModel {
            fetch_id: RequestId::ZERO,
            time_ms: None,
            status,
        }
    }

    #[test]
    fn test_visible_people() {
        let ann = vec![Person::new(1, "Ann", 31)];

        assert_eq!(
            model(FetchStatus::Loading { last_people: ann.clone() }).visible_people(),
            ann.as_slice()
        );
        assert_eq!(
            model(FetchStatus::Failed {
                last_people: ann.clone(),
                error: "down".to_string(),
            })
            .visible_people(),
            ann.as_slice()
        );
        assert!(model(FetchStatus::LoadingLong).visible_people().is_empty());
    }

    #[test]
    fn test_status_line() {
        assert_eq!(model(FetchStatus::LoadingLong).status_line(), "Loading...");
        assert_eq!(
            model(FetchStatus::Loaded { people: Vec::new() }).status_line(),
            "0 people"
        );
        assert!(model(FetchStatus::LoadingLong).is_busy());
        assert!(!model(FetchStatus::Loaded { people: Vec::new() }).is_busy());
    }
}
