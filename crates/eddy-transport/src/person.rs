//! Payloads exchanged with the server

use serde::{Deserialize, Serialize};

/// A person as listed by the server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub id: u64,
    pub name: String,
    pub age: u32,
}

impl Person {
    /// Create a person
    pub fn new(id: u64, name: impl Into<String>, age: u32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }
}

/// Body of a profile edit submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditRequest {
    pub first_name: String,
    pub last_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_json() {
        let people: Vec<Person> =
            serde_json::from_str(r#"[{"id": 1, "name": "Ann", "age": 31}]"#).unwrap();
        assert_eq!(people, vec![Person::new(1, "Ann", 31)]);
    }

    #[test]
    fn test_edit_request_field_names() {
        let body = EditRequest {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["firstName"], "Ann");
        assert_eq!(json["lastName"], "Lee");
    }
}
