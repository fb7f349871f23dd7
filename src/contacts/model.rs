//! Contact data types.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the repository.
pub type ContactId = i32;

/// A stored contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
}

/// Contact fields supplied by a client.
///
/// Any `id` present in the request body is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub email: String,
}

impl NewContact {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Attach an id, producing the record an update is applied with.
    pub fn with_id(self, id: ContactId) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_supplied_id_is_ignored() {
        let body = r#"{"id": 42, "name": "Bob", "email": "b@x.com"}"#;
        let new: NewContact = serde_json::from_str(body).unwrap();
        assert_eq!(new, NewContact::new("Bob", "b@x.com"));
    }

    #[test]
    fn test_contact_json_shape() {
        let contact = NewContact::new("Alice", "a@x.com").with_id(1);
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Alice", "email": "a@x.com"})
        );
    }
}
