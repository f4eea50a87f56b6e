use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted contact-form submission.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Contact {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub status: ContactStatus,
}

/// Workflow state of a contact. Stored as a MySQL ENUM, serialized lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ContactStatus {
    New,
    Read,
    Responded,
}

impl ContactStatus {
    /// Parses a client-supplied status, rejecting anything outside the
    /// enumeration before it can reach storage.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "new" => Some(Self::New),
            "read" => Some(Self::Read),
            "responded" => Some(Self::Responded),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Responded => "responded",
        }
    }
}

/// Raw request body of POST /api/contact. All fields optional so that
/// missing values reach the validation layer instead of failing
/// deserialization.
#[derive(Debug, Deserialize)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
}

/// A validated, normalized record ready for insertion.
#[derive(Debug)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub message: String,
}

impl ContactSubmission {
    /// Normalizes a submission that already passed validation: required
    /// fields trimmed, email lower-cased, blank optional fields dropped.
    pub fn normalized(&self) -> NewContact {
        NewContact {
            name: self.name.as_deref().unwrap_or_default().trim().to_string(),
            email: self
                .email
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_lowercase(),
            company: normalize_optional(&self.company),
            phone: normalize_optional(&self.phone),
            service: normalize_optional(&self.service),
            message: self
                .message
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_string(),
        }
    }
}

fn normalize_optional(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_only_enumerated_values() {
        assert_eq!(ContactStatus::parse("new"), Some(ContactStatus::New));
        assert_eq!(ContactStatus::parse("read"), Some(ContactStatus::Read));
        assert_eq!(
            ContactStatus::parse("responded"),
            Some(ContactStatus::Responded)
        );
        assert_eq!(ContactStatus::parse("archived"), None);
        assert_eq!(ContactStatus::parse("New"), None);
        assert_eq!(ContactStatus::parse(""), None);
    }

    #[test]
    fn normalized_lowercases_and_trims_email() {
        let submission = ContactSubmission {
            name: Some("  Al  ".to_string()),
            email: Some(" A@B.com ".to_string()),
            company: None,
            phone: None,
            service: None,
            message: Some("Hello there, this is a test.".to_string()),
        };

        let contact = submission.normalized();
        assert_eq!(contact.name, "Al");
        assert_eq!(contact.email, "a@b.com");
        assert_eq!(contact.message, "Hello there, this is a test.");
    }

    #[test]
    fn normalized_drops_blank_optional_fields() {
        let submission = ContactSubmission {
            name: Some("Alice".to_string()),
            email: Some("alice@example.com".to_string()),
            company: Some("   ".to_string()),
            phone: None,
            service: Some(" Web Development ".to_string()),
            message: Some("A long enough message.".to_string()),
        };

        let contact = submission.normalized();
        assert_eq!(contact.company, None);
        assert_eq!(contact.phone, None);
        assert_eq!(contact.service, Some("Web Development".to_string()));
    }
}
