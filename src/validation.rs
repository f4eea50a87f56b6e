use crate::models::contact::ContactSubmission;
use email_address::EmailAddress;
use regex::Regex;
use std::sync::LazyLock;

// Locale-agnostic plausibility check, not a full E.164 parse: an optional
// leading +, a non-zero first digit, then 6-15 digits/separators.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][\d\s\-()]{6,15}$").expect("invalid phone pattern"));

/// Checks a submission against the field rules and returns every violation
/// as a human-readable message. All checks run so the client sees the full
/// list at once; an empty vec means the submission is valid. No side effects.
pub fn validate(submission: &ContactSubmission) -> Vec<String> {
    let mut errors = Vec::new();

    let name = submission.name.as_deref().unwrap_or_default().trim();
    if name.chars().count() < 2 {
        errors.push(String::from("Name must be at least 2 characters long"));
    } else if name.chars().count() > 100 {
        errors.push(String::from("Name must be less than 100 characters"));
    }

    let email = submission.email.as_deref().unwrap_or_default().trim();
    if !EmailAddress::is_valid(email) {
        errors.push(String::from("Please provide a valid email address"));
    }

    let message = submission.message.as_deref().unwrap_or_default().trim();
    if message.chars().count() < 10 {
        errors.push(String::from("Message must be at least 10 characters long"));
    } else if message.chars().count() > 2000 {
        errors.push(String::from("Message must be less than 2000 characters"));
    }

    if let Some(company) = submission.company.as_deref() {
        if company.trim().chars().count() > 100 {
            errors.push(String::from("Company name must be less than 100 characters"));
        }
    }

    if let Some(phone) = submission.phone.as_deref() {
        let phone = phone.trim();
        if !phone.is_empty() && !PHONE_PATTERN.is_match(phone) {
            errors.push(String::from("Please provide a valid phone number"));
        }
    }

    errors
}
