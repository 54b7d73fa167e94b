//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::{
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
    use_cases::waitlist::WaitlistSubmission,
};

/// Create a well-formed form submission (no message).
pub fn create_test_submission(
    overrides: impl FnOnce(&mut WaitlistSubmission),
) -> WaitlistSubmission {
    let mut submission = WaitlistSubmission {
        name: Some("Ana".to_string()),
        email: Some("ana@x.com".to_string()),
        phone: Some("555-0100".to_string()),
        message: None,
        category: Some("investor".to_string()),
    };
    overrides(&mut submission);
    submission
}

/// Create a validated entry ready for insertion.
pub fn create_test_new_entry(overrides: impl FnOnce(&mut NewWaitlistEntry)) -> NewWaitlistEntry {
    let mut entry = NewWaitlistEntry {
        name: "Ana".to_string(),
        email: "ana@x.com".to_string(),
        phone: "555-0100".to_string(),
        message: None,
        category: "investor".to_string(),
    };
    overrides(&mut entry);
    entry
}

/// Create a stored entry.
pub fn create_test_entry(overrides: impl FnOnce(&mut WaitlistEntry)) -> WaitlistEntry {
    let mut entry = WaitlistEntry {
        id: Uuid::new_v4(),
        name: "Ana".to_string(),
        email: "ana@x.com".to_string(),
        phone: "555-0100".to_string(),
        message: None,
        category: "investor".to_string(),
        created_at: test_datetime(),
    };
    overrides(&mut entry);
    entry
}

pub fn test_datetime() -> NaiveDateTime {
    chrono::DateTime::from_timestamp(1_735_689_600, 0)
        .map(|dt| dt.naive_utc())
        .unwrap_or_default()
}
