use chrono::NaiveDateTime;
use uuid::Uuid;

/// One persisted waitlist submission. Never updated once written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: Option<String>,
    pub category: String,
    pub created_at: NaiveDateTime,
}

/// A submission that passed validation and is ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWaitlistEntry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: Option<String>,
    pub category: String,
}
