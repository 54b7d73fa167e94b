use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::{
        waitlist_category::WaitlistCategory,
        waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
    },
    validators::{is_valid_email, non_empty},
};

/// Why an insert did not produce a row.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InsertError {
    #[error("unique constraint violated on column {column}")]
    Conflict { column: String },

    #[error("{0}")]
    Other(String),
}

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    /// Inserts exactly one row, or none on error.
    async fn insert(&self, entry: &NewWaitlistEntry) -> Result<WaitlistEntry, InsertError>;
    async fn ping(&self) -> AppResult<()>;
}

/// Raw form payload. Every field is optional at the decoding level so that
/// absence is reported by validation instead of the JSON decoder.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WaitlistSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub category: Option<String>,
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
    strict_category: bool,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>, strict_category: bool) -> Self {
        Self {
            repo,
            strict_category,
        }
    }

    #[instrument(skip(self, submission), fields(email = field::Empty))]
    pub async fn join(&self, submission: WaitlistSubmission) -> AppResult<WaitlistEntry> {
        if let Some(email) = submission.email.as_deref() {
            Span::current().record("email", mask_email(email).as_str());
        }

        let entry = validate_submission(submission, self.strict_category)?;

        match self.repo.insert(&entry).await {
            Ok(created) => {
                info!(id = %created.id, category = %created.category, "Waitlist entry created");
                Ok(created)
            }
            Err(InsertError::Conflict { column }) if column == "email" => {
                warn!("Email already on the waitlist");
                Err(AppError::DuplicateEmail)
            }
            Err(err) => Err(AppError::Database(err.to_string())),
        }
    }

    #[instrument(skip(self))]
    pub async fn check_health(&self) -> AppResult<()> {
        self.repo.ping().await
    }
}

/// Checks run in order, the first failure wins. Nothing here touches the store.
pub fn validate_submission(
    submission: WaitlistSubmission,
    strict_category: bool,
) -> AppResult<NewWaitlistEntry> {
    let (Some(name), Some(email), Some(phone), Some(category)) = (
        non_empty(submission.name),
        non_empty(submission.email),
        non_empty(submission.phone),
        non_empty(submission.category),
    ) else {
        return Err(AppError::MissingFields);
    };

    if !is_valid_email(&email) {
        return Err(AppError::InvalidEmail);
    }

    if strict_category && !WaitlistCategory::is_known(&category) {
        return Err(AppError::InvalidCategory(category));
    }

    Ok(NewWaitlistEntry {
        name,
        email,
        phone,
        message: non_empty(submission.message),
        category,
    })
}

/// Keeps the first character of the local part and the domain, e.g. `a***@x.com`.
fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{first}***@{domain}")
        }
        None => "***".to_string(),
    }
}
