use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Name, email, phone, and category are required")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Email already exists in waitlist")]
    DuplicateEmail,

    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    /// Message safe to hand back to the caller. Never carries internal detail.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::InvalidBody(_) => "Invalid request body",
            AppError::MissingFields => "Name, email, phone, and category are required",
            AppError::InvalidEmail => "Invalid email format",
            AppError::InvalidCategory(_) => "Invalid category",
            AppError::DuplicateEmail => "Email already exists in waitlist",
            AppError::Database(_) => "Internal server error",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
