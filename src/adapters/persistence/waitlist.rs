use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::AppResult,
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
    use_cases::waitlist::{InsertError, WaitlistRepo},
};

/// Name of the unique constraint on `waitlist.email`, see migrations/.
const EMAIL_UNIQUE_CONSTRAINT: &str = "waitlist_email_key";

// Waitlist row as stored in the db.
#[derive(sqlx::FromRow, Debug)]
pub struct WaitlistEntryDb {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: Option<String>,
    pub category: String,
    pub created_at: NaiveDateTime,
}

impl From<WaitlistEntryDb> for WaitlistEntry {
    fn from(row: WaitlistEntryDb) -> Self {
        WaitlistEntry {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            message: row.message,
            category: row.category,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn insert(&self, entry: &NewWaitlistEntry) -> Result<WaitlistEntry, InsertError> {
        // Returned to the pool on drop, on every exit path.
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| InsertError::Other(format!("failed to acquire connection: {e}")))?;

        let rec = sqlx::query_as::<_, WaitlistEntryDb>(
            r#"
                INSERT INTO waitlist (id, name, email, phone, message, category)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id, name, email, phone, message, category, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&entry.name)
        .bind(&entry.email)
        .bind(&entry.phone)
        .bind(entry.message.as_deref())
        .bind(&entry.category)
        .fetch_one(&mut *conn)
        .await
        .map_err(classify_insert_error)?;

        Ok(rec.into())
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

fn classify_insert_error(err: sqlx::Error) -> InsertError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.is_unique_violation()
    {
        return InsertError::Conflict {
            column: conflict_column(db_err.constraint()),
        };
    }
    InsertError::Other(err.to_string())
}

/// Maps a violated constraint back to the column it guards. Unknown
/// constraints are reported under their own name.
fn conflict_column(constraint: Option<&str>) -> String {
    match constraint {
        Some(EMAIL_UNIQUE_CONSTRAINT) => "email".to_string(),
        Some(other) => other.to_string(),
        None => "unknown".to_string(),
    }
}
