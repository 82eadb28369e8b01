use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SavedJobEntry {
    pub id: i32,
    pub user_id: String,
    pub job_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Saved-job row joined with the bookmarked job and its company.
#[derive(Debug, Clone, FromRow)]
pub struct SavedJobWithJobRow {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub job_id: i32,
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub location: String,
    pub company_id: Option<i32>,
    pub recruiter_id: String,
    pub is_open: bool,
    pub job_created_at: DateTime<Utc>,
    pub job_updated_at: DateTime<Utc>,
    pub company_name: Option<String>,
    pub company_logo_url: Option<String>,
}
