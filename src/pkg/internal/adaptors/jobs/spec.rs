use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobEntry {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub location: String,
    pub company_id: Option<i32>,
    pub recruiter_id: String,
    pub is_open: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing row: job columns joined with the company and the caller's
/// saved-job mark (null when the caller never saved the job).
#[derive(Debug, Clone, FromRow)]
pub struct JobListRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub location: String,
    pub company_id: Option<i32>,
    pub recruiter_id: String,
    pub is_open: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub company_name: Option<String>,
    pub company_logo_url: Option<String>,
    pub saved_id: Option<i32>,
}

/// Job columns joined with the company only, for single-job reads and
/// recruiter-scoped listings.
#[derive(Debug, Clone, FromRow)]
pub struct JobCompanyRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub location: String,
    pub company_id: Option<i32>,
    pub recruiter_id: String,
    pub is_open: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub company_name: Option<String>,
    pub company_logo_url: Option<String>,
}
