use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Applications are only read here, as the nested projection of a job's
/// details; the application flow itself lives elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationEntry {
    pub id: i32,
    pub job_id: i32,
    pub candidate_id: String,
    pub name: String,
    pub experience: i32,
    pub education: String,
    pub skills: String,
    pub status: String,
    pub resume_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
