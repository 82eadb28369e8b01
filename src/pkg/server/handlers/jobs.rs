use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    pkg::{
        internal::{
            adaptors::{
                applications::{selectors::ApplicationSelector, spec::ApplicationEntry},
                jobs::{
                    mutators::JobMutator,
                    selectors::JobSelector,
                    spec::{JobCompanyRow, JobEntry, JobListRow},
                },
            },
            auth::User,
        },
        server::state::{AppState, GetTxn},
    },
    prelude::{Error, Result},
};

#[derive(Debug, Deserialize)]
pub struct ListJobsQuery {
    pub location: Option<String>,
    pub company_id: Option<i32>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateJobInput {
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub location: String,
    pub company_id: Option<i32>,
    #[serde(default = "default_open")]
    pub is_open: bool,
}

fn default_open() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct HiringStatusInput {
    pub is_open: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyRef {
    pub name: String,
    pub logo_url: Option<String>,
}

/// A job with its nested company projection, plus the caller's saved-job id
/// when the listing carries one.
#[derive(Debug, Serialize)]
pub struct JobSummary {
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
    pub company: Option<CompanyRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct JobDetails {
    #[serde(flatten)]
    pub job: JobSummary,
    pub applications: Vec<ApplicationEntry>,
}

fn company_ref(name: Option<String>, logo_url: Option<String>) -> Option<CompanyRef> {
    name.map(|name| CompanyRef { name, logo_url })
}

impl From<JobListRow> for JobSummary {
    fn from(row: JobListRow) -> Self {
        JobSummary {
            id: row.id,
            title: row.title,
            description: row.description,
            requirements: row.requirements,
            location: row.location,
            company_id: row.company_id,
            recruiter_id: row.recruiter_id,
            is_open: row.is_open,
            created_at: row.created_at,
            updated_at: row.updated_at,
            company: company_ref(row.company_name, row.company_logo_url),
            saved: row.saved_id,
        }
    }
}

impl From<JobCompanyRow> for JobSummary {
    fn from(row: JobCompanyRow) -> Self {
        JobSummary {
            id: row.id,
            title: row.title,
            description: row.description,
            requirements: row.requirements,
            location: row.location,
            company_id: row.company_id,
            recruiter_id: row.recruiter_id,
            is_open: row.is_open,
            created_at: row.created_at,
            updated_at: row.updated_at,
            company: company_ref(row.company_name, row.company_logo_url),
            saved: None,
        }
    }
}

pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<User>>,
    Query(filter): Query<ListJobsQuery>,
) -> Result<Json<Vec<JobSummary>>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let rows = JobSelector::new(&mut tx).list(&user.user_id, &filter).await?;
    Ok(Json(rows.into_iter().map(JobSummary::from).collect()))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<User>>,
    Json(input): Json<CreateJobInput>,
) -> Result<Json<JobEntry>> {
    input.validate()?;
    let mut tx = state.db_pool.begin_txn().await?;
    let job = JobMutator::new(&mut tx).create(&user.user_id, input).await?;
    tx.commit().await?;
    tracing::info!("job {} created by {}", job.id, &user.user_id);
    Ok(Json(job))
}

pub async fn details(
    State(state): State<AppState>,
    Extension(_user): Extension<Arc<User>>,
    Path(job_id): Path<i32>,
) -> Result<Json<JobDetails>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let job = match JobSelector::new(&mut tx).get_with_company(job_id).await? {
        Some(row) => JobSummary::from(row),
        None => return Err(Error::NotFound("ERR-JOBS-404")),
    };
    let applications = ApplicationSelector::new(&mut tx).get_by_job(job_id).await?;
    Ok(Json(JobDetails { job, applications }))
}

pub async fn set_hiring_status(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<User>>,
    Path(job_id): Path<i32>,
    Json(input): Json<HiringStatusInput>,
) -> Result<Json<JobEntry>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let job = JobMutator::new(&mut tx)
        .set_hiring_status(job_id, &user.user_id, input.is_open)
        .await?
        .ok_or(Error::NotFound("ERR-JOBS-404"))?;
    tx.commit().await?;
    Ok(Json(job))
}

/// Deleting a job the caller doesn't own, or one that never existed, yields
/// an empty collection rather than an error.
pub async fn remove(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<User>>,
    Path(job_id): Path<i32>,
) -> Result<Json<Vec<JobEntry>>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let deleted = JobMutator::new(&mut tx).delete(job_id, &user.user_id).await?;
    tx.commit().await?;
    tracing::info!("deleted {} job row(s) for {}", deleted.len(), &user.user_id);
    Ok(Json(deleted))
}

pub async fn list_mine(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<User>>,
) -> Result<Json<Vec<JobSummary>>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let rows = JobSelector::new(&mut tx)
        .get_by_recruiter(&user.user_id)
        .await?;
    Ok(Json(rows.into_iter().map(JobSummary::from).collect()))
}
