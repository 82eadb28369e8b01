use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    pkg::{
        internal::{
            adaptors::saved_jobs::{
                mutators::SavedJobMutator,
                selectors::SavedJobSelector,
                spec::{SavedJobEntry, SavedJobWithJobRow},
            },
            auth::User,
        },
        server::{
            handlers::jobs::{CompanyRef, JobSummary},
            state::{AppState, GetTxn},
        },
    },
    prelude::Result,
};

#[derive(Debug, Deserialize)]
pub struct SaveJobInput {
    /// The caller's belief about current state picks the branch: delete the
    /// bookmark when true, insert one when false.
    #[serde(default)]
    pub already_saved: bool,
}

#[derive(Debug, Serialize)]
pub struct SavedJobItem {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub job: JobSummary,
}

impl From<SavedJobWithJobRow> for SavedJobItem {
    fn from(row: SavedJobWithJobRow) -> Self {
        SavedJobItem {
            id: row.id,
            created_at: row.created_at,
            job: JobSummary {
                id: row.job_id,
                title: row.title,
                description: row.description,
                requirements: row.requirements,
                location: row.location,
                company_id: row.company_id,
                recruiter_id: row.recruiter_id,
                is_open: row.is_open,
                created_at: row.job_created_at,
                updated_at: row.job_updated_at,
                company: row.company_name.map(|name| CompanyRef {
                    name,
                    logo_url: row.company_logo_url,
                }),
                saved: Some(row.id),
            },
        }
    }
}

pub async fn toggle(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<User>>,
    Path(job_id): Path<i32>,
    Json(input): Json<SaveJobInput>,
) -> Result<Json<Vec<SavedJobEntry>>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let rows = if input.already_saved {
        SavedJobMutator::new(&mut tx)
            .unsave(&user.user_id, job_id)
            .await?
    } else {
        let row = SavedJobMutator::new(&mut tx)
            .save(&user.user_id, job_id)
            .await?;
        vec![row]
    };
    tx.commit().await?;
    Ok(Json(rows))
}

pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<User>>,
) -> Result<Json<Vec<SavedJobItem>>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let rows = SavedJobSelector::new(&mut tx)
        .get_for_user(&user.user_id)
        .await?;
    Ok(Json(rows.into_iter().map(SavedJobItem::from).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_input_defaults_to_not_saved() {
        let input: SaveJobInput = serde_json::from_str("{}").unwrap();
        assert!(!input.already_saved);
    }

    #[test]
    fn saved_row_nests_the_job_projection() {
        let row = SavedJobWithJobRow {
            id: 9,
            created_at: Utc::now(),
            job_id: 3,
            title: "Data Engineer".into(),
            description: "".into(),
            requirements: "".into(),
            location: "Berlin".into(),
            company_id: Some(2),
            recruiter_id: "rec-2".into(),
            is_open: false,
            job_created_at: Utc::now(),
            job_updated_at: Utc::now(),
            company_name: Some("Initech".into()),
            company_logo_url: Some("https://logo.example/initech.png".into()),
        };
        let item = SavedJobItem::from(row);
        assert_eq!(item.job.id, 3);
        assert_eq!(item.job.saved, Some(9));
        assert_eq!(item.job.company.as_ref().unwrap().name, "Initech");
    }
}
