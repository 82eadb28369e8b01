use sqlx::PgConnection;

use crate::pkg::internal::adaptors::jobs::spec::JobEntry;
use crate::pkg::server::handlers::jobs::CreateJobInput;
use crate::prelude::Result;

const RETURNING: &str = "RETURNING id, title, description, requirements, location, \
     company_id, recruiter_id, is_open, created_at, updated_at";

pub struct JobMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> JobMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        JobMutator { pool }
    }

    pub async fn create(&mut self, recruiter_id: &str, job: CreateJobInput) -> Result<JobEntry> {
        let row = sqlx::query_as::<_, JobEntry>(&format!(
            "INSERT INTO jobs (title, description, requirements, location, company_id, recruiter_id, is_open) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) {}",
            RETURNING
        ))
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.requirements)
        .bind(&job.location)
        .bind(job.company_id)
        .bind(recruiter_id)
        .bind(job.is_open)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    /// Owner-scoped toggle; a job the recruiter doesn't own behaves exactly
    /// like a missing one.
    pub async fn set_hiring_status(
        &mut self,
        job_id: i32,
        recruiter_id: &str,
        is_open: bool,
    ) -> Result<Option<JobEntry>> {
        let row = sqlx::query_as::<_, JobEntry>(&format!(
            "UPDATE jobs SET is_open = $3, updated_at = CURRENT_TIMESTAMP \
             WHERE id = $1 AND recruiter_id = $2 {}",
            RETURNING
        ))
        .bind(job_id)
        .bind(recruiter_id)
        .bind(is_open)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete(&mut self, job_id: i32, recruiter_id: &str) -> Result<Vec<JobEntry>> {
        let rows = sqlx::query_as::<_, JobEntry>(&format!(
            "DELETE FROM jobs WHERE id = $1 AND recruiter_id = $2 {}",
            RETURNING
        ))
        .bind(job_id)
        .bind(recruiter_id)
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }
}
