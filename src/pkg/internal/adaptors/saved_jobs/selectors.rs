use sqlx::PgConnection;

use crate::pkg::internal::adaptors::saved_jobs::spec::SavedJobWithJobRow;
use crate::prelude::Result;

pub struct SavedJobSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> SavedJobSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        SavedJobSelector { pool }
    }

    pub async fn get_for_user(&mut self, user_id: &str) -> Result<Vec<SavedJobWithJobRow>> {
        let rows = sqlx::query_as::<_, SavedJobWithJobRow>(
            "SELECT s.id, s.created_at, j.id AS job_id, j.title, j.description, j.requirements, \
             j.location, j.company_id, j.recruiter_id, j.is_open, \
             j.created_at AS job_created_at, j.updated_at AS job_updated_at, \
             c.name AS company_name, c.logo_url AS company_logo_url \
             FROM saved_jobs s \
             JOIN jobs j ON j.id = s.job_id \
             LEFT JOIN companies c ON c.id = j.company_id \
             WHERE s.user_id = $1 ORDER BY s.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }
}
