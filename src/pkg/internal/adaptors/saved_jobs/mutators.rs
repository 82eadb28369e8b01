use sqlx::PgConnection;

use crate::pkg::internal::adaptors::saved_jobs::spec::SavedJobEntry;
use crate::prelude::Result;

pub struct SavedJobMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> SavedJobMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        SavedJobMutator { pool }
    }

    /// Inserts one bookmark; the (user, job) unique constraint turns a
    /// duplicate save into a conflict error.
    pub async fn save(&mut self, user_id: &str, job_id: i32) -> Result<SavedJobEntry> {
        let row = sqlx::query_as::<_, SavedJobEntry>(
            "INSERT INTO saved_jobs (user_id, job_id) VALUES ($1, $2) \
             RETURNING id, user_id, job_id, created_at",
        )
        .bind(user_id)
        .bind(job_id)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn unsave(&mut self, user_id: &str, job_id: i32) -> Result<Vec<SavedJobEntry>> {
        let rows = sqlx::query_as::<_, SavedJobEntry>(
            "DELETE FROM saved_jobs WHERE user_id = $1 AND job_id = $2 \
             RETURNING id, user_id, job_id, created_at",
        )
        .bind(user_id)
        .bind(job_id)
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::internal::adaptors::jobs::mutators::JobMutator;
    use crate::pkg::server::handlers::jobs::CreateJobInput;
    use crate::pkg::server::state::{AppState, GetTxn};
    use crate::prelude::Error;
    use tracing_test::traced_test;
    use uuid::Uuid;

    async fn seed_user(pool: &mut PgConnection) -> Result<String> {
        let user_id = Uuid::new_v4().to_string();
        sqlx::query("INSERT INTO users (user_id, email, name) VALUES ($1, $2, $3)")
            .bind(&user_id)
            .bind(format!("{}@example.com", &user_id))
            .bind("Test User")
            .execute(&mut *pool)
            .await?;
        Ok(user_id)
    }

    async fn seed_job(pool: &mut PgConnection, recruiter_id: &str) -> Result<i32> {
        let job = JobMutator::new(pool)
            .create(
                recruiter_id,
                CreateJobInput {
                    title: "Platform Engineer".into(),
                    description: String::new(),
                    requirements: String::new(),
                    location: "Remote".into(),
                    company_id: None,
                    is_open: true,
                },
            )
            .await?;
        Ok(job.id)
    }

    #[traced_test]
    #[tokio::test]
    #[ignore = "needs a configured database"]
    async fn save_inserts_one_row_and_unsave_returns_the_deleted_ones() -> Result<()> {
        let state = AppState::new().await?;
        let mut tx = state.db_pool.begin_txn().await?;
        let user_id = seed_user(&mut tx).await?;
        let job_id = seed_job(&mut tx, &user_id).await?;

        let saved = SavedJobMutator::new(&mut tx).save(&user_id, job_id).await?;
        assert_eq!(saved.job_id, job_id);
        assert_eq!(saved.user_id, user_id);

        let removed = SavedJobMutator::new(&mut tx).unsave(&user_id, job_id).await?;
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].id, saved.id);

        let removed = SavedJobMutator::new(&mut tx).unsave(&user_id, job_id).await?;
        assert!(removed.is_empty());
        Ok(())
    }

    #[traced_test]
    #[tokio::test]
    #[ignore = "needs a configured database"]
    async fn duplicate_save_is_a_conflict() -> Result<()> {
        let state = AppState::new().await?;
        let mut tx = state.db_pool.begin_txn().await?;
        let user_id = seed_user(&mut tx).await?;
        let job_id = seed_job(&mut tx, &user_id).await?;

        SavedJobMutator::new(&mut tx).save(&user_id, job_id).await?;
        let res = SavedJobMutator::new(&mut tx).save(&user_id, job_id).await;
        assert!(matches!(res, Err(Error::Conflict(_))));
        Ok(())
    }

    #[traced_test]
    #[tokio::test]
    #[ignore = "needs a configured database"]
    async fn saving_a_missing_job_is_not_found() -> Result<()> {
        let state = AppState::new().await?;
        let mut tx = state.db_pool.begin_txn().await?;
        let user_id = seed_user(&mut tx).await?;

        let res = SavedJobMutator::new(&mut tx).save(&user_id, -1).await;
        assert!(matches!(res, Err(Error::NotFound(_))));
        Ok(())
    }
}
