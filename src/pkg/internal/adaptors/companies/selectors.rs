use sqlx::PgConnection;

use crate::pkg::internal::adaptors::companies::spec::CompanyEntry;
use crate::prelude::Result;

pub struct CompanySelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> CompanySelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        CompanySelector { pool }
    }

    pub async fn get_all(&mut self) -> Result<Vec<CompanyEntry>> {
        let rows = sqlx::query_as::<_, CompanyEntry>(
            "SELECT id, name, logo_url FROM companies ORDER BY name",
        )
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }
}
