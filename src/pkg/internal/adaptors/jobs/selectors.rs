use sqlx::{PgConnection, Postgres, QueryBuilder};

use crate::pkg::internal::adaptors::jobs::spec::{JobCompanyRow, JobListRow};
use crate::pkg::server::handlers::jobs::ListJobsQuery;
use crate::prelude::Result;

const JOB_COLUMNS: &str = "j.id, j.title, j.description, j.requirements, j.location, \
     j.company_id, j.recruiter_id, j.is_open, j.created_at, j.updated_at, \
     c.name AS company_name, c.logo_url AS company_logo_url";

/// Builds the listing query: base projection plus the conjunction of
/// whichever filters the caller supplied. Omitted filters add no clause.
fn list_query(user_id: &str, filter: &ListJobsQuery) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!(
        "SELECT {}, s.id AS saved_id FROM jobs j \
         LEFT JOIN companies c ON c.id = j.company_id \
         LEFT JOIN saved_jobs s ON s.job_id = j.id AND s.user_id = ",
        JOB_COLUMNS
    ));
    qb.push_bind(user_id.to_owned());
    qb.push(" WHERE 1=1");
    if let Some(location) = &filter.location {
        qb.push(" AND j.location = ").push_bind(location.clone());
    }
    if let Some(company_id) = filter.company_id {
        qb.push(" AND j.company_id = ").push_bind(company_id);
    }
    if let Some(search) = &filter.search {
        qb.push(" AND j.title ILIKE ")
            .push_bind(format!("%{}%", search));
    }
    qb.push(" ORDER BY j.created_at DESC");
    qb
}

pub struct JobSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> JobSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        JobSelector { pool }
    }

    pub async fn list(&mut self, user_id: &str, filter: &ListJobsQuery) -> Result<Vec<JobListRow>> {
        let mut query = list_query(user_id, filter);
        let rows = query
            .build_query_as::<JobListRow>()
            .fetch_all(&mut *self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get_with_company(&mut self, job_id: i32) -> Result<Option<JobCompanyRow>> {
        let row = sqlx::query_as::<_, JobCompanyRow>(&format!(
            "SELECT {} FROM jobs j \
             LEFT JOIN companies c ON c.id = j.company_id \
             WHERE j.id = $1",
            JOB_COLUMNS
        ))
        .bind(job_id)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn get_by_recruiter(&mut self, recruiter_id: &str) -> Result<Vec<JobCompanyRow>> {
        let rows = sqlx::query_as::<_, JobCompanyRow>(&format!(
            "SELECT {} FROM jobs j \
             LEFT JOIN companies c ON c.id = j.company_id \
             WHERE j.recruiter_id = $1 ORDER BY j.created_at DESC",
            JOB_COLUMNS
        ))
        .bind(recruiter_id)
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(
        location: Option<&str>,
        company_id: Option<i32>,
        search: Option<&str>,
    ) -> ListJobsQuery {
        ListJobsQuery {
            location: location.map(String::from),
            company_id,
            search: search.map(String::from),
        }
    }

    #[test]
    fn no_filters_builds_bare_listing() {
        let mut qb = list_query("user-1", &filter(None, None, None));
        let sql = qb.sql();
        assert!(!sql.contains("j.location ="));
        assert!(!sql.contains("j.company_id ="));
        assert!(!sql.contains("ILIKE"));
        assert!(sql.contains("LEFT JOIN companies"));
        assert!(sql.contains("s.id AS saved_id"));
    }

    #[test]
    fn search_alone_does_not_filter_location_or_company() {
        let mut qb = list_query("user-1", &filter(None, None, Some("engineer")));
        let sql = qb.sql();
        assert!(sql.contains("j.title ILIKE"));
        assert!(!sql.contains("j.location ="));
        assert!(!sql.contains("j.company_id ="));
    }

    #[test]
    fn all_filters_are_conjoined() {
        let mut qb = list_query("user-1", &filter(Some("Remote"), Some(7), Some("rust")));
        let sql = qb.sql();
        assert!(sql.contains("j.location = "));
        assert!(sql.contains("j.company_id = "));
        assert!(sql.contains("j.title ILIKE "));
        assert_eq!(sql.matches(" AND ").count() - 1, 3); // one AND belongs to the saved join
    }
}
