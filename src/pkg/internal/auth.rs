use axum::http::{header::AUTHORIZATION, HeaderMap};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{prelude::FromRow, PgConnection};
use uuid::Uuid;

use crate::prelude::{Error, Result};

#[derive(FromRow, Debug, Serialize, Clone)]
pub struct User {
    pub user_id: String,
    pub email: String,
    pub name: String,
}

#[derive(FromRow, Debug)]
pub struct Session {
    pub user_id: String,
    pub expiry: DateTime<Utc>,
}

/// Pulls the session token out of an `Authorization: Bearer <uuid>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?
        .trim()
        .parse()
        .ok()
}

impl Session {
    pub async fn check_token_validity(pool: &mut PgConnection, token: Uuid) -> Result<User> {
        let session = sqlx::query_as::<_, Session>(
            "SELECT user_id, expiry FROM sessions WHERE token = $1 AND expiry > now()",
        )
        .bind(token)
        .fetch_optional(&mut *pool)
        .await?;
        let Some(session) = session else {
            return Err(Error::Unauthorized("ERR-AUTH-001"));
        };
        tracing::debug!(
            "session for {} valid until {}",
            &session.user_id,
            &session.expiry
        );
        let user =
            sqlx::query_as::<_, User>("SELECT user_id, email, name FROM users WHERE user_id = $1")
                .bind(&session.user_id)
                .fetch_one(&mut *pool)
                .await?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::server::state::{AppState, GetTxn};
    use axum::http::HeaderValue;
    use tracing_test::traced_test;

    #[test]
    fn bearer_token_parses_a_uuid() {
        let token = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        );
        assert_eq!(bearer_token(&headers), Some(token));
    }

    #[test]
    fn bearer_token_rejects_garbage() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer nope"));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );
        assert_eq!(bearer_token(&headers), None);
    }

    #[traced_test]
    #[tokio::test]
    #[ignore = "needs a configured database"]
    async fn unknown_session_token_is_rejected() -> Result<()> {
        let state = AppState::new().await?;
        let mut tx = state.db_pool.begin_txn().await?;
        let res = Session::check_token_validity(&mut tx, Uuid::new_v4()).await;
        assert!(matches!(res, Err(Error::Unauthorized(_))));
        Ok(())
    }
}
