use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}: record not found")]
    NotFound(&'static str),
    #[error("{0}: conflicts with an existing record")]
    Conflict(&'static str),
    #[error("{0}: authentication required")]
    Unauthorized(&'static str),
    #[error("ERR-VAL-000: {0}")]
    Validation(#[from] validator::ValidationErrors),
    #[error("ERR-DB-000: {0}")]
    Store(sqlx::Error),
    #[error("ERR-DB-001: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("ERR-IO-000: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Conflict(_) => StatusCode::CONFLICT,
            Error::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Maps constraint violations onto client-facing errors: a duplicate key is
/// a conflict, a dangling reference points at a record that isn't there.
fn constraint_error(db: &dyn sqlx::error::DatabaseError) -> Option<Error> {
    match db.kind() {
        sqlx::error::ErrorKind::UniqueViolation => Some(Error::Conflict("ERR-DB-409")),
        sqlx::error::ErrorKind::ForeignKeyViolation => Some(Error::NotFound("ERR-DB-404")),
        _ => None,
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Error::NotFound("ERR-DB-404"),
            sqlx::Error::Database(db) => match constraint_error(db.as_ref()) {
                Some(mapped) => mapped,
                None => Error::Store(err),
            },
            _ => Error::Store(err),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", &self);
        } else {
            tracing::warn!("{}", &self);
        }
        (status, Json(json!({"detail": self.to_string()}))).into_response()
    }
}
