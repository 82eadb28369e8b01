use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Companies are a read-only join target; nothing here ever writes them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanyEntry {
    pub id: i32,
    pub name: String,
    pub logo_url: Option<String>,
}
