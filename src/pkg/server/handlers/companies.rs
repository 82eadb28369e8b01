use std::sync::Arc;

use axum::{extract::State, Extension, Json};

use crate::{
    pkg::{
        internal::{
            adaptors::companies::{selectors::CompanySelector, spec::CompanyEntry},
            auth::User,
        },
        server::state::{AppState, GetTxn},
    },
    prelude::Result,
};

pub async fn list(
    State(state): State<AppState>,
    Extension(_user): Extension<Arc<User>>,
) -> Result<Json<Vec<CompanyEntry>>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let companies = CompanySelector::new(&mut tx).get_all().await?;
    Ok(Json(companies))
}
