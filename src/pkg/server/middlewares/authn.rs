use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::{
    pkg::{
        internal::auth::{bearer_token, Session},
        server::state::{AppState, GetTxn},
    },
    prelude::{Error, Result},
};

pub async fn authenticate(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let Some(token) = bearer_token(&headers) else {
        tracing::warn!("token missing, authentication denied");
        return Err(Error::Unauthorized("ERR-AUTH-001"));
    };
    // the session lookup must give its connection back before the handler
    // acquires one, or a saturated pool deadlocks every in-flight request
    let user = {
        let mut tx = state.db_pool.begin_txn().await?;
        Session::check_token_validity(&mut tx, token).await?
    };
    request.extensions_mut().insert(Arc::new(user));
    Ok(next.run(request).await)
}
