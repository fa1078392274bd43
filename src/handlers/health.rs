use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::entities::query::OrderQueryKey;
use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    orders: u64,
}

pub async fn health(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let all = state
        .store
        .list(&OrderQueryKey::default())
        .await
        .map_err(|_| ApiError::Internal)?;
    Ok(HttpResponse::Ok().json(Health {
        status: "ok",
        orders: all.meta.total_count,
    }))
}
