use actix_web::{web, HttpResponse};
use tracing::info;

use crate::entities::order::OrderAction;
use crate::entities::query::OrdersFilter;
use crate::errors::ApiError;
use crate::state::AppState;

pub async fn list_orders(
    state: web::Data<AppState>,
    q: web::Query<OrdersFilter>,
) -> Result<HttpResponse, ApiError> {
    let key = q.normalize();
    let page = state.store.list(&key).await.map_err(|_| ApiError::Internal)?;
    Ok(HttpResponse::Ok().json(page))
}

pub async fn get_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let order = state.store.get_by_id(&id).await?;
    Ok(HttpResponse::Ok().json(order))
}

async fn apply_action(
    state: web::Data<AppState>,
    path: web::Path<String>,
    action: OrderAction,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let status = state.store.apply(&id, action).await?;
    info!(order_id = %id, %action, %status, "order status changed");
    Ok(HttpResponse::NoContent().finish())
}

pub async fn approve_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    apply_action(state, path, OrderAction::Approve).await
}

pub async fn dispatch_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    apply_action(state, path, OrderAction::Dispatch).await
}

pub async fn deliver_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    apply_action(state, path, OrderAction::Deliver).await
}

pub async fn cancel_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    apply_action(state, path, OrderAction::Cancel).await
}
