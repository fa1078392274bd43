use actix_web::{web, HttpResponse};

use crate::entities::profile::UpdateProfile;
use crate::errors::ApiError;
use crate::state::AppState;

pub async fn update_profile(
    state: web::Data<AppState>,
    payload: web::Json<UpdateProfile>,
) -> Result<HttpResponse, ApiError> {
    state.store.update_profile(payload.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
