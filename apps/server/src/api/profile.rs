use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{patch, put},
    Extension, Json, Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use finpulse_core::users::{FinancialField, FinancialProfileUpdate, User, UserUpdate};

use crate::{
    auth::CurrentUser,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(update): Json<UserUpdate>,
) -> ApiResult<Json<User>> {
    let updated = state.user_service.update_profile(&user.0, update).await?;
    Ok(Json(updated))
}

async fn update_financial_data(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(update): Json<FinancialProfileUpdate>,
) -> ApiResult<Json<User>> {
    let updated = state
        .user_service
        .update_financial_data(&user.0, update)
        .await?;
    Ok(Json(updated))
}

#[derive(Deserialize)]
struct PatchValue {
    value: Decimal,
}

async fn patch_financial_field(
    Path(field): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(body): Json<PatchValue>,
) -> ApiResult<Json<User>> {
    let field =
        FinancialField::from_str(&field).map_err(|err| ApiError::BadRequest(err.to_string()))?;
    let updated = state
        .user_service
        .patch_financial_field(&user.0, field, body.value)
        .await?;
    Ok(Json(updated))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/profile", put(update_profile))
        .route("/financial-data", put(update_financial_data))
        .route("/financial-data/{field}", patch(patch_financial_field))
}
