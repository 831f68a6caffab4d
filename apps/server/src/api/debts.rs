use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Extension, Json, Router,
};

use finpulse_core::debts::{Debt, NewDebt};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn get_debts(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<Debt>>> {
    let debts = state.debt_service.get_debts(&user.0).await?;
    Ok(Json(debts))
}

async fn create_debt(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(new_debt): Json<NewDebt>,
) -> ApiResult<(StatusCode, Json<Debt>)> {
    let debt = state.debt_service.add_debt(&user.0, new_debt).await?;
    Ok((StatusCode::CREATED, Json(debt)))
}

async fn delete_debt(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<StatusCode> {
    state.debt_service.delete_debt(&user.0, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/debts", get(get_debts).post(create_debt))
        .route("/debts/{id}", delete(delete_debt))
}
