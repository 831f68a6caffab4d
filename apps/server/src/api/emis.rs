use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Extension, Json, Router,
};

use finpulse_core::emis::{Emi, EmiStats, NewEmi};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn get_emis(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<Emi>>> {
    let emis = state.emi_service.get_emis(&user.0).await?;
    Ok(Json(emis))
}

async fn create_emi(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(new_emi): Json<NewEmi>,
) -> ApiResult<(StatusCode, Json<Emi>)> {
    let emi = state.emi_service.add_emi(&user.0, new_emi).await?;
    Ok((StatusCode::CREATED, Json(emi)))
}

async fn delete_emi(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<StatusCode> {
    state.emi_service.delete_emi(&user.0, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_stats(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<EmiStats>> {
    let stats = state.emi_service.get_stats(&user.0).await?;
    Ok(Json(stats))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/emis", get(get_emis).post(create_emi))
        .route("/emis/stats", get(get_stats))
        .route("/emis/{id}", delete(delete_emi))
}
