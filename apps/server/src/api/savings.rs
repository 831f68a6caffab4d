use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};

use finpulse_core::savings::{NewSavingsGoal, SavingsGoal, SavingsGoalUpdate};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn get_goals(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<SavingsGoal>>> {
    let goals = state.savings_service.get_goals(&user.0).await?;
    Ok(Json(goals))
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(new_goal): Json<NewSavingsGoal>,
) -> ApiResult<(StatusCode, Json<SavingsGoal>)> {
    let goal = state.savings_service.create_goal(&user.0, new_goal).await?;
    Ok((StatusCode::CREATED, Json(goal)))
}

async fn update_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(update): Json<SavingsGoalUpdate>,
) -> ApiResult<Json<SavingsGoal>> {
    let goal = state
        .savings_service
        .update_goal(&user.0, &id, update)
        .await?;
    Ok(Json(goal))
}

async fn delete_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<StatusCode> {
    state.savings_service.delete_goal(&user.0, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/savings", get(get_goals).post(create_goal))
        .route("/savings/{id}", axum::routing::put(update_goal).delete(delete_goal))
}
