use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Extension, Json, Router,
};

use finpulse_core::expenses::{Expense, NewExpense};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn get_expenses(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<Expense>>> {
    let expenses = state.expense_service.get_expenses(&user.0).await?;
    Ok(Json(expenses))
}

async fn create_expense(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(new_expense): Json<NewExpense>,
) -> ApiResult<(StatusCode, Json<Expense>)> {
    let expense = state.expense_service.add_expense(&user.0, new_expense).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

async fn delete_expense(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<StatusCode> {
    state.expense_service.delete_expense(&user.0, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/expenses", get(get_expenses).post(create_expense))
        .route("/expenses/{id}", delete(delete_expense))
}
