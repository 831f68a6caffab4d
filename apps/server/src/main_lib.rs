use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tokio::sync::mpsc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use finpulse_core::constants::PUSH_BUS_CAPACITY;
use finpulse_core::debts::{DebtService, DebtServiceTrait};
use finpulse_core::emis::{EmiService, EmiServiceTrait};
use finpulse_core::events::{DomainEventSink, EventBus};
use finpulse_core::expenses::{ExpenseService, ExpenseServiceTrait};
use finpulse_core::savings::{SavingsService, SavingsServiceTrait};
use finpulse_core::totals::{TotalsCalculator, TotalsService};
use finpulse_core::users::{UserService, UserServiceTrait};
use finpulse_store_memory::{
    InMemoryDebtRepository, InMemoryEmiRepository, InMemoryExpenseRepository,
    InMemorySavingsRepository, InMemoryUserRepository,
};

use crate::api;
use crate::auth::{self, require_auth, AuthManager};
use crate::config::Config;
use crate::domain_events::{totals_update_worker, ChannelDomainEventSink};

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub emi_service: Arc<dyn EmiServiceTrait>,
    pub expense_service: Arc<dyn ExpenseServiceTrait>,
    pub debt_service: Arc<dyn DebtServiceTrait>,
    pub savings_service: Arc<dyn SavingsServiceTrait>,
    pub totals_service: Arc<TotalsService>,
    pub event_bus: EventBus,
    pub auth: Arc<AuthManager>,
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

/// Wires repositories, services, the push bus, and the totals worker.
/// Must run inside a tokio runtime (the worker task is spawned here).
pub fn build_state(config: &Config) -> Arc<AppState> {
    let user_repository = Arc::new(InMemoryUserRepository::new());
    let emi_repository = Arc::new(InMemoryEmiRepository::new());
    let expense_repository = Arc::new(InMemoryExpenseRepository::new());
    let debt_repository = Arc::new(InMemoryDebtRepository::new());
    let savings_repository = Arc::new(InMemorySavingsRepository::new());

    let event_bus = EventBus::new(PUSH_BUS_CAPACITY);
    let calculator = TotalsCalculator::new(
        user_repository.clone(),
        emi_repository.clone(),
        expense_repository.clone(),
        debt_repository.clone(),
        savings_repository.clone(),
    );
    let totals_service = Arc::new(TotalsService::new(
        calculator,
        user_repository.clone(),
        event_bus.clone(),
    ));

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let event_sink: Arc<dyn DomainEventSink> = Arc::new(ChannelDomainEventSink::new(event_tx));
    tokio::spawn(totals_update_worker(event_rx, totals_service.clone()));

    Arc::new(AppState {
        user_service: Arc::new(UserService::new(user_repository.clone(), event_sink.clone())),
        emi_service: Arc::new(EmiService::new(emi_repository, event_sink.clone())),
        expense_service: Arc::new(ExpenseService::new(expense_repository, event_sink.clone())),
        debt_service: Arc::new(DebtService::new(debt_repository, event_sink.clone())),
        savings_service: Arc::new(SavingsService::new(savings_repository, event_sink)),
        totals_service,
        event_bus,
        auth: Arc::new(AuthManager::new(
            config.jwt_secret.as_bytes(),
            config.token_ttl,
        )),
    })
}

async fn healthz() -> &'static str {
    "ok"
}

pub fn app_router(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .merge(api::dashboard::router())
        .merge(api::emis::router())
        .merge(api::expenses::router())
        .merge(api::debts::router())
        .merge(api::savings::router())
        .merge(api::profile::router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/healthz", get(healthz))
        .nest("/api", auth::router().merge(protected))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
