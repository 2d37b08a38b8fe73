//! # life_event_api
//!
//! HTTP API library for Life Event.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::Router;
use axum::routing::{delete, get, post};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{amounts, costs, health, jobs, readings, token, users};

/// Shared application state passed to all handlers.
///
/// The pool is the only store handle in the process; it is injected here
/// rather than living in a module-level singleton.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool.
    pub pool: PgPool,
    /// API configuration.
    pub config: ApiConfig,
}

/// Run embedded database migrations.
///
/// Delegates to `life_event_core::migrate::migrate()` which owns the
/// migration files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    life_event_core::migrate::migrate(pool).await
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no auth required)
    let public = Router::new()
        .route("/", get(health::health_handler))
        .route("/jwt", post(token::issue_token_handler))
        .route("/users", post(users::register_user_handler));

    // Privileged routes (require auth + privileged role)
    let privileged = Router::new()
        .route("/users", get(users::list_users_handler))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_admin,
        ));

    // Protected routes (require auth, owner-scoped in the store)
    let protected = Router::new()
        .route("/users/admin/{email}", get(users::check_admin_handler))
        .route(
            "/jobInfo",
            post(jobs::create_job_handler).get(jobs::list_jobs_handler),
        )
        .route(
            "/jobInfo/{id}",
            get(jobs::get_job_handler)
                .put(jobs::update_job_handler)
                .delete(jobs::delete_job_handler),
        )
        .route(
            "/amountInfo",
            post(amounts::create_amount_handler).get(amounts::list_amounts_handler),
        )
        .route("/amountInfo/{id}", delete(amounts::delete_amount_handler))
        .route(
            "/costInfo",
            post(costs::create_cost_handler).get(costs::list_costs_handler),
        )
        .route("/costInfo/{id}", delete(costs::delete_cost_handler))
        .route(
            "/readingInfo",
            post(readings::create_reading_handler).get(readings::list_readings_handler),
        )
        .route("/readingInfo/{id}", delete(readings::delete_reading_handler))
        .merge(privileged)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(cors)
        .with_state(state)
}
