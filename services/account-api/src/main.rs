//! FitGen Account API
//!
//! Account and subscription service for the FitGen app.
//!
//! ## Endpoints
//!
//! - `POST /api/auth/register` - Create an account (grants the trial plan)
//! - `POST /api/auth/login` - Exchange credentials for a session token
//! - `GET /api/auth/profile` - Claims of the presented token
//! - `GET /api/subscriptions/plans` - Public plan catalog
//! - `POST /api/subscriptions/subscribe` - Subscribe to a plan
//! - `GET /api/subscriptions/current` - Current subscription with plan details
//! - `GET /health`, `GET /ready` - Probes

mod config;
mod error;
mod extractors;
mod handlers;
mod state;

use std::net::SocketAddr;

use axum::routing::{get, post};
use axum::Router;
use fitgen_db::Repositories;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::handlers::{health, ready};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("account_api=debug".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting FitGen Account API");

    // Load configuration
    let config = Config::from_env()?;
    if config.using_default_secret {
        tracing::warn!("JWT_SECRET not set; using the insecure development default");
    }
    tracing::info!(port = config.port, "Configuration loaded");

    // Create database pool and apply the idempotent schema + seed
    let pool = fitgen_db::create_pool(&config.database_url).await?;
    fitgen_db::migrate(&pool).await?;
    fitgen_db::seed_plans(&pool).await?;
    tracing::info!("Database ready");

    // Create repositories and application state
    let repos = Repositories::new(pool);
    let state = AppState::new(repos, config.clone());

    // Build HTTP router
    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    run_http_server(app, addr).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn build_router(state: AppState) -> Router {
    let request_timeout = state.request_timeout();

    let api = Router::new()
        // Auth routes
        .route("/auth/register", post(handlers::register))
        .route("/auth/login", post(handlers::login))
        .route("/auth/profile", get(handlers::profile))
        // Subscription routes
        .route("/subscriptions/plans", get(handlers::list_plans))
        .route("/subscriptions/subscribe", post(handlers::subscribe))
        .route("/subscriptions/current", get(handlers::current_subscription));

    // Health routes (no timeout - must always respond quickly)
    let health_routes = Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready));

    // Middleware stack (order matters - outermost first)
    let middleware = ServiceBuilder::new()
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TimeoutLayer::new(request_timeout));

    Router::new()
        .nest("/api", api)
        .layer(middleware)
        .merge(health_routes)
        .with_state(state)
}

async fn run_http_server(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    tracing::info!("HTTP server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
