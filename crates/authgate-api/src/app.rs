//! Application builder: wires router + middleware + state into an Axum app.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use authgate_auth::gateway::AuthGateway;
use authgate_auth::policy::RouteAuthorizer;
use authgate_auth::token::{SigningKey, TokenService};
use authgate_core::config::AppConfig;
use authgate_core::error::AppError;
use authgate_core::traits::UserLookup;

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::{AppState, IdentityMode};

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Builds the shared application state from configuration.
///
/// Fails fast on a bad signing secret, an invalid policy table, or an
/// unknown identity mode; none of these are recoverable at runtime.
pub fn build_state(config: AppConfig, users: Arc<dyn UserLookup>) -> Result<AppState, AppError> {
    let key = SigningKey::from_config(&config.auth)?;
    let tokens = Arc::new(TokenService::new(
        &config.auth,
        &config.user_api,
        &key,
        Arc::clone(&users),
    ));

    let routes = Arc::new(RouteAuthorizer::from_config(&config.policy)?);
    let gateway = Arc::new(AuthGateway::new(
        Arc::clone(&tokens),
        routes,
        config.server.auth_exempt_prefixes.clone(),
    ));

    let identity_mode = IdentityMode::parse(&config.server.identity_mode)?;

    Ok(AppState {
        config: Arc::new(config),
        gateway,
        tokens,
        users,
        identity_mode,
    })
}

/// Runs the AuthGate server with the given configuration and user
/// directory client.
pub async fn run_server(config: AppConfig, users: Arc<dyn UserLookup>) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = build_state(config, users)?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("AuthGate server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
