//! Minimal HTTP service: a health check, a greeting, and a heartbeat that
//! periodically logs the process environment.

pub mod config;
pub mod error;
pub mod heartbeat;
pub mod routes;

#[cfg(test)]
mod test_support;

use axum::Router;
use axum::routing::any;
use environment::ProcessEnv;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use config::Config;
use error::ServerError;

/// Creates the Axum application router.
///
/// Handlers are routed for every method and reject non-`GET` themselves.
/// Unmatched paths fall through to the greeting.
pub fn create_app() -> Router {
    Router::new()
        .route("/health", any(routes::health::check))
        .route("/", any(routes::root::greet))
        .fallback(routes::root::greet)
        .layer(TraceLayer::new_for_http())
}

/// Binds a TCP listener on `addr`.
pub async fn bind(addr: &str) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })
}

/// Serves `app` on `listener` until an I/O error occurs.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

/// Logs the startup state, starts the heartbeat, then binds and serves.
///
/// Only returns on failure.
pub async fn run(config: &Config) -> Result<(), ServerError> {
    tracing::info!(port = %config.port, "server starting");
    tracing::info!(env = %environment::snapshot(), "environment variables");

    let app = create_app();
    heartbeat::spawn(config.port.clone(), config.heartbeat_interval, ProcessEnv);

    let addr = config.addr();
    let listener = bind(&addr).await?;
    tracing::info!(%addr, "listening");
    serve(listener, app).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture_logs;

    #[tokio::test]
    async fn run_logs_startup_then_fails_on_taken_port() {
        let (captured, _guard) = capture_logs();

        let blocker = bind("0.0.0.0:0").await.unwrap();
        let port = blocker.local_addr().unwrap().port().to_string();
        let config = Config {
            port: port.clone(),
            ..Config::default()
        };

        let err = run(&config).await.unwrap_err();
        match err {
            ServerError::Bind { addr, .. } => assert_eq!(addr, format!("0.0.0.0:{port}")),
            other => panic!("expected bind error, got {other:?}"),
        }

        let logs = captured.contents();
        let starting = logs
            .lines()
            .find(|l| l.contains("server starting"))
            .unwrap_or_else(|| panic!("no startup line in: {logs}"));
        assert!(starting.contains(&format!("port={port}")));

        let has_snapshot = logs
            .lines()
            .any(|l| l.contains("environment variables") && l.contains("env="));
        assert!(has_snapshot, "no environment line in: {logs}");
    }
}
