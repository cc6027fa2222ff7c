use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitals_core::{HttpBackend, UiConfig};

mod handlers;

/// Main entry point for the vitals console
///
/// Serves the dashboard and entry views as HTML fragments and forwards data requests to the
/// clinical backend.
///
/// # Environment Variables
/// - `VITALS_ADDR`: listen address (default: "0.0.0.0:3000")
/// - `VITALS_BACKEND_URL`: clinical backend base URL (default: "http://127.0.0.1:5000")
/// - `VITALS_NOTIFICATION_MS`: banner lifetime in milliseconds (default: 5000)
/// - `VITALS_RELOAD_SECS`: dashboard refresh interval in seconds (default: 300)
/// - `VITALS_REQUEST_TIMEOUT_SECS`: backend request timeout in seconds (default: 10)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - a `VITALS_*` variable holds an invalid value,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vitals_run=info".parse()?)
                .add_directive("vitals_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("VITALS_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let cfg = UiConfig::from_env_values(
        std::env::var("VITALS_BACKEND_URL").ok(),
        std::env::var("VITALS_NOTIFICATION_MS").ok(),
        std::env::var("VITALS_RELOAD_SECS").ok(),
        std::env::var("VITALS_REQUEST_TIMEOUT_SECS").ok(),
    )?;

    tracing::info!("++ Starting vitals console on {}", addr);
    tracing::info!("++ Clinical backend at {}", cfg.backend_url());

    let backend = HttpBackend::new(cfg.clone())?;
    let app = handlers::router(handlers::AppState::new(cfg, backend));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
