use std::env;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod routes;
mod state;

use attune_notify::mailer::{SmtpConfig, SmtpMailer};
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let model_id = env::var("ATTUNE_MODEL_ID").unwrap_or_default();
    if model_id.trim().is_empty() {
        tracing::warn!("ATTUNE_MODEL_ID is not set; analysis requests will fail");
    }

    let aws_config = attune_bedrock::client::build_config().await;

    let mailer = match smtp_config_from_env() {
        Some(config) => match SmtpMailer::new(&config) {
            Ok(mailer) => Some(Arc::new(mailer)),
            Err(e) => {
                tracing::warn!(error = %e, "mailer setup failed, notifications disabled");
                None
            }
        },
        None => {
            tracing::info!("SMTP settings absent, notifications disabled");
            None
        }
    };

    let state = AppState {
        aws_config,
        model_id,
        mailer,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/analyze", post(routes::analyze::analyze))
        .layer(cors)
        .with_state(state);

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}

/// Notification delivery is best-effort: any missing SMTP setting disables
/// the mailer instead of failing startup.
fn smtp_config_from_env() -> Option<SmtpConfig> {
    let host = env::var("ATTUNE_SMTP_HOST").ok()?;
    let username = env::var("ATTUNE_SMTP_USERNAME").ok()?;
    let password = env::var("ATTUNE_SMTP_PASSWORD").ok()?;
    let from = env::var("ATTUNE_MAIL_FROM").ok()?;
    let port = env::var("ATTUNE_SMTP_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(587);

    Some(SmtpConfig {
        host,
        port,
        username,
        password,
        from,
    })
}
