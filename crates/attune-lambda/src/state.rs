use std::sync::Arc;

use attune_notify::mailer::SmtpMailer;

/// Shared application state, injected into route handlers via Axum state.
///
/// Configuration is resolved once in `main`; the pipeline never reads the
/// process environment.
#[derive(Clone)]
pub struct AppState {
    pub aws_config: aws_config::SdkConfig,
    /// Bedrock inference profile ID. Blank when unconfigured; the analyze
    /// route surfaces that as a configuration error.
    pub model_id: String,
    /// Absent when SMTP settings are missing; notifications are skipped.
    pub mailer: Option<Arc<SmtpMailer>>,
}
