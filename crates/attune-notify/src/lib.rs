//! attune-notify
//!
//! Best-effort report delivery by email. Rendering uses Tera; transport is
//! async SMTP via lettre. Delivery failure is an outcome the caller logs,
//! never an error that propagates into the request pipeline.

pub mod error;
pub mod mailer;
pub mod render;

use std::future::Future;

use serde::Serialize;
use tracing::{info, warn};

use attune_core::models::report::AssessmentResult;

use crate::error::NotifyError;

/// Everything the report email needs: the four section texts, the two
/// presentation scores, and the likelihood label.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEmail {
    pub to: String,
    pub order_id: String,
    pub concern_level: u8,
    pub health_score: u8,
    pub likelihood: String,
    pub behavioral_analysis: String,
    pub context_analysis: String,
    pub recommended_actions: String,
    pub communication_strategies: String,
}

impl ReportEmail {
    pub fn from_result(result: &AssessmentResult, to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            order_id: result.order_id.clone(),
            concern_level: result.concern_level,
            health_score: result.health_score,
            likelihood: result.likelihood.label().to_string(),
            behavioral_analysis: result.behavioral_analysis.clone(),
            context_analysis: result.context_analysis.clone(),
            recommended_actions: result.recommended_actions.clone(),
            communication_strategies: result.communication_strategies.clone(),
        }
    }
}

/// A notification sink for finished reports.
pub trait Notify {
    fn notify(&self, email: &ReportEmail) -> impl Future<Output = Result<(), NotifyError>> + Send;
}

/// Attempt delivery and report whether it succeeded.
///
/// The failure path is logged and swallowed here; callers never see a
/// delivery error, only the boolean outcome.
pub async fn deliver_report<N: Notify>(notifier: &N, email: &ReportEmail) -> bool {
    match notifier.notify(email).await {
        Ok(()) => {
            info!(order_id = %email.order_id, "report notification sent");
            true
        }
        Err(e) => {
            warn!(order_id = %email.order_id, error = %e, "report notification failed");
            false
        }
    }
}
