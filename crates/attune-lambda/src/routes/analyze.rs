use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use attune_bedrock::generate::{generate_analysis, GenerationParams};
use attune_bedrock::prompt::build_prompt;
use attune_bedrock::sections::extract_sections;
use attune_core::models::report::AssessmentResult;
use attune_core::models::submission::{FollowUpAnswers, FormData};
use attune_notify::{deliver_report, ReportEmail};
use attune_scoring::{score, validate_answers};

use crate::error::ApiError;
use crate::state::AppState;

/// Top-level fields arrive as options so each missing one gets its own
/// validation message.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub order_id: Option<String>,
    pub form_data: Option<FormData>,
    pub follow_up_answers: Option<FollowUpAnswers>,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: AnalysisPayload,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPayload {
    pub qualitative_likelihood: String,
    pub concern_level: String,
    pub health_score: String,
    pub behavioral_analysis: String,
    pub context_analysis: String,
    pub recommended_actions: String,
    pub communication_strategies: String,
}

impl AnalysisPayload {
    fn from_result(result: &AssessmentResult) -> Self {
        Self {
            qualitative_likelihood: result.likelihood.label().to_string(),
            concern_level: result.concern_display(),
            health_score: result.health_display(),
            behavioral_analysis: result.behavioral_analysis.clone(),
            context_analysis: result.context_analysis.clone(),
            recommended_actions: result.recommended_actions.clone(),
            communication_strategies: result.communication_strategies.clone(),
        }
    }
}

/// Run one submission through the full pipeline: validate, score, generate
/// the narrative, extract sections, assemble, and send the best-effort
/// report email.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let order_id = request
        .order_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("missing orderId".to_string()))?;
    let form = request
        .form_data
        .ok_or_else(|| ApiError::Validation("missing formData".to_string()))?;
    let answers = request
        .follow_up_answers
        .ok_or_else(|| ApiError::Validation("missing followUpAnswers".to_string()))?;

    let range_errors = validate_answers(&answers);
    if !range_errors.is_empty() {
        let detail = range_errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ApiError::Validation(detail));
    }

    if state.model_id.trim().is_empty() {
        return Err(ApiError::Config(
            "no generation model configured".to_string(),
        ));
    }

    let metrics = score(&answers);
    info!(
        order_id = %order_id,
        average_score = metrics.average_score,
        concern_level = metrics.concern_level,
        health_score = metrics.health_score,
        "scored submission"
    );

    let prompt = build_prompt(&form, &answers, &metrics);
    let raw_reply = generate_analysis(
        &state.aws_config,
        &state.model_id,
        &prompt,
        &GenerationParams::default(),
    )
    .await?;

    let sections = extract_sections(&raw_reply);
    let result = AssessmentResult::assemble(order_id, metrics, sections);

    match &state.mailer {
        Some(mailer) => {
            let email = ReportEmail::from_result(&result, &form.user_email);
            deliver_report(mailer.as_ref(), &email).await;
        }
        None => {
            info!(order_id = %result.order_id, "mailer not configured, skipping notification");
        }
    }

    Ok(Json(AnalyzeResponse {
        success: true,
        analysis: AnalysisPayload::from_result(&result),
    }))
}
