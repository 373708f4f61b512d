use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::metrics::{Likelihood, RiskMetrics};

/// The four named sections of a narrative report.
///
/// Invariant: every slot holds cleaned text or static fallback text. A slot
/// whose header was found in the model output but whose body was blank holds
/// the empty string.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NarrativeSections {
    pub behavioral_analysis: String,
    pub context_analysis: String,
    pub recommended_actions: String,
    pub communication_strategies: String,
}

/// The final per-request result: derived metrics and narrative sections
/// merged into one flat record.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentResult {
    pub order_id: String,
    pub average_score: f64,
    pub high_concern_count: u8,
    pub moderate_concern_count: u8,
    pub concern_level: u8,
    pub health_score: u8,
    pub likelihood: Likelihood,
    pub behavioral_analysis: String,
    pub context_analysis: String,
    pub recommended_actions: String,
    pub communication_strategies: String,
}

impl AssessmentResult {
    /// Merge the scorer's metrics and the extractor's sections. Pure field
    /// reshuffling, no logic.
    pub fn assemble(
        order_id: impl Into<String>,
        metrics: RiskMetrics,
        sections: NarrativeSections,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            average_score: metrics.average_score,
            high_concern_count: metrics.high_concern_count,
            moderate_concern_count: metrics.moderate_concern_count,
            concern_level: metrics.concern_level,
            health_score: metrics.health_score,
            likelihood: metrics.likelihood,
            behavioral_analysis: sections.behavioral_analysis,
            context_analysis: sections.context_analysis,
            recommended_actions: sections.recommended_actions,
            communication_strategies: sections.communication_strategies,
        }
    }

    /// Concern level formatted for presentation, e.g. `"5/10"`.
    pub fn concern_display(&self) -> String {
        format!("{}/10", self.concern_level)
    }

    /// Health score formatted for presentation, e.g. `"8/10"`.
    pub fn health_display(&self) -> String {
        format!("{}/10", self.health_score)
    }
}
