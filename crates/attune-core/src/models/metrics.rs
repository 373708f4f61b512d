use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Qualitative summary of the risk assessment, ordered from least to most
/// concerning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Likelihood {
    HighlyUnlikely,
    Unlikely,
    Inconclusive,
    Possible,
    Likely,
}

impl Likelihood {
    /// Presentation label, as shown in the API response and report email.
    pub fn label(self) -> &'static str {
        match self {
            Likelihood::HighlyUnlikely => "Highly Unlikely",
            Likelihood::Unlikely => "Unlikely",
            Likelihood::Inconclusive => "Inconclusive",
            Likelihood::Possible => "Possible",
            Likelihood::Likely => "Likely",
        }
    }
}

/// Risk indicators derived once per submission by the scorer.
///
/// `concern_level` takes values in {1, 3..=9}: a mean of exactly 1.5 maps
/// to 1 and anything above it to 3, so 2 is never produced. Callers must
/// not assume a contiguous scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RiskMetrics {
    /// Arithmetic mean of the seven answers, in [1, 5].
    pub average_score: f64,
    /// Number of answers rated 4 or 5. Diagnostic only.
    pub high_concern_count: u8,
    /// Number of answers rated exactly 3. Diagnostic only.
    pub moderate_concern_count: u8,
    /// Severity classification in {1, 3..=9}.
    pub concern_level: u8,
    /// Inverse-scaled health indicator: `max(1, 11 - concern_level)`.
    pub health_score: u8,
    pub likelihood: Likelihood,
}
