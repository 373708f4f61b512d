use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A complete questionnaire submission. Immutable once received; one per
/// request, discarded after the response is emitted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentSubmission {
    /// Opaque order identifier, passed through unchanged.
    pub order_id: String,
    pub form_data: FormData,
    pub follow_up_answers: FollowUpAnswers,
}

/// Demographic and free-text context from the intake form. Fields are
/// embedded verbatim into the generation prompt, so everything stays a
/// string exactly as the frontend sent it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FormData {
    pub user_age: String,
    pub partner_age: String,
    pub relationship_duration: String,
    /// Free-text description of what prompted the assessment.
    pub concerns: String,
    pub user_email: String,
}

/// The seven follow-up ratings, each 1 (no change) to 5 (significant change).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FollowUpAnswers {
    pub emotional_distance: u8,
    pub technology_privacy: u8,
    pub schedule_changes: u8,
    pub appearance_changes: u8,
    pub intimacy_changes: u8,
    pub defensiveness: u8,
    pub interest_in_you: u8,
}

impl FollowUpAnswers {
    /// Answer values in canonical dimension order. Must stay in sync with
    /// `attune_scoring::dimensions::DIMENSIONS`.
    pub fn values(&self) -> [u8; 7] {
        [
            self.emotional_distance,
            self.technology_privacy,
            self.schedule_changes,
            self.appearance_changes,
            self.intimacy_changes,
            self.defensiveness,
            self.interest_in_you,
        ]
    }
}
