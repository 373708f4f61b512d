use serde::{Deserialize, Serialize};
use ts_rs::TS;

use attune_core::models::submission::FollowUpAnswers;

use crate::error::ValidationError;

/// The valid range for a follow-up answer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerRange {
    pub min: u8,
    pub max: u8,
}

impl AnswerRange {
    pub fn contains(self, value: u8) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Every answer is a 1–5 rating.
pub const ANSWER_RANGE: AnswerRange = AnswerRange { min: 1, max: 5 };

/// A behavioral dimension measured by one follow-up question.
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[ts(export)]
pub struct Dimension {
    pub id: &'static str,
    pub label: &'static str,
}

/// The seven measured dimensions, in canonical order. Must stay in sync
/// with `FollowUpAnswers::values`.
pub const DIMENSIONS: [Dimension; 7] = [
    Dimension {
        id: "emotional_distance",
        label: "Emotional Distance",
    },
    Dimension {
        id: "technology_privacy",
        label: "Technology and Privacy Changes",
    },
    Dimension {
        id: "schedule_changes",
        label: "Schedule Changes",
    },
    Dimension {
        id: "appearance_changes",
        label: "Appearance and Spending Changes",
    },
    Dimension {
        id: "intimacy_changes",
        label: "Intimacy Changes",
    },
    Dimension {
        id: "defensiveness",
        label: "Defensiveness",
    },
    Dimension {
        id: "interest_in_you",
        label: "Interest in You",
    },
];

/// Pair each answer with its dimension, in canonical order.
pub fn labeled_answers(answers: &FollowUpAnswers) -> [(Dimension, u8); 7] {
    let values = answers.values();
    std::array::from_fn(|i| (DIMENSIONS[i], values[i]))
}

/// Validate a set of answers against the rating range.
pub fn validate_answers(answers: &FollowUpAnswers) -> Vec<ValidationError> {
    labeled_answers(answers)
        .into_iter()
        .filter(|(_, value)| !ANSWER_RANGE.contains(*value))
        .map(|(dimension, value)| ValidationError {
            dimension_id: dimension.id.to_string(),
            value,
            expected_range: ANSWER_RANGE,
            message: format!(
                "{}: score {} is outside range [{}, {}]",
                dimension.label, value, ANSWER_RANGE.min, ANSWER_RANGE.max,
            ),
        })
        .collect()
}
