use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::dimensions::AnswerRange;

/// A follow-up answer that falls outside the allowed rating range.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub dimension_id: String,
    pub value: u8,
    pub expected_range: AnswerRange,
    pub message: String,
}
