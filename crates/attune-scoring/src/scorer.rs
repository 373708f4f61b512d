//! Deterministic derivation of risk metrics from follow-up answers.
//!
//! Pure and total over valid inputs. Range validation is the caller's job
//! (`dimensions::validate_answers`); the scorer assumes answers in [1, 5].

use attune_core::models::metrics::{Likelihood, RiskMetrics};
use attune_core::models::submission::FollowUpAnswers;

/// Derive the full metric set from a set of answers.
pub fn score(answers: &FollowUpAnswers) -> RiskMetrics {
    let values = answers.values();

    let total: u32 = values.iter().map(|&v| u32::from(v)).sum();
    let average_score = f64::from(total) / values.len() as f64;

    let high_concern_count = values.iter().filter(|&&v| v >= 4).count() as u8;
    let moderate_concern_count = values.iter().filter(|&&v| v == 3).count() as u8;

    let concern_level = concern_level_for(average_score);

    RiskMetrics {
        average_score,
        high_concern_count,
        moderate_concern_count,
        concern_level,
        health_score: (11 - concern_level).max(1),
        likelihood: likelihood_for(average_score),
    }
}

/// Map a mean answer score to a concern level.
///
/// Ordered threshold ladder, first match wins. A mean of exactly 1.5 maps
/// to 1 and anything above maps to 3, so level 2 is unreachable.
pub fn concern_level_for(average_score: f64) -> u8 {
    if average_score <= 1.5 {
        1
    } else if average_score <= 2.0 {
        3
    } else if average_score <= 2.5 {
        4
    } else if average_score <= 3.0 {
        5
    } else if average_score <= 3.5 {
        6
    } else if average_score <= 4.0 {
        7
    } else if average_score <= 4.5 {
        8
    } else {
        9
    }
}

/// Map a mean answer score to a qualitative likelihood.
///
/// Independently tuned ladder; its thresholds do not line up with the
/// concern ladder.
pub fn likelihood_for(average_score: f64) -> Likelihood {
    if average_score <= 2.0 {
        Likelihood::HighlyUnlikely
    } else if average_score <= 2.8 {
        Likelihood::Unlikely
    } else if average_score <= 3.5 {
        Likelihood::Inconclusive
    } else if average_score <= 4.2 {
        Likelihood::Possible
    } else {
        Likelihood::Likely
    }
}
