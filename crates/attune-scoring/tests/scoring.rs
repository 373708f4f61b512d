use attune_core::models::metrics::Likelihood;
use attune_core::models::submission::FollowUpAnswers;
use attune_scoring::scorer::{concern_level_for, likelihood_for, score};
use attune_scoring::{validate_answers, DIMENSIONS};

fn answers(values: [u8; 7]) -> FollowUpAnswers {
    FollowUpAnswers {
        emotional_distance: values[0],
        technology_privacy: values[1],
        schedule_changes: values[2],
        appearance_changes: values[3],
        intimacy_changes: values[4],
        defensiveness: values[5],
        interest_in_you: values[6],
    }
}

#[test]
fn concern_ladder_boundaries() {
    assert_eq!(concern_level_for(1.0), 1);
    assert_eq!(concern_level_for(1.5), 1);
    assert_eq!(concern_level_for(1.51), 3);
    assert_eq!(concern_level_for(2.0), 3);
    assert_eq!(concern_level_for(2.5), 4);
    assert_eq!(concern_level_for(3.0), 5);
    assert_eq!(concern_level_for(3.5), 6);
    assert_eq!(concern_level_for(4.0), 7);
    assert_eq!(concern_level_for(4.5), 8);
    assert_eq!(concern_level_for(4.51), 9);
    assert_eq!(concern_level_for(5.0), 9);
}

/// A mean of exactly 1.5 yields level 1 and anything above yields 3, so
/// level 2 can never be produced.
#[test]
fn concern_level_two_is_unreachable() {
    for total in 7..=35u32 {
        let average = f64::from(total) / 7.0;
        assert_ne!(
            concern_level_for(average),
            2,
            "level 2 produced for average {average}"
        );
    }
}

#[test]
fn likelihood_ladder_boundaries() {
    assert_eq!(likelihood_for(1.0), Likelihood::HighlyUnlikely);
    assert_eq!(likelihood_for(2.0), Likelihood::HighlyUnlikely);
    assert_eq!(likelihood_for(2.1), Likelihood::Unlikely);
    assert_eq!(likelihood_for(2.8), Likelihood::Unlikely);
    assert_eq!(likelihood_for(3.5), Likelihood::Inconclusive);
    assert_eq!(likelihood_for(4.2), Likelihood::Possible);
    assert_eq!(likelihood_for(4.3), Likelihood::Likely);
    assert_eq!(likelihood_for(5.0), Likelihood::Likely);
}

/// `health_score = max(1, 11 - concern_level)` must hold for every
/// reachable input.
#[test]
fn health_score_is_inverse_of_concern() {
    for low in 1..=5u8 {
        for high in 1..=5u8 {
            let metrics = score(&answers([low, high, low, high, low, high, low]));
            assert_eq!(
                metrics.health_score,
                (11 - metrics.concern_level).max(1),
                "failed for answers [{low}, {high}, ...]"
            );
        }
    }
}

/// Raising any single answer never decreases the concern level.
#[test]
fn concern_level_is_monotonic() {
    let bases = [
        [1, 1, 1, 1, 1, 1, 1],
        [2, 2, 1, 1, 1, 2, 2],
        [3, 3, 3, 3, 3, 3, 3],
        [2, 4, 3, 1, 5, 2, 3],
        [4, 4, 4, 4, 4, 4, 4],
    ];
    for base in bases {
        let before = score(&answers(base)).concern_level;
        for i in 0..7 {
            if base[i] == 5 {
                continue;
            }
            let mut raised = base;
            raised[i] += 1;
            let after = score(&answers(raised)).concern_level;
            assert!(
                after >= before,
                "raising answer {i} of {base:?} dropped concern {before} -> {after}"
            );
        }
    }
}

#[test]
fn low_change_submission() {
    let metrics = score(&answers([2, 2, 1, 1, 1, 2, 2]));
    assert!((metrics.average_score - 11.0 / 7.0).abs() < 1e-12);
    assert_eq!(metrics.concern_level, 3);
    assert_eq!(metrics.health_score, 8);
    assert_eq!(metrics.likelihood, Likelihood::HighlyUnlikely);
    assert_eq!(metrics.high_concern_count, 0);
    assert_eq!(metrics.moderate_concern_count, 0);
}

#[test]
fn maximum_change_submission() {
    let metrics = score(&answers([5, 5, 5, 5, 5, 5, 5]));
    assert_eq!(metrics.average_score, 5.0);
    assert_eq!(metrics.concern_level, 9);
    assert_eq!(metrics.health_score, 2);
    assert_eq!(metrics.likelihood, Likelihood::Likely);
    assert_eq!(metrics.high_concern_count, 7);
    assert_eq!(metrics.moderate_concern_count, 0);
}

#[test]
fn concern_counts() {
    let metrics = score(&answers([4, 5, 3, 3, 1, 2, 4]));
    assert_eq!(metrics.high_concern_count, 3);
    assert_eq!(metrics.moderate_concern_count, 2);
}

#[test]
fn in_range_answers_pass_validation() {
    assert!(validate_answers(&answers([1, 2, 3, 4, 5, 1, 5])).is_empty());
}

#[test]
fn out_of_range_answers_are_reported() {
    let errors = validate_answers(&answers([0, 3, 3, 6, 3, 3, 3]));
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].dimension_id, "emotional_distance");
    assert_eq!(errors[0].value, 0);
    assert_eq!(errors[1].dimension_id, "appearance_changes");
    assert_eq!(errors[1].value, 6);
    assert!(errors[0].message.contains("outside range [1, 5]"));
}

#[test]
fn dimensions_match_answer_order() {
    let set = answers([1, 2, 3, 4, 5, 1, 2]);
    let labeled = attune_scoring::labeled_answers(&set);
    assert_eq!(labeled.len(), DIMENSIONS.len());
    assert_eq!(labeled[0].0.id, "emotional_distance");
    assert_eq!(labeled[0].1, 1);
    assert_eq!(labeled[6].0.id, "interest_in_you");
    assert_eq!(labeled[6].1, 2);
}
