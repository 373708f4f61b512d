//! Prompt assembly for narrative generation.
//!
//! Deterministic string building: the intake context verbatim, the seven
//! labeled answers, the derived metrics, and an instruction block naming
//! the four required section headings. The heading strings come from
//! `sections::Section` so the extractor searches for exactly what the
//! model was told to emit.

use attune_core::models::metrics::RiskMetrics;
use attune_core::models::submission::{FollowUpAnswers, FormData};
use attune_scoring::labeled_answers;

use crate::sections::Section;

/// Assemble the generation prompt for one submission.
pub fn build_prompt(form: &FormData, answers: &FollowUpAnswers, metrics: &RiskMetrics) -> String {
    let mut prompt = String::new();

    prompt.push_str("RELATIONSHIP CONTEXT:\n");
    prompt.push_str(&format!("- Your age: {}\n", form.user_age));
    prompt.push_str(&format!("- Partner's age: {}\n", form.partner_age));
    prompt.push_str(&format!(
        "- Relationship duration: {}\n",
        form.relationship_duration
    ));
    prompt.push_str(&format!("- Stated concerns: {}\n", form.concerns));

    prompt.push_str(
        "\nBEHAVIORAL ASSESSMENT (each area rated 1 = no change, 5 = significant change):\n",
    );
    for (dimension, value) in labeled_answers(answers) {
        prompt.push_str(&format!("- {}: {}/5\n", dimension.label, value));
    }

    prompt.push_str("\nDERIVED INDICATORS:\n");
    prompt.push_str(&format!("- Average score: {:.2}\n", metrics.average_score));
    prompt.push_str(&format!("- Concern level: {}/10\n", metrics.concern_level));
    prompt.push_str(&format!(
        "- Relationship health score: {}/10\n",
        metrics.health_score
    ));
    prompt.push_str(&format!(
        "- Assessed likelihood: {}\n",
        metrics.likelihood.label()
    ));
    prompt.push_str(&format!(
        "- Areas of high concern: {}\n",
        metrics.high_concern_count
    ));
    prompt.push_str(&format!(
        "- Areas of moderate concern: {}\n",
        metrics.moderate_concern_count
    ));

    prompt.push_str(
        "\nWrite your assessment in exactly four sections, using these headings \
         verbatim, each on its own line:\n\n",
    );
    for section in Section::ALL {
        prompt.push_str(section.heading());
        prompt.push('\n');
    }
    prompt.push_str(
        "\nWrite plain paragraphs only. Do not use markdown, bullet points, \
         numbered lists, bold, or any other formatting. Do not accuse; \
         acknowledge multiple possible explanations for each behavior.\n",
    );

    prompt
}
