use attune_bedrock::sections::extract_sections;

const STRUCTURED_REPLY: &str = "\
BEHAVIORAL ANALYSIS
The pattern of answers points to moderate emotional withdrawal.

It is most pronounced around technology use.

CONTEXT ANALYSIS
A new job can explain most of the schedule changes described.

RECOMMENDED ACTIONS
Keep a simple journal of specific incidents for two weeks.

COMMUNICATION STRATEGIES
Raise the topic during a calm, private moment.";

#[test]
fn full_structure_resolves_all_sections() {
    let sections = extract_sections(STRUCTURED_REPLY);

    assert!(sections
        .behavioral_analysis
        .starts_with("The pattern of answers points to moderate emotional withdrawal."));
    assert!(sections
        .behavioral_analysis
        .ends_with("It is most pronounced around technology use."));
    assert_eq!(
        sections.context_analysis,
        "A new job can explain most of the schedule changes described."
    );
    assert_eq!(
        sections.recommended_actions,
        "Keep a simple journal of specific incidents for two weeks."
    );
    assert_eq!(
        sections.communication_strategies,
        "Raise the topic during a calm, private moment."
    );
}

#[test]
fn no_cross_contamination_between_sections() {
    let sections = extract_sections(STRUCTURED_REPLY);

    assert!(!sections.behavioral_analysis.contains("new job"));
    assert!(!sections.context_analysis.contains("journal"));
    assert!(!sections.recommended_actions.contains("calm, private moment"));
    assert!(!sections.communication_strategies.contains("CONTEXT"));
}

#[test]
fn headings_match_case_insensitively_with_decoration() {
    let reply = "\
**Behavioral Analysis:**
Withdrawal is mild.

## Context Analysis
Stress at work fits the timeline.

recommended actions:
Wait and observe.

__Communication Strategies__
Ask open questions.";

    let sections = extract_sections(reply);
    assert_eq!(sections.behavioral_analysis, "Withdrawal is mild.");
    assert_eq!(sections.context_analysis, "Stress at work fits the timeline.");
    assert_eq!(sections.recommended_actions, "Wait and observe.");
    assert_eq!(sections.communication_strategies, "Ask open questions.");
}

#[test]
fn partial_structure_keeps_resolved_sections() {
    let reply = "\
BEHAVIORAL ANALYSIS
Some answers stand out.

CONTEXT ANALYSIS
Several outside factors could explain them.";

    let sections = extract_sections(reply);
    assert_eq!(sections.behavioral_analysis, "Some answers stand out.");
    assert_eq!(
        sections.context_analysis,
        "Several outside factors could explain them."
    );

    // The unresolved slots fall back to the fixed default text.
    let defaults = extract_sections("");
    assert_eq!(sections.recommended_actions, defaults.recommended_actions);
    assert_eq!(
        sections.communication_strategies,
        defaults.communication_strategies
    );
}

#[test]
fn unstructured_reply_lands_in_first_section() {
    let reply = "The model ignored the requested structure and wrote one long essay instead.";
    let sections = extract_sections(reply);

    assert_eq!(sections.behavioral_analysis, reply);

    let defaults = extract_sections("");
    assert_eq!(sections.context_analysis, defaults.context_analysis);
    assert_eq!(sections.recommended_actions, defaults.recommended_actions);
    assert_eq!(
        sections.communication_strategies,
        defaults.communication_strategies
    );
}

#[test]
fn empty_reply_yields_four_populated_slots() {
    let sections = extract_sections("");
    assert!(!sections.behavioral_analysis.is_empty());
    assert!(!sections.context_analysis.is_empty());
    assert!(!sections.recommended_actions.is_empty());
    assert!(!sections.communication_strategies.is_empty());

    // Defaults are fixed: extraction of blank input is deterministic.
    let again = extract_sections("   \n\n  ");
    assert_eq!(sections.context_analysis, again.context_analysis);
    assert_eq!(sections.recommended_actions, again.recommended_actions);
}

#[test]
fn blank_body_under_found_heading_stays_empty() {
    let reply = "\
BEHAVIORAL ANALYSIS

CONTEXT ANALYSIS
Plenty of plausible outside explanations.

RECOMMENDED ACTIONS
Observe for now.

COMMUNICATION STRATEGIES
Talk openly.";

    let sections = extract_sections(reply);
    assert_eq!(sections.behavioral_analysis, "");
    assert_eq!(
        sections.context_analysis,
        "Plenty of plausible outside explanations."
    );
}

#[test]
fn cleanup_strips_emphasis_and_list_markers() {
    let reply = "\
BEHAVIORAL ANALYSIS
**hello**

CONTEXT ANALYSIS
- item

RECOMMENDED ACTIONS
1. first
2) second

COMMUNICATION STRATEGIES
### Keep it simple
\u{2022} listen first";

    let sections = extract_sections(reply);
    assert_eq!(sections.behavioral_analysis, "hello");
    assert_eq!(sections.context_analysis, "item");
    assert_eq!(sections.recommended_actions, "first\nsecond");
    assert_eq!(
        sections.communication_strategies,
        "Keep it simple\nlisten first"
    );
}

#[test]
fn paragraph_breaks_survive_cleanup() {
    let reply = "\
BEHAVIORAL ANALYSIS
First paragraph.

Second paragraph.

CONTEXT ANALYSIS
Only one here.

RECOMMENDED ACTIONS
Observe.

COMMUNICATION STRATEGIES
Listen.";

    let sections = extract_sections(reply);
    assert_eq!(
        sections.behavioral_analysis,
        "First paragraph.\n\nSecond paragraph."
    );
}
