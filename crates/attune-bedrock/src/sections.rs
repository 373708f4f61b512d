//! Layered extraction of the model's free-text reply into report sections.
//!
//! The prompt instructs the model to emit four canonical headings. This
//! module locates those headings with an explicit tokenizer and slices the
//! text between them into section bodies. When the structure is missing or
//! partial, extraction degrades through a fallback ladder instead of
//! failing: resolved headings keep their bodies, a fully unstructured reply
//! lands in the first section, and anything still unresolved receives
//! static fallback text. `extract_sections` never returns an error.

use attune_core::models::report::NarrativeSections;

/// The four report sections, in required document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    BehavioralAnalysis,
    ContextAnalysis,
    RecommendedActions,
    CommunicationStrategies,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::BehavioralAnalysis,
        Section::ContextAnalysis,
        Section::RecommendedActions,
        Section::CommunicationStrategies,
    ];

    /// Canonical heading string. The prompt builder embeds these verbatim
    /// and the tokenizer searches for them; both sides must use this one
    /// constant set.
    pub fn heading(self) -> &'static str {
        match self {
            Section::BehavioralAnalysis => "BEHAVIORAL ANALYSIS",
            Section::ContextAnalysis => "CONTEXT ANALYSIS",
            Section::RecommendedActions => "RECOMMENDED ACTIONS",
            Section::CommunicationStrategies => "COMMUNICATION STRATEGIES",
        }
    }

    fn index(self) -> usize {
        match self {
            Section::BehavioralAnalysis => 0,
            Section::ContextAnalysis => 1,
            Section::RecommendedActions => 2,
            Section::CommunicationStrategies => 3,
        }
    }

    /// Static fallback text used when a section cannot be recovered from
    /// the reply.
    fn default_text(self) -> &'static str {
        match self {
            Section::BehavioralAnalysis => {
                "A detailed behavioral analysis could not be prepared for this \
                 submission. The score summary reflects the questionnaire \
                 answers on their own, and the general guidance below still \
                 applies."
            }
            Section::ContextAnalysis => {
                "Changes in behavior can come from many places: stress at \
                 work, health worries, family pressure, or private struggles \
                 that have nothing to do with the relationship. No single \
                 pattern proves anything on its own, so it is worth holding \
                 several explanations in mind at once."
            }
            Section::RecommendedActions => {
                "Avoid drawing conclusions from these results alone. Take \
                 note of the specific situations that concern you, look after \
                 your own wellbeing, and consider talking with a counselor \
                 before acting on suspicion."
            }
            Section::CommunicationStrategies => {
                "An open, honest conversation is usually the best next step. \
                 Choose a calm moment, describe what you have noticed without \
                 blame, and give your partner room to share their side."
            }
        }
    }
}

/// A heading located in the raw reply: which section it opens and the byte
/// range of the heading text itself.
struct HeadingSpan {
    section: Section,
    start: usize,
    end: usize,
}

/// Parse the model's reply into the four report sections.
///
/// Fallback ladder, first successful layer wins per section:
/// 1. headings located in document order slice the text into bodies;
/// 2. partially located headings keep whatever resolved;
/// 3. a reply with no recoverable structure goes wholesale into the first
///    section; every still-unresolved slot gets its static fallback text.
///
/// A heading found with a blank body yields the empty string for that slot.
/// A heading quoted inside another section's body can truncate that section
/// early; this is a known limitation of the positional split.
pub fn extract_sections(raw: &str) -> NarrativeSections {
    let headings = locate_headings(raw);

    let mut resolved: [Option<String>; 4] = [None, None, None, None];
    for (i, span) in headings.iter().enumerate() {
        let body_end = headings.get(i + 1).map_or(raw.len(), |next| next.start);
        // Skip punctuation trailing the heading itself (":", "**", "#").
        let body = raw[span.end..body_end]
            .trim_start_matches(|c: char| c == ':' || c == '*' || c == '#' || c.is_whitespace());
        resolved[span.section.index()] = Some(clean_section(body));
    }

    if headings.is_empty() && !raw.trim().is_empty() {
        resolved[Section::BehavioralAnalysis.index()] = Some(clean_section(raw));
    }

    let mut slot = |section: Section| {
        resolved[section.index()]
            .take()
            .unwrap_or_else(|| section.default_text().to_string())
    };

    NarrativeSections {
        behavioral_analysis: slot(Section::BehavioralAnalysis),
        context_analysis: slot(Section::ContextAnalysis),
        recommended_actions: slot(Section::RecommendedActions),
        communication_strategies: slot(Section::CommunicationStrategies),
    }
}

/// Locate the canonical headings sequentially in document order.
///
/// Each heading is searched for after the previous match, case-insensitively.
/// A heading that appears out of order (or not at all) is simply absent from
/// the result; the fallback ladder handles the gap.
fn locate_headings(raw: &str) -> Vec<HeadingSpan> {
    let mut spans = Vec::new();
    let mut cursor = 0;
    for section in Section::ALL {
        let heading = section.heading();
        if let Some(start) = find_ignore_ascii_case(raw, heading, cursor) {
            let end = start + heading.len();
            spans.push(HeadingSpan {
                section,
                start,
                end,
            });
            cursor = end;
        }
    }
    spans
}

/// Byte-wise case-insensitive substring search starting at `from`.
///
/// The needles are pure ASCII, so a match always starts and ends on a char
/// boundary of the haystack.
fn find_ignore_ascii_case(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() || haystack.len() < from + needle.len() {
        return None;
    }
    (from..=haystack.len() - needle.len())
        .find(|&i| haystack[i..i + needle.len()].eq_ignore_ascii_case(needle))
}

/// Normalize a section body: drop emphasis marker runs, strip list markers
/// at line starts, and trim surrounding whitespace.
fn clean_section(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    for raw_line in text.lines() {
        let mut line = raw_line.replace("**", "").replace("__", "");
        line.retain(|c| c != '*');
        cleaned.push_str(strip_list_marker(line.trim()));
        cleaned.push('\n');
    }
    cleaned.trim().to_string()
}

/// Strip one leading list or heading marker from a line, if present.
fn strip_list_marker(line: &str) -> &str {
    for bullet in ["- ", "\u{2022} ", "\u{2013} "] {
        if let Some(rest) = line.strip_prefix(bullet) {
            return rest.trim_start();
        }
    }

    let without_hashes = line.trim_start_matches('#');
    if without_hashes.len() != line.len() {
        return without_hashes.trim_start();
    }

    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(body) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
            return body.trim_start();
        }
    }

    line
}
