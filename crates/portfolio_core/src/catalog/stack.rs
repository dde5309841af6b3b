//! Technology stack ranking and filter labels.
//!
//! # Responsibility
//! - Count technology tokens across a project set.
//! - Provide the fixed label list offered as filter buttons.
//!
//! # Invariants
//! - Tokens contain only ASCII letters and digits and never read as a
//!   numeric literal (`17`, `1e5`, `0x1F`, `Infinity`).
//! - Counts are sorted descending; ties keep first-seen order.
//! - Filter labels come from `STACK_INCLUDE_WORDS`, not from the ranking.

use crate::model::project::Project;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static NON_ALPHANUMERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]").expect("valid token regex"));
// Alphanumeric strings a JavaScript `Number()` conversion accepts: decimal,
// exponent, hex/octal/binary literals and `Infinity`.
static NUMERIC_LITERAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[0-9]+(?:[eE][0-9]+)?|0[xX][0-9a-fA-F]+|0[oO][0-7]+|0[bB][01]+|Infinity)$")
        .expect("valid numeric literal regex")
});

/// Label that resets the category filter.
pub const ALL_LABEL: &str = "All";

/// Hand-maintained filter labels, `All` first.
pub const STACK_INCLUDE_WORDS: &[&str] = &[
    ALL_LABEL,
    "Java",
    "PostgreSQL",
    "Spring",
    "TypeScript",
    "Cosmos SDK",
    "GoLang",
    "Telegram",
    "Swagger",
    "JavaScript",
    "SQL",
    "Reactor",
    "GraphQL",
    "React",
    "Redis",
    "MySQL",
    "Kafka",
    "Solidity",
    "WebSocket",
    "ML",
    "RxJava",
    "GRPC",
    "AWS",
    "Python",
    "Angular",
    "Kotlin",
    "WebFlux",
    "Kubernetes",
    "ClickHouse",
    "InfluxDB",
    "Stellar",
    "3D",
    "Blockchain",
    "MongoDb",
    "ThreeJS",
];

/// Occurrence count of one technology token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackCount {
    pub name: String,
    pub count: usize,
}

/// Returns the filter labels as owned strings.
pub fn stack_include_words() -> Vec<String> {
    STACK_INCLUDE_WORDS
        .iter()
        .map(|label| label.to_string())
        .collect()
}

/// Counts cleaned technology tokens across `projects`.
///
/// Each technology string is split on whitespace, every token loses its
/// non-alphanumeric characters, and empty or numeric-literal results are
/// skipped.
pub fn count_stack_tokens(projects: &[Project]) -> Vec<StackCount> {
    let mut counts: Vec<StackCount> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    let tokens = projects
        .iter()
        .flat_map(|project| project.technologies())
        .flat_map(|technology| technology.split_whitespace())
        .filter_map(clean_token);

    for token in tokens {
        match positions.get(&token) {
            Some(&position) => counts[position].count += 1,
            None => {
                positions.insert(token.clone(), counts.len());
                counts.push(StackCount {
                    name: token,
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by(|left, right| right.count.cmp(&left.count));
    counts
}

/// Ranks stack tokens by frequency.
///
/// Not used for filter labels. The trailing filter is positional: it keeps
/// ranked entries after the first two, whatever their counts. Whether a count
/// threshold was intended is unresolved, so the positional behavior stays.
pub fn rank_stack(projects: &[Project]) -> Vec<String> {
    count_stack_tokens(projects)
        .into_iter()
        .enumerate()
        .filter(|(position, _)| *position > 1)
        .map(|(_, entry)| entry.name)
        .collect()
}

fn clean_token(raw: &str) -> Option<String> {
    let cleaned = NON_ALPHANUMERIC_RE.replace_all(raw, "");
    if cleaned.is_empty() || NUMERIC_LITERAL_RE.is_match(&cleaned) {
        return None;
    }
    Some(cleaned.into_owned())
}
