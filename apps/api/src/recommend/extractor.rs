//! Turns raw model text into suggestion lines.
//!
//! Total over any input: model output has no guaranteed format, so lines that
//! do not look like `- [label](locator): description` are dropped, never rejected.

use serde::Serialize;

/// Marker a trimmed line must start with: a bullet followed by a link label.
const SUGGESTION_PREFIX: &str = "- [";

/// One recommended resource, kept verbatim as the trimmed line from the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Suggestion(String);

/// Outcome of extraction. `Empty` is a normal result meaning the model
/// answered but nothing usable was in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Found(Vec<Suggestion>),
    Empty,
}

impl Extraction {
    pub fn into_suggestions(self) -> Vec<Suggestion> {
        match self {
            Extraction::Found(suggestions) => suggestions,
            Extraction::Empty => Vec::new(),
        }
    }
}

/// Lazily yields suggestion lines in the order they appear in `raw`.
pub fn suggestion_lines(raw: &str) -> impl Iterator<Item = Suggestion> + '_ {
    raw.lines()
        .map(str::trim)
        .filter(|line| line.starts_with(SUGGESTION_PREFIX))
        .map(|line| Suggestion(line.to_string()))
}

pub fn extract(raw: &str) -> Extraction {
    let suggestions: Vec<Suggestion> = suggestion_lines(raw).collect();
    if suggestions.is_empty() {
        Extraction::Empty
    } else {
        Extraction::Found(suggestions)
    }
}
