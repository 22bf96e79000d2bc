//! Annotation types consumed by the overlay renderer

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A proofreading annotation over a plain text document
///
/// `start` and `end` are code point offsets forming the half-open range
/// `[start, end)`. They are signed because annotations come from a separate
/// pipeline and a storage round-trip; out-of-range values are dropped by the
/// renderer rather than rejected here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Classification label (grammar, style, ...)
    #[serde(default)]
    pub category: String,
    /// Start offset in code points
    pub start: i64,
    /// End offset in code points (exclusive)
    pub end: i64,
    /// Suggested replacements
    #[serde(default)]
    pub suggestions: Suggestions,
    /// Explanatory message
    #[serde(default)]
    pub message: String,
}

/// Suggested replacements, either decoded or as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Suggestions {
    /// Already decoded list
    List(Vec<String>),
    /// Raw stored field, expected to hold a JSON array of strings
    Raw(String),
}

impl Default for Suggestions {
    fn default() -> Self {
        Suggestions::List(Vec::new())
    }
}

impl Suggestions {
    /// Resolve to the list of suggestion texts
    pub fn decode(&self) -> Vec<String> {
        match self {
            Suggestions::List(list) => list.clone(),
            Suggestions::Raw(raw) => decode_suggestions(raw),
        }
    }
}

/// Decode a stored suggestion field
///
/// A JSON array of strings is decoded as-is and JSON `null` is the empty
/// list. Anything else that fails to decode is treated as one suggestion
/// holding the raw value.
pub fn decode_suggestions(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Option<Vec<String>>>(raw) {
        Ok(list) => list.unwrap_or_default(),
        Err(_) => vec![raw.to_string()],
    }
}

impl Annotation {
    /// Create an annotation over `[start, end)` with no metadata
    pub fn new(start: i64, end: i64) -> Self {
        Self {
            start,
            end,
            ..Self::default()
        }
    }

    /// Set the category
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    /// Set the message
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = message.to_string();
        self
    }

    /// Set decoded suggestions
    pub fn with_suggestions<I, S>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions = Suggestions::List(suggestions.into_iter().map(Into::into).collect());
        self
    }

    /// Set the suggestions from a raw stored field
    pub fn with_raw_suggestions(mut self, raw: &str) -> Self {
        self.suggestions = Suggestions::Raw(raw.to_string());
        self
    }

    /// The span as a code point range, if it is valid for a document of
    /// `len` code points
    pub fn char_range(&self, len: usize) -> Option<Range<usize>> {
        let start = usize::try_from(self.start).ok()?;
        let end = usize::try_from(self.end).ok()?;
        (start < end && end <= len).then_some(start..end)
    }
}
