//! Naming scheme and escaping options for the overlay renderer

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// How untrusted text is escaped around injected markup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscapeStrategy {
    /// Escape only document and tooltip text; emit markup verbatim
    #[default]
    Segmented,
    /// Escape everything, then turn the escaped structural tags back into
    /// literal tags. Any document or tooltip text (suggestions, message,
    /// label) equal to a structural tag is restored too and becomes live
    /// markup.
    Restore,
}

impl FromStr for EscapeStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "segmented" => Ok(EscapeStrategy::Segmented),
            "restore" => Ok(EscapeStrategy::Restore),
            other => Err(format!("unknown escape strategy: {}", other)),
        }
    }
}

impl fmt::Display for EscapeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EscapeStrategy::Segmented => write!(f, "segmented"),
            EscapeStrategy::Restore => write!(f, "restore"),
        }
    }
}

/// CSS class names used by the injected markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    pub highlight: String,
    pub tooltip: String,
    pub tooltip_content: String,
    pub tooltip_message: String,
    pub tooltip_suggestion: String,
}

impl ClassNames {
    /// Class names with an optional prefix (`pr` gives `pr-highlight`)
    pub fn with_prefix(prefix: &str) -> Self {
        let name = |base: &str| {
            if prefix.is_empty() {
                base.to_string()
            } else {
                format!("{}-{}", prefix, base)
            }
        };

        Self {
            highlight: name("highlight"),
            tooltip: name("tooltip"),
            tooltip_content: name("tooltip-content"),
            tooltip_message: name("tooltip-message"),
            tooltip_suggestion: name("tooltip-suggestion"),
        }
    }
}

impl Default for ClassNames {
    fn default() -> Self {
        Self::with_prefix("")
    }
}

/// Configuration for overlay rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayConfig {
    /// Class names of the structural tags
    pub classes: ClassNames,
    /// Text shown before the suggestion list
    pub suggestion_label: String,
    /// Escaping strategy for the final pass
    pub escape_strategy: EscapeStrategy,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            classes: ClassNames::default(),
            suggestion_label: "Suggestion: ".to_string(),
            escape_strategy: EscapeStrategy::default(),
        }
    }
}
