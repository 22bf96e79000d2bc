//! Structural tag vocabulary, working units and the final escaping pass

use std::borrow::Cow;

use super::config::{ClassNames, EscapeStrategy};

/// Escape text for embedding in an HTML body or quoted attribute
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

/// Where a unit of the working sequence came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Text of the annotated document
    Document,
    /// Text placed inside a tooltip (suggestions, message, label)
    Tooltip,
    /// Markup produced by the renderer
    Markup,
}

/// One code point of the working sequence, tagged with its origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub ch: char,
    pub origin: Origin,
}

impl Unit {
    /// Whether this unit may be emitted without escaping
    pub fn is_trusted(&self) -> bool {
        self.origin == Origin::Markup
    }
}

/// Split text into units of the given origin
pub fn units(text: &str, origin: Origin) -> Vec<Unit> {
    text.chars().map(|ch| Unit { ch, origin }).collect()
}

/// A fragment of renderer output before it is laid out as units
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Trusted markup
    Markup(String),
    /// Untrusted text
    Text(String),
}

impl Segment {
    pub fn tag(tag: StructuralTag, classes: &ClassNames) -> Self {
        Segment::Markup(tag.literal(classes))
    }
}

/// Lay segments out as a flat unit sequence
pub fn layout(segments: &[Segment]) -> Vec<Unit> {
    segments
        .iter()
        .flat_map(|segment| match segment {
            Segment::Markup(s) => units(s, Origin::Markup),
            Segment::Text(s) => units(s, Origin::Tooltip),
        })
        .collect()
}

/// Render segments as standalone HTML, escaping only text segments
pub fn segments_html(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Markup(s) => Cow::Borrowed(s.as_str()),
            Segment::Text(s) => escape(s),
        })
        .collect()
}

/// Tags injected by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralTag {
    Highlight,
    Tooltip,
    TooltipContent,
    TooltipMessage,
    TooltipSuggestion,
    Close,
}

impl StructuralTag {
    /// Order in which escaped tags are restored; the shared close tag is last
    pub const RESTORE_ORDER: [StructuralTag; 6] = [
        StructuralTag::Highlight,
        StructuralTag::Tooltip,
        StructuralTag::TooltipContent,
        StructuralTag::TooltipMessage,
        StructuralTag::TooltipSuggestion,
        StructuralTag::Close,
    ];

    /// The literal markup of this tag
    pub fn literal(self, classes: &ClassNames) -> String {
        let open = |class: &str| format!("<span class=\"{}\">", class);
        match self {
            StructuralTag::Highlight => open(&classes.highlight),
            StructuralTag::Tooltip => open(&classes.tooltip),
            StructuralTag::TooltipContent => open(&classes.tooltip_content),
            StructuralTag::TooltipMessage => open(&format!(
                "{} {}",
                classes.tooltip_content, classes.tooltip_message
            )),
            StructuralTag::TooltipSuggestion => open(&classes.tooltip_suggestion),
            StructuralTag::Close => "</span>".to_string(),
        }
    }
}

/// Turn a unit sequence into the final HTML string
pub fn finish(units: &[Unit], strategy: EscapeStrategy, classes: &ClassNames) -> String {
    match strategy {
        EscapeStrategy::Segmented => escape_segmented(units),
        EscapeStrategy::Restore => {
            let flat: String = units.iter().map(|u| u.ch).collect();
            restore_structural_markup(&escape(&flat), classes)
        }
    }
}

fn escape_segmented(units: &[Unit]) -> String {
    let mut out = String::with_capacity(units.len());
    for run in units.chunk_by(|a, b| a.is_trusted() == b.is_trusted()) {
        let text: String = run.iter().map(|u| u.ch).collect();
        if run[0].is_trusted() {
            out.push_str(&text);
        } else {
            out.push_str(&escape(&text));
        }
    }
    out
}

/// Replace the escaped form of every structural tag with its literal form
pub fn restore_structural_markup(escaped: &str, classes: &ClassNames) -> String {
    StructuralTag::RESTORE_ORDER
        .iter()
        .fold(escaped.to_string(), |acc, tag| {
            let literal = tag.literal(classes);
            acc.replace(escape(&literal).as_ref(), &literal)
        })
}
