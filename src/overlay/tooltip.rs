//! Tooltip body rendering

use super::config::OverlayConfig;
use super::markup::{segments_html, Segment, StructuralTag};
use super::types::Annotation;

/// Render the tooltip body of an annotation.
///
/// Emits a suggestion fragment when there are suggestions and a message
/// fragment when the message is non-empty, in that order. Text segments are
/// left unescaped; escaping happens once, in the final pass.
pub fn render_tooltip(annotation: &Annotation, config: &OverlayConfig) -> Vec<Segment> {
    let classes = &config.classes;
    let mut segments = Vec::new();

    let suggestions = annotation.suggestions.decode();
    if !suggestions.is_empty() {
        segments.push(Segment::tag(StructuralTag::TooltipContent, classes));
        if !config.suggestion_label.is_empty() {
            segments.push(Segment::Text(config.suggestion_label.clone()));
        }
        segments.push(Segment::tag(StructuralTag::TooltipSuggestion, classes));
        segments.push(Segment::Text(suggestions.join(", ")));
        segments.push(Segment::tag(StructuralTag::Close, classes));
        segments.push(Segment::tag(StructuralTag::Close, classes));
    }

    if !annotation.message.is_empty() {
        segments.push(Segment::tag(StructuralTag::TooltipMessage, classes));
        segments.push(Segment::Text(annotation.message.clone()));
        segments.push(Segment::tag(StructuralTag::Close, classes));
    }

    segments
}

/// The tooltip body as escaped HTML
pub fn tooltip_html(annotation: &Annotation, config: &OverlayConfig) -> String {
    segments_html(&render_tooltip(annotation, config))
}
