//! Overlay renderer: wraps annotated spans of plain text in highlight markup

use super::config::OverlayConfig;
use super::insert::{insert, InsertionLedger};
use super::markup::{escape, finish, layout, units, Origin, Segment, StructuralTag, Unit};
use super::spans::order_spans;
use super::tooltip::render_tooltip;
use super::types::Annotation;

/// Renders annotations over plain text as escaped HTML with inline tooltips
#[derive(Debug, Clone, Default)]
pub struct OverlayRenderer {
    config: OverlayConfig,
}

impl OverlayRenderer {
    pub fn new(config: OverlayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Render `text` with every valid annotation highlighted.
    ///
    /// The result is safe to embed as inner HTML. Invalid spans are skipped;
    /// this never fails.
    pub fn render(&self, text: &str, annotations: &[Annotation]) -> String {
        let mut seq = units(text, Origin::Document);
        let spans = order_spans(annotations, seq.len());
        if spans.is_empty() {
            return escape(text).into_owned();
        }

        let classes = &self.config.classes;
        let close = layout(&[Segment::tag(StructuralTag::Close, classes)]);
        let mut ledger = InsertionLedger::default();

        for span in &spans {
            let open = self.open_tag(span.annotation);

            seq = insert(&seq, ledger.close_index(span.end), &close);
            ledger.record_close(span.end, close.len());

            seq = insert(&seq, ledger.open_index(span.start), &open);
            ledger.record_open(span.start, open.len());
        }

        tracing::trace!(
            "Rendered {} of {} annotations over {} chars",
            spans.len(),
            annotations.len(),
            text.chars().count()
        );

        finish(&seq, self.config.escape_strategy, classes)
    }

    /// Highlight open tag followed by the tooltip, if there is anything to show
    fn open_tag(&self, annotation: &Annotation) -> Vec<Unit> {
        let classes = &self.config.classes;
        let body = render_tooltip(annotation, &self.config);

        let mut segments = vec![Segment::tag(StructuralTag::Highlight, classes)];
        if !body.is_empty() {
            segments.push(Segment::tag(StructuralTag::Tooltip, classes));
            segments.extend(body);
            segments.push(Segment::tag(StructuralTag::Close, classes));
        }
        layout(&segments)
    }
}

/// Render with the default configuration
pub fn render(text: &str, annotations: &[Annotation]) -> String {
    OverlayRenderer::default().render(text, annotations)
}
