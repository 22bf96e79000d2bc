//! Span validation and ordering

use super::types::Annotation;

/// A validated annotation span in code point offsets
#[derive(Debug, Clone, Copy)]
pub struct Span<'a> {
    pub start: usize,
    pub end: usize,
    pub annotation: &'a Annotation,
}

/// Validate annotations against a document of `len` code points and order
/// them for insertion.
///
/// Invalid spans are dropped. Survivors are sorted by `start` descending so
/// that offsets below the current insertion point stay valid. Equal starts
/// put the shorter span first (it ends up innermost), then fall back to
/// input order.
pub fn order_spans(annotations: &[Annotation], len: usize) -> Vec<Span<'_>> {
    let mut spans: Vec<(usize, Span<'_>)> = annotations
        .iter()
        .enumerate()
        .filter_map(|(position, annotation)| match annotation.char_range(len) {
            Some(range) => Some((
                position,
                Span {
                    start: range.start,
                    end: range.end,
                    annotation,
                },
            )),
            None => {
                tracing::debug!(
                    "Dropping annotation {} with span [{}, {}) for text of {} chars",
                    position,
                    annotation.start,
                    annotation.end,
                    len
                );
                None
            }
        })
        .collect();

    spans.sort_by(|(pa, a), (pb, b)| {
        b.start
            .cmp(&a.start)
            .then(a.end.cmp(&b.end))
            .then(pa.cmp(pb))
    });

    spans.into_iter().map(|(_, span)| span).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(spans: &[Span<'_>]) -> Vec<(usize, usize)> {
        spans.iter().map(|s| (s.start, s.end)).collect()
    }

    #[test]
    fn test_sorted_by_start_descending() {
        let annotations = vec![
            Annotation::new(0, 2),
            Annotation::new(5, 7),
            Annotation::new(3, 4),
        ];
        assert_eq!(
            bounds(&order_spans(&annotations, 10)),
            vec![(5, 7), (3, 4), (0, 2)]
        );
    }

    #[test]
    fn test_invalid_spans_dropped() {
        let annotations = vec![
            Annotation::new(-1, 2),
            Annotation::new(4, 4),
            Annotation::new(6, 3),
            Annotation::new(8, 11),
            Annotation::new(1, 10),
        ];
        assert_eq!(bounds(&order_spans(&annotations, 10)), vec![(1, 10)]);
    }

    #[test]
    fn test_equal_starts_shorter_first_then_input_order() {
        let annotations = vec![
            Annotation::new(2, 6).with_message("long"),
            Annotation::new(2, 4).with_message("first"),
            Annotation::new(2, 4).with_message("second"),
        ];
        let messages: Vec<&str> = order_spans(&annotations, 10)
            .iter()
            .map(|s| s.annotation.message.as_str())
            .collect();
        assert_eq!(messages, vec!["first", "second", "long"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(order_spans(&[], 0).is_empty());
        assert!(order_spans(&[Annotation::new(0, 1)], 0).is_empty());
    }
}
