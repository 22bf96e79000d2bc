//! Annotation overlay rendering
//!
//! Turns plain text plus proofreading annotations into HTML where every
//! annotated span is wrapped in a highlight with an inline tooltip showing
//! its suggestions and message.
//!
//! # Pipeline
//!
//! 1. Drop spans outside `[0, len)` and order the rest by start, descending
//! 2. Render each tooltip body as markup and text segments
//! 3. Insert close and open tags into a code point sequence
//! 4. Escape untrusted text while keeping injected markup literal
//!
//! Offsets are code points, never bytes.

mod config;
mod insert;
mod markup;
mod renderer;
mod spans;
mod tooltip;
mod types;

pub use config::{ClassNames, EscapeStrategy, OverlayConfig};
pub use insert::{insert, InsertionLedger};
pub use markup::{escape, restore_structural_markup, Segment, StructuralTag};
pub use renderer::{render, OverlayRenderer};
pub use spans::{order_spans, Span};
pub use tooltip::{render_tooltip, tooltip_html};
pub use types::{decode_suggestions, Annotation, Suggestions};
