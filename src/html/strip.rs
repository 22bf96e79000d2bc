//! Plain-text extraction from stored article HTML
//!
//! Articles are stored as HTML, but proofreading offsets refer to their
//! plain text. Tags, comments and the doctype are removed with lol_html
//! (element content is kept), then entities are decoded.

use lol_html::html_content::ContentType;
use lol_html::{comments, doctype, element, rewrite_str, text, RewriteStrSettings};

/// Elements whose content the tokenizer reads as raw text. Tags written
/// inside them are not elements, so they are stripped with a second pass.
const RAW_TEXT_ELEMENTS: &str =
    "title, textarea, script, style, xmp, iframe, noembed, noframes, noscript";

/// Errors during markup processing
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    #[error("HTML rewrite failed: {0}")]
    RewriteError(String),
}

/// Remove all tags and comments from `html` and decode its entities
pub fn strip_markup(html: &str) -> Result<String, MarkupError> {
    let stripped = remove_tags(html)?;
    Ok(html_escape::decode_html_entities(&stripped).into_owned())
}

/// Remove tags, comments and the doctype, leaving entities encoded
fn remove_tags(html: &str) -> Result<String, MarkupError> {
    // Raw text may arrive in several chunks; tags can straddle them
    let mut raw_text = String::new();

    rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![
                // Drop the tags, keep what is inside them
                element!("*", |el| {
                    el.remove_and_keep_content();
                    Ok(())
                }),
                comments!("*", |c| {
                    c.remove();
                    Ok(())
                }),
                text!(RAW_TEXT_ELEMENTS, |t| {
                    raw_text.push_str(t.as_str());
                    if t.last_in_text_node() {
                        let inner = remove_tags(&std::mem::take(&mut raw_text))?;
                        t.replace(&inner, ContentType::Html);
                    } else {
                        t.remove();
                    }
                    Ok(())
                }),
            ],
            document_content_handlers: vec![doctype!(|d| {
                d.remove();
                Ok(())
            })],
            ..RewriteStrSettings::default()
        },
    )
    .map_err(|e| MarkupError::RewriteError(e.to_string()))
}
