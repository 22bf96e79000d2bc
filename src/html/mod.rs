//! HTML processing module
//!
//! - Plain-text extraction from stored article HTML
//! - Server-rendered list and detail pages

pub mod pages;
mod strip;

pub use strip::{strip_markup, MarkupError};
