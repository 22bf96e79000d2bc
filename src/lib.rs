//! Proofread Viewer Library
//!
//! Browse articles together with the results of an external proofreading
//! pipeline, rendered as inline highlights with tooltips.
//!
//! # Modules
//!
//! - `overlay`: The annotation overlay renderer (pure, no I/O)
//! - `html`: Plain-text extraction and server-rendered pages
//! - `db`: SQLite persistence for articles and proofreading results
//! - `documents`: Article lookup and listing on top of `db`
//! - `routes`: HTTP surface

pub mod config;
pub mod db;
pub mod documents;
pub mod error;
pub mod html;
pub mod overlay;
pub mod pagination;
pub mod routes;
pub mod state;
