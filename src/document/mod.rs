//! Document parsing and data structures module
//!
//! This module reads Microsoft Word (.docx) documents into paragraph values
//! and groups those paragraphs into titled sections.

pub mod extract;
pub mod loader;
pub mod models;
pub(crate) mod parsing;

pub use extract::extract_sections;
pub use loader::{load_paragraphs, paragraphs_from_docx};
pub use models::*;
