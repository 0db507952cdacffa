//! docx2json: convert Word documents into website-ready JSON
//!
//! This library reads Microsoft Word (.docx) documents, groups their
//! paragraphs into titled sections using simple heuristics, and renders each
//! section as an HTML-like markup string keyed by a slug of its title.

pub mod config;
pub mod document;
pub mod driver;
pub mod error;
pub mod export;
pub mod web;

// Re-export commonly used types
pub use config::{ConversionConfig, ConversionJob};
pub use document::{Paragraph, Run, Section, WebsiteJson};
pub use driver::{ConversionReport, convert_file, run};
pub use error::ConvertError;
pub use export::{convert_paragraphs, to_json};
