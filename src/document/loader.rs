//! Document loading
//!
//! This module reads a DOCX file with docx-rs and converts its body into the
//! crate's [`Paragraph`] values. Only top-level paragraphs take part; tables
//! and other block content are skipped.

use std::path::Path;

use tracing::debug;

use super::models::*;
use super::parsing::formatting::convert_run;
use crate::error::ConvertError;

/// Read a DOCX file and return its paragraphs in document order
pub fn load_paragraphs(file_path: &Path) -> Result<Vec<Paragraph>, ConvertError> {
    let file_data = std::fs::read(file_path).map_err(|source| ConvertError::Io {
        path: file_path.to_path_buf(),
        source,
    })?;

    let docx = docx_rs::read_docx(&file_data).map_err(|source| ConvertError::Read {
        path: file_path.to_path_buf(),
        source,
    })?;

    let paragraphs = paragraphs_from_docx(&docx);
    debug!(
        path = %file_path.display(),
        paragraphs = paragraphs.len(),
        "loaded document"
    );

    Ok(paragraphs)
}

/// Convert an already parsed document into paragraphs
pub fn paragraphs_from_docx(docx: &docx_rs::Docx) -> Vec<Paragraph> {
    docx.document
        .children
        .iter()
        .filter_map(|child| match child {
            docx_rs::DocumentChild::Paragraph(para) => {
                Some(convert_paragraph(para, &docx.styles))
            }
            _ => None,
        })
        .collect()
}

/// Resolve a paragraph style id to its display name
///
/// Localized documents use localized ids (`Balk1`) for built-in styles whose
/// name stays `heading 1`. Built-in lowercase heading names are reported as
/// `Heading N`. The id is used when the style is not defined.
fn resolve_style_name(style_id: &str, styles: &docx_rs::Styles) -> String {
    let name = styles
        .find_style_by_id(style_id)
        .and_then(|style| serde_json::to_value(&style.name).ok())
        .and_then(|value| {
            value
                .as_str()
                .or_else(|| value.get("name").and_then(serde_json::Value::as_str))
                .map(str::to_string)
        })
        .filter(|name| !name.is_empty());

    match name {
        Some(name) => match name.strip_prefix("heading ") {
            Some(level) => format!("Heading {level}"),
            None => name,
        },
        None => style_id.to_string(),
    }
}

fn convert_paragraph(para: &docx_rs::Paragraph, styles: &docx_rs::Styles) -> Paragraph {
    let style = para
        .property
        .style
        .as_ref()
        .map(|style| resolve_style_name(&style.val, styles));

    let runs = para
        .children
        .iter()
        .filter_map(|child| match child {
            docx_rs::ParagraphChild::Run(run) => Some(convert_run(run)),
            _ => None,
        })
        .collect();

    Paragraph { style, runs }
}
