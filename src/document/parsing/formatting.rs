//! Text extraction and markup utilities
//!
//! This module handles extraction of text and bold information from
//! docx-rs runs, and renders runs into the HTML-like markup used on the web.

use super::super::models::Run;

/// Extract text from a run using docx-rs features
pub(crate) fn extract_run_text(run: &docx_rs::Run) -> String {
    let mut text = String::new();

    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text_elem) => {
                text.push_str(&text_elem.text);
            }
            docx_rs::RunChild::Tab(_) => {
                text.push('\t');
            }
            docx_rs::RunChild::Break(br) => {
                if is_line_break(br) {
                    text.push('\n');
                }
            }
            _ => {
                // Drawings, fields and the like carry no text
            }
        }
    }

    text
}

/// Only text-wrapping breaks produce text; page and column breaks do not
fn is_line_break(br: &docx_rs::Break) -> bool {
    // Break type is a private field, so read it through debug formatting
    let debug = format!("{br:?}");
    !(debug.contains("Page") || debug.contains("Column"))
}

/// Whether the run is explicitly bold
///
/// `<w:b w:val="0"/>` is read back as a disabled bold element and does not count.
pub(crate) fn extract_run_bold(run: &docx_rs::Run) -> bool {
    run.run_property
        .bold
        .as_ref()
        .is_some_and(|bold| *bold == docx_rs::Bold::new())
}

/// Convert a docx-rs run into our run value
pub(crate) fn convert_run(run: &docx_rs::Run) -> Run {
    Run {
        text: extract_run_text(run),
        bold: extract_run_bold(run),
    }
}

/// Concatenate runs into markup, wrapping bold runs in `<b>` tags
///
/// Empty runs are skipped so they never produce an empty `<b></b>` pair.
pub(crate) fn render_markup(runs: &[Run]) -> String {
    let mut markup = String::new();

    for run in runs.iter().filter(|run| !run.text.is_empty()) {
        if run.bold {
            markup.push_str("<b>");
            markup.push_str(&run.text);
            markup.push_str("</b>");
        } else {
            markup.push_str(&run.text);
        }
    }

    markup
}
