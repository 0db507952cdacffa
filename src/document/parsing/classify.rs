//! Paragraph classification
//!
//! Title and bullet detection are pure predicates over paragraph values.
//! They combine style, bold formatting and text heuristics into a single
//! [`Classification`].

use once_cell::sync::Lazy;
use regex::Regex;

use super::super::models::*;

/// Titles detected from bold text must be shorter than this many characters
pub(crate) const MAX_BOLD_TITLE_CHARS: usize = 100;

/// Number of leading characters searched for an en or em dash
const DASH_WINDOW: usize = 10;

static BULLET_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-•*–—]\s*").unwrap());

/// Whether the paragraph style names a heading
pub(crate) fn has_heading_style(para: &Paragraph) -> bool {
    para.style
        .as_deref()
        .is_some_and(|style| style.starts_with("Heading"))
}

/// Whether any run carrying visible text is bold
pub(crate) fn has_bold_text(para: &Paragraph) -> bool {
    para.runs
        .iter()
        .any(|run| run.bold && !run.text.trim().is_empty())
}

pub(crate) fn is_title(para: &Paragraph, markup: &str) -> bool {
    let short = markup.trim().chars().count() < MAX_BOLD_TITLE_CHARS;
    (has_bold_text(para) && short) || has_heading_style(para)
}

pub(crate) fn is_bullet(markup: &str) -> bool {
    let trimmed = markup.trim();
    if trimmed.starts_with(['-', '•', '*']) {
        return true;
    }

    markup
        .chars()
        .take(DASH_WINDOW)
        .any(|c| c == '–' || c == '—')
}

pub(crate) fn classify(para: &Paragraph, markup: &str) -> Classification {
    if is_title(para, markup) {
        Classification::Title
    } else if is_bullet(markup) {
        Classification::Bullet
    } else {
        Classification::Body
    }
}

/// Replace a single leading marker with the droplet glyph
pub(crate) fn format_bullet(markup: &str) -> String {
    let cleaned = BULLET_MARKER.replace(markup.trim(), "");
    format!("{DROPLET} {cleaned}")
}
