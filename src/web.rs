//! Web formatting of extracted sections
//!
//! Each section gets a slug key derived from its title and a single markup
//! string: paragraphs are separated by `<br><br>`, consecutive bullets by a
//! single `<br>`.

use tracing::warn;

use crate::document::{ContentItem, DROPLET, FormattedSection, Section, SectionMap};

pub const PARAGRAPH_BREAK: &str = "<br><br>";
pub const BULLET_BREAK: &str = "<br>";

/// Derive the JSON key for a section title
///
/// `index` is the zero-based position of the section and is only used for
/// the `section_<n>` fallback when nothing of the title survives.
pub fn section_key(title: &str, index: usize) -> String {
    let key: String = title
        .to_lowercase()
        .replace(' ', "_")
        .replace(['?', '.'], "")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
        .collect();

    if key.is_empty() {
        format!("section_{}", index + 1)
    } else {
        key
    }
}

/// Merge content items into parts: one per paragraph run, one per bullet
pub fn merge_content(items: &[ContentItem]) -> Vec<String> {
    let mut parts = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    for item in items {
        if item.is_bullet {
            flush_paragraph(&mut parts, &mut paragraph);
            parts.push(item.text.clone());
        } else {
            paragraph.push(&item.text);
        }
    }

    flush_paragraph(&mut parts, &mut paragraph);
    parts
}

fn flush_paragraph(parts: &mut Vec<String>, paragraph: &mut Vec<&str>) {
    if !paragraph.is_empty() {
        parts.push(paragraph.join(PARAGRAPH_BREAK));
        paragraph.clear();
    }
}

/// Join parts, using a single break only between two bullets
pub fn join_parts(parts: &[String]) -> String {
    let mut joined = String::new();

    for (index, part) in parts.iter().enumerate() {
        if index > 0 {
            let prev_is_bullet = parts[index - 1].starts_with(DROPLET);
            let curr_is_bullet = part.starts_with(DROPLET);

            if prev_is_bullet && curr_is_bullet {
                joined.push_str(BULLET_BREAK);
            } else {
                joined.push_str(PARAGRAPH_BREAK);
            }
        }
        joined.push_str(part);
    }

    joined
}

pub fn format_section(section: &Section) -> FormattedSection {
    FormattedSection {
        title: section.title.clone(),
        content: join_parts(&merge_content(&section.content)),
    }
}

/// Format every section, keyed by slug in document order
///
/// Sections sharing a key overwrite earlier ones; the key keeps its first
/// position.
pub fn format_sections(sections: &[Section]) -> SectionMap<FormattedSection> {
    let mut formatted = SectionMap::new();

    for (index, section) in sections.iter().enumerate() {
        let key = section_key(&section.title, index);
        if let Some(previous) = formatted.insert(key.clone(), format_section(section)) {
            warn!(
                key = %key,
                replaced = %previous.title,
                title = %section.title,
                "section key collision, keeping the later section"
            );
        }
    }

    formatted
}
