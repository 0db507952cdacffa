//! Section extraction
//!
//! Walks the paragraphs of a document and groups them into titled sections.
//! A section opens at every title paragraph and closes at the next title or
//! at the end of the document; sections without content are dropped.

use tracing::debug;

use super::models::*;
use super::parsing::classify::{classify, format_bullet};
use super::parsing::formatting::render_markup;

/// Group paragraphs into sections of formatted content items
pub fn extract_sections(paragraphs: &[Paragraph]) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<Section> = None;

    for para in paragraphs {
        if para.plain_text().trim().is_empty() {
            continue;
        }

        let markup = render_markup(&para.runs);
        if markup.trim().is_empty() {
            continue;
        }

        let classification = classify(para, &markup);
        debug!(?classification, text = %markup.trim(), "classified paragraph");

        match classification {
            Classification::Title => {
                close_section(&mut sections, current.take());
                current = Some(Section::new(markup.trim()));
            }
            Classification::Bullet | Classification::Body => {
                let is_bullet = classification == Classification::Bullet;
                let text = if is_bullet {
                    format_bullet(&markup)
                } else {
                    markup.trim().to_string()
                };

                current
                    .get_or_insert_with(|| Section::new(DEFAULT_SECTION_TITLE))
                    .content
                    .push(ContentItem { text, is_bullet });
            }
        }
    }

    close_section(&mut sections, current);
    sections
}

fn close_section(sections: &mut Vec<Section>, section: Option<Section>) {
    match section {
        Some(section) if !section.content.is_empty() => {
            debug!(
                title = %section.title,
                items = section.content.len(),
                "closed section"
            );
            sections.push(section);
        }
        Some(section) => {
            debug!(title = %section.title, "dropped empty section");
        }
        None => {}
    }
}
