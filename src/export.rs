//! JSON assembly
//!
//! Wraps formatted sections into the `document_content` object the website
//! reads, and serializes it.

use crate::document::{
    FormattedSection, Paragraph, SectionMap, WebsiteJson, WebsiteSection, extract_sections,
};
use crate::error::ConvertError;
use crate::web::format_sections;

pub fn create_website_json(sections: SectionMap<FormattedSection>) -> WebsiteJson {
    let document_content = sections
        .into_iter()
        .map(|(key, section)| {
            (
                key,
                WebsiteSection {
                    title: section.title,
                    text: section.content,
                },
            )
        })
        .collect();

    WebsiteJson { document_content }
}

/// Serialize with two-space indentation; non-ASCII text is kept as is
pub fn to_json(website: &WebsiteJson) -> Result<String, ConvertError> {
    Ok(serde_json::to_string_pretty(website)?)
}

/// Run the whole pipeline over already loaded paragraphs
pub fn convert_paragraphs(paragraphs: &[Paragraph]) -> WebsiteJson {
    let sections = extract_sections(paragraphs);
    create_website_json(format_sections(&sections))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Run;

    #[test]
    fn test_empty_document_json() {
        let json = to_json(&convert_paragraphs(&[])).unwrap();
        assert_eq!(json, "{\n  \"document_content\": {}\n}");
    }

    #[test]
    fn test_json_shape_and_literal_unicode() {
        let paragraphs = vec![
            Paragraph::with_style("Heading1", vec![Run::plain("Biz Kimiz?")]),
            Paragraph::new(vec![Run::plain("- Çevre")]),
        ];

        let json = to_json(&convert_paragraphs(&paragraphs)).unwrap();

        let expected = "{\n  \"document_content\": {\n    \"biz_kimiz\": {\n      \"title\": \"Biz Kimiz?\",\n      \"text\": \"💧 Çevre\"\n    }\n  }\n}";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_create_website_json_keeps_order() {
        let mut sections = SectionMap::new();
        sections.insert(
            "zeta",
            FormattedSection {
                title: "Zeta".to_string(),
                content: "z".to_string(),
            },
        );
        sections.insert(
            "alpha",
            FormattedSection {
                title: "Alpha".to_string(),
                content: "a".to_string(),
            },
        );

        let website = create_website_json(sections);
        let keys: Vec<_> = website.document_content.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }
}
