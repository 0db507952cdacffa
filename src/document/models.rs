//! Core data structures for document representation
//!
//! This module defines the value types that flow through the conversion
//! pipeline: the paragraphs read from a document, the sections extracted
//! from them, and the formatted sections handed to the JSON assembler.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Glyph placed in front of every bullet item in the rendered markup
pub const DROPLET: &str = "💧";

/// Title given to content that appears before the first heading
pub const DEFAULT_SECTION_TITLE: &str = "Content";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// A paragraph as read from the document: its style id and its runs
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Paragraph {
    pub style: Option<String>,
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn new(runs: Vec<Run>) -> Self {
        Self { style: None, runs }
    }

    pub fn with_style(style: impl Into<String>, runs: Vec<Run>) -> Self {
        Self {
            style: Some(style.into()),
            runs,
        }
    }

    /// Paragraph text without any markup
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// How a paragraph takes part in the section structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Title,
    Bullet,
    Body,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentItem {
    pub text: String,
    pub is_bullet: bool,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    #[default]
    Section,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    #[serde(rename = "type")]
    pub section_type: SectionType,
    pub content: Vec<ContentItem>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            section_type: SectionType::Section,
            content: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormattedSection {
    pub title: String,
    pub content: String,
}

impl FormattedSection {
    /// Number of bullet glyphs in the rendered content
    pub fn bullet_count(&self) -> usize {
        self.content.matches(DROPLET).count()
    }

    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}

/// Insertion-ordered map from section key to value
///
/// Inserting a key that is already present replaces the value but keeps the
/// key at its original position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for SectionMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> SectionMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous value stored under `key`
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<V> IntoIterator for SectionMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V> FromIterator<(String, V)> for SectionMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = SectionMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<V: Serialize> Serialize for SectionMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// One section as it appears in the website JSON
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WebsiteSection {
    pub title: String,
    pub text: String,
}

/// Top-level object written to the output file
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct WebsiteJson {
    pub document_content: SectionMap<WebsiteSection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_map_replaces_in_place() {
        let mut map = SectionMap::new();
        assert_eq!(map.insert("intro", 1), None);
        assert_eq!(map.insert("body", 2), None);
        assert_eq!(map.insert("intro", 3), Some(1));

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("intro"), Some(&3));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["intro", "body"]);
    }

    #[test]
    fn test_section_map_serializes_in_order() {
        let map: SectionMap<u32> = vec![("b".to_string(), 1), ("a".to_string(), 2)]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"b":1,"a":2}"#);
    }

    #[test]
    fn test_formatted_section_counts() {
        let section = FormattedSection {
            title: "Intro".to_string(),
            content: "Hi<br><br>💧 one<br>💧 two".to_string(),
        };
        assert_eq!(section.bullet_count(), 2);
        assert_eq!(section.char_count(), 24);
    }

    #[test]
    fn test_paragraph_plain_text() {
        let para = Paragraph::new(vec![Run::plain("Hello "), Run::bold("world")]);
        assert_eq!(para.plain_text(), "Hello world");
    }
}
