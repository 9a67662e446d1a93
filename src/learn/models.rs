//! Learn data types
//!
//! Cards, categories and the on-disk vocabulary schema.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A single flashcard. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: Uuid,
    pub english_term: String,
    pub native_term: String,
    pub transliteration: String,
}

impl Card {
    pub fn new(english_term: &str, native_term: &str, transliteration: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            english_term: english_term.to_string(),
            native_term: native_term.to_string(),
            transliteration: transliteration.to_string(),
        }
    }
}

/// Partition of a language's card set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Words,
    Phrases,
}

impl Category {
    /// Display order of the category picker
    pub const ALL: [Category; 2] = [Category::Words, Category::Phrases];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Words => "words",
            Category::Phrases => "phrases",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "words" | "word" => Ok(Category::Words),
            "phrases" | "phrase" => Ok(Category::Phrases),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

/// A language that loaded successfully from the bundle
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LearnLanguage {
    /// Catalog id, e.g. "tamil"
    pub id: String,
    /// Display name taken from the resource's `language` field
    pub name: String,
    /// Name in the language's own script
    pub native_name: String,
}

/// Bundled per-language vocabulary file
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LanguageFile {
    pub language: String,
    pub metadata: LanguageMetadata,
    pub words: Vec<CardEntry>,
    pub phrases: Vec<CardEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LanguageMetadata {
    pub total_words: i64,
    pub total_phrases: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CardEntry {
    pub english_term: String,
    pub native_term: String,
    pub transliteration: String,
}

impl From<CardEntry> for Card {
    fn from(entry: CardEntry) -> Self {
        Self {
            id: Uuid::new_v4(),
            english_term: entry.english_term,
            native_term: entry.native_term,
            transliteration: entry.transliteration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("words".parse::<Category>(), Ok(Category::Words));
        assert_eq!(" Phrases ".parse::<Category>(), Ok(Category::Phrases));
        assert!("verbs".parse::<Category>().is_err());
        assert_eq!(Category::Phrases.to_string(), "phrases");
    }

    #[test]
    fn test_language_file_requires_metadata() {
        let json = r#"{"language":"Tamil","words":[],"phrases":[]}"#;
        assert!(serde_json::from_str::<LanguageFile>(json).is_err());
    }

    #[test]
    fn test_cards_get_distinct_ids() {
        let a = Card::new("water", "தண்ணீர்", "thanneer");
        let b = Card::new("water", "தண்ணீர்", "thanneer");
        assert_ne!(a.id, b.id);
        assert_ne!(a, b);
    }
}
