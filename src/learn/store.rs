//! Vocabulary Store
//!
//! Loads the bundled per-language vocabulary files once and serves the
//! word and phrase lists by language. Languages whose resource is missing
//! or malformed are skipped; the store never fails to construct.

use crate::error::{TotaError, TotaResult};
use crate::learn::models::{Card, Category, LanguageFile, LearnLanguage};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// One entry of the fixed language catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Resource key, resolved by a [`ResourceBundle`]
    pub resource: &'static str,
    pub id: &'static str,
    pub native_name: &'static str,
}

/// Languages bundled with the app, in display order
pub const LANGUAGE_CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        resource: "hindi-json",
        id: "hindi",
        native_name: "हिन्दी",
    },
    CatalogEntry {
        resource: "kannada-json",
        id: "kannada",
        native_name: "ಕನ್ನಡ",
    },
    CatalogEntry {
        resource: "malayalam-json",
        id: "malayalam",
        native_name: "മലയാളം",
    },
    CatalogEntry {
        resource: "tamil-json",
        id: "tamil",
        native_name: "தமிழ்",
    },
];

/// Source of bundled resources
pub trait ResourceBundle {
    /// Read the resource stored under `key`
    fn read(&self, key: &str) -> TotaResult<String>;
}

/// Resources stored as `<root>/<key>.json`
#[derive(Debug, Clone)]
pub struct DirectoryBundle {
    root: PathBuf,
}

impl DirectoryBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceBundle for DirectoryBundle {
    fn read(&self, key: &str) -> TotaResult<String> {
        let path = self.root.join(format!("{}.json", key));
        Ok(std::fs::read_to_string(path)?)
    }
}

/// In-memory resources, keyed like a [`DirectoryBundle`] without the extension
#[derive(Debug, Clone, Default)]
pub struct MemoryBundle {
    resources: HashMap<String, String>,
}

impl MemoryBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, contents: &str) {
        self.resources.insert(key.to_string(), contents.to_string());
    }

    pub fn with(mut self, key: &str, contents: &str) -> Self {
        self.insert(key, contents);
        self
    }
}

impl ResourceBundle for MemoryBundle {
    fn read(&self, key: &str) -> TotaResult<String> {
        self.resources
            .get(key)
            .cloned()
            .ok_or_else(|| TotaError::Resource(format!("no resource named '{}'", key)))
    }
}

/// Read-only registry of loaded vocabulary
#[derive(Debug, Default)]
pub struct VocabularyStore {
    languages: Vec<LearnLanguage>,
    words: HashMap<String, Vec<Card>>,
    phrases: HashMap<String, Vec<Card>>,
}

impl VocabularyStore {
    /// Load every language of [`LANGUAGE_CATALOG`] available in `bundle`
    pub fn load_all(bundle: &dyn ResourceBundle) -> Self {
        Self::load_catalog(bundle, LANGUAGE_CATALOG)
    }

    /// Load the given catalog. Entries that fail to load are left out.
    pub fn load_catalog(bundle: &dyn ResourceBundle, catalog: &[CatalogEntry]) -> Self {
        let mut store = Self::default();

        for entry in catalog {
            match Self::load_language(bundle, entry) {
                Ok(file) => store.register(entry, file),
                Err(e) => warn!("⚠️ Skipping language '{}': {}", entry.id, e),
            }
        }

        info!(
            "📚 Vocabulary loaded: {} of {} languages",
            store.languages.len(),
            catalog.len()
        );
        store
    }

    fn load_language(bundle: &dyn ResourceBundle, entry: &CatalogEntry) -> TotaResult<LanguageFile> {
        let content = bundle.read(entry.resource)?;
        let file: LanguageFile = serde_json::from_str(&content)?;

        if file.metadata.total_words != file.words.len() as i64
            || file.metadata.total_phrases != file.phrases.len() as i64
        {
            debug!(
                "Metadata for '{}' reports {}/{} words/phrases, found {}/{}",
                entry.id,
                file.metadata.total_words,
                file.metadata.total_phrases,
                file.words.len(),
                file.phrases.len()
            );
        }

        Ok(file)
    }

    fn register(&mut self, entry: &CatalogEntry, file: LanguageFile) {
        debug!(
            "  - {} ({}): {} words, {} phrases",
            entry.id,
            file.language,
            file.words.len(),
            file.phrases.len()
        );

        self.languages.push(LearnLanguage {
            id: entry.id.to_string(),
            name: file.language,
            native_name: entry.native_name.to_string(),
        });
        self.words.insert(
            entry.id.to_string(),
            file.words.into_iter().map(Card::from).collect(),
        );
        self.phrases.insert(
            entry.id.to_string(),
            file.phrases.into_iter().map(Card::from).collect(),
        );
    }

    /// Registered languages in catalog order
    pub fn languages(&self) -> &[LearnLanguage] {
        &self.languages
    }

    pub fn language(&self, id: &str) -> Option<&LearnLanguage> {
        self.languages.iter().find(|l| l.id == id)
    }

    /// Cards for a language and category in file order. Empty for unknown languages.
    pub fn cards(&self, language: &str, category: Category) -> &[Card] {
        let map = match category {
            Category::Words => &self.words,
            Category::Phrases => &self.phrases,
        };
        map.get(language).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
