//! Learn tab controller
//!
//! Ties the language and category pickers to a review cursor.

use crate::error::{TotaError, TotaResult};
use crate::learn::models::{Card, Category, LearnLanguage};
use crate::learn::review::{ReviewCursor, ReviewState, SwipeDirection};
use crate::learn::store::VocabularyStore;
use std::sync::Arc;
use tracing::info;

pub struct LearnController {
    store: Arc<VocabularyStore>,
    language: Option<String>,
    category: Category,
    cursor: ReviewCursor,
}

impl LearnController {
    /// Start on the first available language and the words category
    pub fn new(store: Arc<VocabularyStore>) -> Self {
        let language = store.languages().first().map(|l| l.id.clone());
        let mut controller = Self {
            store,
            language,
            category: Category::default(),
            cursor: ReviewCursor::default(),
        };
        controller.reload();
        controller
    }

    pub fn select_language(&mut self, id: &str) -> TotaResult<()> {
        if self.store.language(id).is_none() {
            return Err(TotaError::UnknownSelection(format!("learn language '{}'", id)));
        }
        self.language = Some(id.to_string());
        self.reload();
        Ok(())
    }

    pub fn select_category(&mut self, category: Category) {
        self.category = category;
        self.reload();
    }

    pub fn swipe(&mut self, direction: SwipeDirection) -> TotaResult<ReviewState> {
        self.cursor.advance(direction)
    }

    pub fn start_over(&mut self) {
        info!("🔁 Starting over ({} cards)", self.cursor.len());
        self.cursor.start_over();
    }

    fn reload(&mut self) {
        let cards = match &self.language {
            Some(id) => self.store.cards(id, self.category).to_vec(),
            None => Vec::new(),
        };
        info!(
            "🃏 Loaded {} {} for {}",
            cards.len(),
            self.category,
            self.language.as_deref().unwrap_or("<none>")
        );
        self.cursor.reset(cards);
    }

    pub fn language(&self) -> Option<&LearnLanguage> {
        self.language.as_deref().and_then(|id| self.store.language(id))
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn languages(&self) -> &[LearnLanguage] {
        self.store.languages()
    }

    pub fn cursor(&self) -> &ReviewCursor {
        &self.cursor
    }

    pub fn top(&self) -> Option<&Card> {
        self.cursor.top()
    }

    pub fn state(&self) -> ReviewState {
        self.cursor.state()
    }
}
