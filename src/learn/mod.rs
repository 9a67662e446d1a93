//! Learn Module
//!
//! Flashcard review over bundled vocabulary:
//! - models: cards, categories and the resource schema
//! - store: load-once vocabulary registry
//! - review: swipe-driven card cursor
//! - controller: language/category selection for the Learn tab

pub mod controller;
pub mod models;
pub mod review;
pub mod store;

// Re-export main types
pub use controller::LearnController;
pub use models::{Card, Category, LearnLanguage};
pub use review::{ReviewCursor, ReviewState, SwipeDirection, SwipeTally};
pub use store::{DirectoryBundle, MemoryBundle, ResourceBundle, VocabularyStore, LANGUAGE_CATALOG};
