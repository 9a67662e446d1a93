//! Tota Library
//!
//! Core state for the tota language tutor: flashcard review over bundled
//! vocabulary, and orchestration of live voice practice sessions.

pub mod config;
pub mod error;
pub mod learn;
pub mod practice;

pub use error::{TotaError, TotaResult};
