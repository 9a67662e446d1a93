//! Card Review State Machine
//!
//! Walks a shuffled card sequence one swipe at a time.
//!
//! Swiping advances the index; the stack is reshuffled only when the card set
//! is replaced (language or category change) or on an explicit start over.
//! Swipe direction is tallied but does not affect ordering.

use crate::error::{TotaError, TotaResult};
use crate::learn::models::Card;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Number of cards presented in the visible stack
pub const PREVIEW_DEPTH: usize = 3;

/// Horizontal drag distance beyond which a card is dismissed
pub const SWIPE_THRESHOLD: f32 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// Classify the end of a horizontal drag. `None` means the card snaps back.
    pub fn from_drag(offset: f32) -> Option<Self> {
        if !offset.is_finite() || offset.abs() <= SWIPE_THRESHOLD {
            None
        } else if offset > 0.0 {
            Some(SwipeDirection::Right)
        } else {
            Some(SwipeDirection::Left)
        }
    }
}

/// Swipe counts for the current pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwipeTally {
    pub left: usize,
    pub right: usize,
}

impl SwipeTally {
    fn record(&mut self, direction: SwipeDirection) {
        match direction {
            SwipeDirection::Left => self.left += 1,
            SwipeDirection::Right => self.right += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewState {
    /// Index of the top card
    Active(usize),
    /// Every card has been dismissed
    Exhausted,
}

/// Position in a shuffled card sequence. `index == cards.len()` is exhausted.
#[derive(Debug, Clone, Default)]
pub struct ReviewCursor {
    cards: Vec<Card>,
    index: usize,
    tally: SwipeTally,
}

impl ReviewCursor {
    pub fn new(cards: Vec<Card>) -> Self {
        Self::new_with_rng(cards, &mut rand::thread_rng())
    }

    pub fn new_with_rng<R: Rng + ?Sized>(cards: Vec<Card>, rng: &mut R) -> Self {
        let mut cursor = Self::default();
        cursor.reset_with_rng(cards, rng);
        cursor
    }

    /// Replace the card set with a fresh permutation and rewind
    pub fn reset(&mut self, cards: Vec<Card>) {
        self.reset_with_rng(cards, &mut rand::thread_rng());
    }

    pub fn reset_with_rng<R: Rng + ?Sized>(&mut self, mut cards: Vec<Card>, rng: &mut R) {
        cards.shuffle(rng);
        self.cards = cards;
        self.index = 0;
        self.tally = SwipeTally::default();
        debug!("🔀 Review reset with {} cards", self.cards.len());
    }

    /// Reshuffle the current card set and rewind
    pub fn start_over(&mut self) {
        self.start_over_with_rng(&mut rand::thread_rng());
    }

    pub fn start_over_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let cards = std::mem::take(&mut self.cards);
        self.reset_with_rng(cards, rng);
    }

    /// Dismiss the top card
    pub fn advance(&mut self, direction: SwipeDirection) -> TotaResult<ReviewState> {
        if self.is_exhausted() {
            return Err(TotaError::ReviewExhausted);
        }
        self.tally.record(direction);
        self.index += 1;
        debug!(
            "Card {}/{} swiped {:?}",
            self.index,
            self.cards.len(),
            direction
        );
        Ok(self.state())
    }

    pub fn state(&self) -> ReviewState {
        if self.is_exhausted() {
            ReviewState::Exhausted
        } else {
            ReviewState::Active(self.index)
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.index >= self.cards.len()
    }

    /// The interactive card
    pub fn top(&self) -> Option<&Card> {
        self.cards.get(self.index)
    }

    /// The visible stack, top card first
    pub fn preview(&self) -> &[Card] {
        let remaining = self.remaining_cards();
        &remaining[..remaining.len().min(PREVIEW_DEPTH)]
    }

    fn remaining_cards(&self) -> &[Card] {
        &self.cards[self.index.min(self.cards.len())..]
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.index
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The shuffled sequence
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn tally(&self) -> SwipeTally {
        self.tally
    }
}
