use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// 52-card deck drawn from the end. Owns the shuffle RNG so one seed
/// reproduces every hand of a tournament.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
    /// Fixed order restored on every shuffle
    stacked: Option<Vec<Card>>,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            rng,
            stacked: None,
        }
    }

    /// Fresh 52 cards in random order.
    pub fn new_shuffled(seed: u64) -> Self {
        let mut deck = Self::new_with_seed(seed);
        deck.shuffle();
        deck
    }

    /// Scripted deck for replaying a known hand: every shuffle restores
    /// `cards` as given, and the last card is drawn first.
    pub fn stacked(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.clone(),
            rng: ChaCha20Rng::seed_from_u64(0),
            stacked: Some(cards),
        }
    }

    pub fn shuffle(&mut self) {
        match &self.stacked {
            Some(order) => self.cards = order.clone(),
            None => {
                self.cards = full_deck();
                self.cards.shuffle(&mut self.rng);
            }
        }
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
