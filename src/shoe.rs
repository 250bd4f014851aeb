//! The shoe: every undealt card at the table, plus the reshuffle policy.
//!
//! Cards are drawn from the end of the backing vector. The shoe counts every
//! card it hands out; once more than [`RESHUFFLE_THRESHOLD`] cards have been
//! drawn, [`Shoe::reshuffle_if_needed`] throws the remainder away and builds a
//! fresh [`RESHUFFLE_DECKS`]-deck shoe, whatever size the shoe started with.

use crate::cards::{Card, Rank, Suit};
use log::{info, warn};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const CARDS_PER_DECK: usize = 52;

/// Deck count used whenever the shoe is rebuilt by the reshuffle policy.
pub const RESHUFFLE_DECKS: usize = 6;

/// Drawn-count above which the shoe is rebuilt: 75% of a 6-deck shoe.
pub const RESHUFFLE_THRESHOLD: usize = RESHUFFLE_DECKS * CARDS_PER_DECK * 3 / 4;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShoeError {
    #[error("shoe is empty after {drawn} cards were drawn")]
    Empty { drawn: usize },
}

/// A shoe of one or more shuffled 52-card decks.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    num_decks: usize,
    drawn: usize,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Build and shuffle a shoe seeded from OS entropy.
    pub fn new(num_decks: usize) -> Self {
        let mut seed = [0u8; 32];
        rand::rng().fill_bytes(&mut seed);
        Self::with_rng(num_decks, ChaCha8Rng::from_seed(seed))
    }

    /// Build and shuffle a shoe with a deterministic seed.
    ///
    /// ```
    /// use blackjack_rs::shoe::Shoe;
    ///
    /// let shoe = Shoe::seeded(2, 42);
    /// assert_eq!(shoe.len(), 104);
    /// assert_eq!(shoe.drawn_count(), 0);
    /// ```
    pub fn seeded(num_decks: usize, seed: u64) -> Self {
        Self::with_rng(num_decks, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(num_decks: usize, rng: ChaCha8Rng) -> Self {
        let mut shoe = Self { cards: Vec::new(), num_decks, drawn: 0, rng };
        shoe.initialize(num_decks);
        shoe
    }

    /// A shoe whose draw order is fixed: `cards[0]` is drawn first.
    ///
    /// Reported as a single deck; a later reshuffle still rebuilds a random
    /// 6-deck shoe.
    pub fn stacked(cards: Vec<Card>) -> Self {
        let mut cards = cards;
        cards.reverse();
        Self { cards, num_decks: 1, drawn: 0, rng: ChaCha8Rng::seed_from_u64(0) }
    }

    /// Rebuild the shoe with `num_decks` fresh decks, shuffle it and reset the
    /// drawn-count.
    pub fn initialize(&mut self, num_decks: usize) {
        self.cards.clear();
        self.cards.reserve(num_decks * CARDS_PER_DECK);
        for _ in 0..num_decks {
            for rank in Rank::ALL {
                for suit in Suit::ALL {
                    self.cards.push(Card::new(rank, suit));
                }
            }
        }
        self.num_decks = num_decks;
        self.drawn = 0;
        self.shuffle();
        if self.cards.len() <= RESHUFFLE_THRESHOLD {
            warn!(
                "{}-deck shoe holds {} cards and will run dry before the reshuffle threshold of {}",
                num_decks,
                self.cards.len(),
                RESHUFFLE_THRESHOLD
            );
        }
    }

    /// Fisher–Yates: walk from the last index down to 1, swapping each slot
    /// with a uniformly chosen slot in `0..=i`.
    fn shuffle(&mut self) {
        for i in (1..self.cards.len()).rev() {
            let j = self.rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    /// Draw the top card.
    pub fn draw(&mut self) -> Result<Card, ShoeError> {
        let card = self.cards.pop().ok_or(ShoeError::Empty { drawn: self.drawn })?;
        self.drawn += 1;
        Ok(card)
    }

    /// Rebuild a fresh 6-deck shoe once more than [`RESHUFFLE_THRESHOLD`]
    /// cards have been drawn. Returns `true` when a reshuffle happened.
    pub fn reshuffle_if_needed(&mut self) -> bool {
        if self.drawn <= RESHUFFLE_THRESHOLD {
            return false;
        }
        info!(
            "reshuffling after {} cards drawn ({} undealt discarded)",
            self.drawn,
            self.cards.len()
        );
        self.initialize(RESHUFFLE_DECKS);
        true
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards drawn since the last (re)build.
    pub fn drawn_count(&self) -> usize {
        self.drawn
    }

    pub fn num_decks(&self) -> usize {
        self.num_decks
    }
}
