use crate::cards::{parse_cards, Card};
use std::fmt;
use std::str::FromStr;

/// Highest non-busting total.
pub const BLACKJACK: u32 = 21;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A scored hand: the best total plus whether an Ace is still counted as 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    pub total: u32,
    pub soft: bool,
}

impl Score {
    pub fn is_bust(self) -> bool {
        self.total > BLACKJACK
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.soft {
            write!(f, "soft {}", self.total)
        } else {
            write!(f, "{}", self.total)
        }
    }
}

/// Score a run of cards.
///
/// Every Ace starts at 11; while the total is over 21 and an Ace is still
/// counted high, one Ace drops to 1. The result is the highest total not over
/// 21 when one exists, otherwise the smallest bust total.
///
/// ```
/// use blackjack_rs::cards::parse_cards;
/// use blackjack_rs::hand::score;
///
/// let s = score(&parse_cards("Ah 6c").unwrap());
/// assert_eq!((s.total, s.soft), (17, true));
/// let s = score(&parse_cards("Ah 6c 9d").unwrap());
/// assert_eq!((s.total, s.soft), (16, false));
/// ```
pub fn score(cards: &[Card]) -> Score {
    let mut total: u32 = cards.iter().map(|c| c.points()).sum();
    let mut high_aces = cards.iter().filter(|c| c.is_ace()).count();
    while total > BLACKJACK && high_aces > 0 {
        total -= 10;
        high_aces -= 1;
    }
    Score { total, soft: high_aces > 0 }
}

/// The total from [`score`].
pub fn calculate_score(cards: &[Card]) -> u32 {
    score(cards).total
}

/// One participant's cards, in the order they were dealt.
///
/// ```
/// use blackjack_rs::hand::Hand;
///
/// let hand: Hand = "As Kd".parse().unwrap();
/// assert_eq!(hand.total(), 21);
/// assert!(hand.is_blackjack());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn first(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    pub fn score(&self) -> Score {
        score(&self.cards)
    }

    pub fn total(&self) -> u32 {
        self.score().total
    }

    pub fn is_soft(&self) -> bool {
        self.score().soft
    }

    pub fn is_bust(&self) -> bool {
        self.score().is_bust()
    }

    /// Two-card 21.
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.total() == BLACKJACK
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) fn clear(&mut self) {
        self.cards.clear();
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.cards.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join(" "))
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Ok(Self::from_cards(cards))
    }
}
