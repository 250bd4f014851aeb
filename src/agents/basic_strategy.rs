//! Basic strategy for a stand-on-all-17 game, hit/stand only.
//!
//! Rows are player totals, columns are the dealer up-card from 2 through 10
//! and then Ace. Anything the tables don't cover (bust hands, totals below
//! the first row) resolves to Stand.

use crate::cards::Card;
use crate::hand::{score, Score};

use super::Action;

const H: Action = Action::Hit;
const S: Action = Action::Stand;

const HARD_MIN: u32 = 4;
const SOFT_MIN: u32 = 12;

/// Hard totals 4..=21.
#[rustfmt::skip]
const HARD: [[Action; 10]; 18] = [
    //  2  3  4  5  6  7  8  9  T  A
    [H, H, H, H, H, H, H, H, H, H], // 4
    [H, H, H, H, H, H, H, H, H, H], // 5
    [H, H, H, H, H, H, H, H, H, H], // 6
    [H, H, H, H, H, H, H, H, H, H], // 7
    [H, H, H, H, H, H, H, H, H, H], // 8
    [H, H, H, H, H, H, H, H, H, H], // 9
    [H, H, H, H, H, H, H, H, H, H], // 10
    [H, H, H, H, H, H, H, H, H, H], // 11
    [H, H, S, S, S, H, H, H, H, H], // 12
    [S, S, S, S, S, H, H, H, H, H], // 13
    [S, S, S, S, S, H, H, H, H, H], // 14
    [S, S, S, S, S, H, H, H, H, H], // 15
    [S, S, S, S, S, H, H, H, H, H], // 16
    [S, S, S, S, S, S, S, S, S, S], // 17
    [S, S, S, S, S, S, S, S, S, S], // 18
    [S, S, S, S, S, S, S, S, S, S], // 19
    [S, S, S, S, S, S, S, S, S, S], // 20
    [S, S, S, S, S, S, S, S, S, S], // 21
];

/// Soft totals 12..=21 (A,A is soft 12).
#[rustfmt::skip]
const SOFT: [[Action; 10]; 10] = [
    //  2  3  4  5  6  7  8  9  T  A
    [H, H, H, H, H, H, H, H, H, H], // 12
    [H, H, H, H, H, H, H, H, H, H], // 13
    [H, H, H, H, H, H, H, H, H, H], // 14
    [H, H, H, H, H, H, H, H, H, H], // 15
    [H, H, H, H, H, H, H, H, H, H], // 16
    [H, H, H, H, H, H, H, H, H, H], // 17
    [S, S, S, S, S, S, S, H, H, H], // 18
    [S, S, S, S, S, S, S, S, S, S], // 19
    [S, S, S, S, S, S, S, S, S, S], // 20
    [S, S, S, S, S, S, S, S, S, S], // 21
];

/// A recommendation plus the basic-strategy double-down hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advice {
    pub action: Action,
    /// Basic strategy would double here if doubling were on offer.
    pub double_down: bool,
}

/// Column for a dealer up-card: 2..=9 by value, tens and faces share a column,
/// Ace is last.
fn up_card_column(up: Card) -> usize {
    (up.points() - 2) as usize
}

fn lookup(hand: Score, dealer_up: Card) -> Option<Action> {
    let (table, min): (&[[Action; 10]], u32) =
        if hand.soft { (&SOFT, SOFT_MIN) } else { (&HARD, HARD_MIN) };
    let row = hand.total.checked_sub(min)? as usize;
    table.get(row).map(|cols| cols[up_card_column(dealer_up)])
}

/// Recommend Hit or Stand from what the player can see: their own cards and
/// the dealer's up-card.
///
/// ```
/// use blackjack_rs::agents::{recommend, Action};
/// use blackjack_rs::cards::{parse_cards, Card};
///
/// let up: Card = "6h".parse().unwrap();
/// assert_eq!(recommend(&parse_cards("Td 2c").unwrap(), up), Action::Stand);
/// let up: Card = "7h".parse().unwrap();
/// assert_eq!(recommend(&parse_cards("Td 2c").unwrap(), up), Action::Hit);
/// ```
pub fn recommend(player_hand: &[Card], dealer_up_card: Card) -> Action {
    lookup(score(player_hand), dealer_up_card).unwrap_or(Action::Stand)
}

/// [`recommend`] plus whether the opening two cards are a double-down spot.
pub fn advise(player_hand: &[Card], dealer_up_card: Card) -> Advice {
    let hand = score(player_hand);
    let action = lookup(hand, dealer_up_card).unwrap_or(Action::Stand);
    let double_down = player_hand.len() == 2 && doubles(hand, dealer_up_card.points());
    Advice { action, double_down }
}

fn doubles(hand: Score, up: u32) -> bool {
    if hand.soft {
        match hand.total {
            13 | 14 => (5..=6).contains(&up),
            15 | 16 => (4..=6).contains(&up),
            17 | 18 => (3..=6).contains(&up),
            _ => false,
        }
    } else {
        match hand.total {
            9 => (3..=6).contains(&up),
            10 => (2..=9).contains(&up),
            11 => (2..=10).contains(&up),
            _ => false,
        }
    }
}
