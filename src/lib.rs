//! blackjack-rs: a single-player blackjack rules engine
//!
//! Goals:
//! - Multi-deck shoe with a fixed reshuffle policy
//! - Round engine: deal, hit, stand, dealer play to 17, settle
//! - Basic-strategy agent that sees only what a player at the table sees
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: play one round
//! ```
//! use blackjack_rs::cards::parse_cards;
//! use blackjack_rs::game::{Game, Outcome};
//! use blackjack_rs::shoe::Shoe;
//!
//! // Draw order is player, dealer, player, dealer, then dealer draws.
//! let shoe = Shoe::stacked(parse_cards("Ah 5c Kd 9s 4h").unwrap());
//! let mut game = Game::with_shoe(shoe);
//!
//! let dealt = game.deal_hand().unwrap();
//! assert_eq!(dealt.player.total(), 21);
//! assert_eq!(game.visible_dealer_score(), 5);
//!
//! assert_eq!(game.stand().unwrap(), Outcome::PlayerWins);
//! assert_eq!(game.dealer_hand().total(), 18);
//! ```
//!
//! ## Basic strategy
//! ```
//! use blackjack_rs::agents::{recommend, Action};
//! use blackjack_rs::cards::{parse_cards, Card};
//!
//! let hand = parse_cards("Th 6c").unwrap();
//! let up: Card = "7d".parse().unwrap();
//! assert_eq!(recommend(&hand, up), Action::Hit);
//! ```
//!
//! ## TUI
//! Run the interactive table with:
//! ```sh
//! cargo run --bin blackjack-rs
//! ```
//! or play a batch of strategy rounds without a terminal UI:
//! ```sh
//! cargo run --bin blackjack-rs -- --headless --rounds 1000
//! ```

pub mod agents;
pub mod cards;
pub mod config;
pub mod engine;
pub mod game;
pub mod hand;
pub mod shoe;
pub mod stats;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
