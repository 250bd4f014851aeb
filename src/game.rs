use crate::agents::Action;
use crate::cards::Card;
use crate::config::TableConfig;
use crate::hand::{calculate_score, Hand, BLACKJACK};
use crate::shoe::{Shoe, ShoeError};
use log::{debug, error};

/// The dealer draws below this total and stands on any total at or above it,
/// soft or hard.
pub const DEALER_STANDS_ON: u32 = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Participant {
    Player,
    Dealer,
}

/// How a finished round ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Outcome {
    PlayerBust,
    DealerBust,
    PlayerWins,
    DealerWins,
    Push,
}

impl Outcome {
    pub fn player_won(self) -> bool {
        matches!(self, Outcome::DealerBust | Outcome::PlayerWins)
    }

    pub fn player_lost(self) -> bool {
        matches!(self, Outcome::PlayerBust | Outcome::DealerWins)
    }

    pub fn message(self) -> &'static str {
        match self {
            Outcome::PlayerBust => "You busted! Dealer wins.",
            Outcome::DealerBust => "Dealer busted! You win!",
            Outcome::PlayerWins => "You win!",
            Outcome::DealerWins => "You lose!",
            Outcome::Push => "It's a tie!",
        }
    }
}

/// Round lifecycle:
/// `Empty -> Dealt -> PlayerTurn -> {PlayerBust | DealerTurn} -> Resolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundPhase {
    Empty,
    Dealt,
    PlayerTurn,
    DealerTurn,
    PlayerBust,
    Resolved(Outcome),
}

impl RoundPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, RoundPhase::PlayerBust | RoundPhase::Resolved(_))
    }

    /// Whether the player may still hit or stand.
    pub fn player_can_act(self) -> bool {
        matches!(self, RoundPhase::Dealt | RoundPhase::PlayerTurn)
    }

    /// A round is in progress between the deal and the final outcome.
    pub fn in_progress(self) -> bool {
        matches!(self, RoundPhase::Dealt | RoundPhase::PlayerTurn | RoundPhase::DealerTurn)
    }

    pub fn outcome(self) -> Option<Outcome> {
        match self {
            RoundPhase::PlayerBust => Some(Outcome::PlayerBust),
            RoundPhase::Resolved(o) => Some(o),
            _ => None,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error("shoe exhausted after {drawn} cards drawn; reshuffle policy did not keep up")]
    EmptyShoe { drawn: usize },
    #[error("cannot {action} while the round is {phase:?}")]
    InvalidHandState { action: &'static str, phase: RoundPhase },
}

impl From<ShoeError> for RoundError {
    fn from(err: ShoeError) -> Self {
        match err {
            ShoeError::Empty { drawn } => RoundError::EmptyShoe { drawn },
        }
    }
}

/// Both opening hands, as returned by [`Game::deal_hand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealtHands {
    pub player: Hand,
    pub dealer: Hand,
}

/// Settle two final totals. A bust player loses before the dealer's total is
/// considered.
pub fn resolve(player_total: u32, dealer_total: u32) -> Outcome {
    if player_total > BLACKJACK {
        Outcome::PlayerBust
    } else if dealer_total > BLACKJACK {
        Outcome::DealerBust
    } else if player_total > dealer_total {
        Outcome::PlayerWins
    } else if player_total < dealer_total {
        Outcome::DealerWins
    } else {
        Outcome::Push
    }
}

/// One blackjack table: a shoe plus the current round's player and dealer
/// hands. Every table is independent; nothing is shared between instances.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Game {
    pub(crate) shoe: Shoe,
    pub(crate) player: Hand,
    pub(crate) dealer: Hand,
    pub(crate) phase: RoundPhase,
}

impl Game {
    /// A table with an entropy-seeded shoe of `num_decks` decks.
    pub fn new(num_decks: usize) -> Self {
        Self::with_shoe(Shoe::new(num_decks))
    }

    /// A table whose shoe shuffles deterministically from `seed`.
    pub fn seeded(num_decks: usize, seed: u64) -> Self {
        Self::with_shoe(Shoe::seeded(num_decks, seed))
    }

    pub fn from_config(config: &TableConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(config.num_decks, seed),
            None => Self::new(config.num_decks),
        }
    }

    pub fn with_shoe(shoe: Shoe) -> Self {
        Self { shoe, player: Hand::new(), dealer: Hand::new(), phase: RoundPhase::Empty }
    }

    /// Start a new round: run the reshuffle check, then deal player, dealer,
    /// player, dealer. Any previous round is discarded.
    ///
    /// ```
    /// use blackjack_rs::game::{Game, RoundPhase};
    ///
    /// let mut game = Game::seeded(6, 1);
    /// let dealt = game.deal_hand().unwrap();
    /// assert_eq!(dealt.player.len(), 2);
    /// assert_eq!(dealt.dealer.len(), 2);
    /// assert_eq!(game.phase(), RoundPhase::Dealt);
    /// assert_eq!(game.cards_remaining(), 312 - 4);
    /// ```
    pub fn deal_hand(&mut self) -> Result<DealtHands, RoundError> {
        self.shoe.reshuffle_if_needed();
        self.reset_round();
        for _ in 0..2 {
            let card = self.draw_or_abort()?;
            self.player.push(card);
            let card = self.draw_or_abort()?;
            self.dealer.push(card);
        }
        self.phase = RoundPhase::Dealt;
        if let Some(up) = self.dealer.first() {
            debug!("dealt player [{}] dealer up {up} ({} left in shoe)", self.player, self.shoe.len());
        }
        Ok(DealtHands { player: self.player.clone(), dealer: self.dealer.clone() })
    }

    /// Draw one card for the player. No bust check is made here.
    pub fn hit(&mut self) -> Result<Card, RoundError> {
        self.hit_for(Participant::Player)
    }

    /// Draw one card onto `who`'s hand. No bust check is made here.
    pub fn hit_for(&mut self, who: Participant) -> Result<Card, RoundError> {
        let allowed = match who {
            Participant::Player => self.phase.player_can_act(),
            Participant::Dealer => self.phase.in_progress(),
        };
        if !allowed {
            return Err(RoundError::InvalidHandState { action: "hit", phase: self.phase });
        }
        let card = self.draw()?;
        match who {
            Participant::Player => {
                self.player.push(card);
                self.phase = RoundPhase::PlayerTurn;
            }
            Participant::Dealer => self.dealer.push(card),
        }
        debug!("{who:?} draws {card}");
        Ok(card)
    }

    /// Draw for the dealer until the hand reaches [`DEALER_STANDS_ON`], then
    /// settle the round against the player's total.
    ///
    /// A dealer turn that runs the shoe dry stays in [`RoundPhase::DealerTurn`].
    pub fn dealer_play(&mut self) -> Result<&Hand, RoundError> {
        self.play_dealer_out()?;
        Ok(&self.dealer)
    }

    fn play_dealer_out(&mut self) -> Result<Outcome, RoundError> {
        if !self.phase.in_progress() {
            return Err(RoundError::InvalidHandState {
                action: "play the dealer hand",
                phase: self.phase,
            });
        }
        self.phase = RoundPhase::DealerTurn;
        while self.dealer.total() < DEALER_STANDS_ON {
            let card = self.draw()?;
            debug!("dealer draws {card}");
            self.dealer.push(card);
        }
        debug!("dealer stands on {}", self.dealer.score());
        Ok(self.settle())
    }

    fn settle(&mut self) -> Outcome {
        let outcome = resolve(self.player.total(), self.dealer.total());
        self.phase = match outcome {
            Outcome::PlayerBust => RoundPhase::PlayerBust,
            _ => RoundPhase::Resolved(outcome),
        };
        debug!(
            "round resolved: player {} vs dealer {} -> {outcome:?}",
            self.player.total(),
            self.dealer.total()
        );
        outcome
    }

    /// End the player's turn. A bust player loses without the dealer drawing;
    /// otherwise the dealer plays out and the round is settled.
    pub fn stand(&mut self) -> Result<Outcome, RoundError> {
        if !self.phase.player_can_act() {
            return Err(RoundError::InvalidHandState { action: "stand", phase: self.phase });
        }
        if self.player.is_bust() {
            self.phase = RoundPhase::PlayerBust;
            return Ok(Outcome::PlayerBust);
        }
        self.play_dealer_out()
    }

    /// Apply a player decision: a hit that busts the player ends the round,
    /// a stand hands over to the dealer.
    pub fn act(&mut self, action: Action) -> Result<RoundPhase, RoundError> {
        match action {
            Action::Hit => {
                self.hit()?;
                if self.player.is_bust() {
                    self.phase = RoundPhase::PlayerBust;
                }
            }
            Action::Stand => {
                self.stand()?;
            }
        }
        Ok(self.phase)
    }

    /// Drop both hands and return to [`RoundPhase::Empty`]. The shoe is left
    /// as it is.
    pub fn reset_round(&mut self) {
        self.player.clear();
        self.dealer.clear();
        self.phase = RoundPhase::Empty;
    }

    pub fn calculate_score(&self, cards: &[Card]) -> u32 {
        calculate_score(cards)
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// The full dealer hand, hole card included.
    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    pub fn dealer_up_card(&self) -> Option<Card> {
        self.dealer.first()
    }

    /// The dealer cards the player is allowed to see: only the up-card until
    /// the dealer's turn starts.
    pub fn visible_dealer_cards(&self) -> &[Card] {
        let cards = self.dealer.as_slice();
        match self.phase {
            RoundPhase::Dealt | RoundPhase::PlayerTurn => &cards[..cards.len().min(1)],
            _ => cards,
        }
    }

    pub fn visible_dealer_score(&self) -> u32 {
        calculate_score(self.visible_dealer_cards())
    }

    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    pub fn drawn_count(&self) -> usize {
        self.shoe.drawn_count()
    }

    pub fn num_decks(&self) -> usize {
        self.shoe.num_decks()
    }

    fn draw(&mut self) -> Result<Card, RoundError> {
        self.shoe.draw().map_err(|err| {
            error!("{err}");
            RoundError::from(err)
        })
    }

    /// A failed opening deal leaves no half-dealt round behind.
    fn draw_or_abort(&mut self) -> Result<Card, RoundError> {
        match self.draw() {
            Ok(card) => Ok(card),
            Err(err) => {
                self.reset_round();
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn stacked(cards: &str) -> Game {
        Game::with_shoe(Shoe::stacked(parse_cards(cards).unwrap()))
    }

    #[test]
    fn deal_alternates_player_and_dealer() {
        let mut g = stacked("Ah 5c Kd 9s");
        let dealt = g.deal_hand().unwrap();
        assert_eq!(dealt.player.to_string(), "Ah Kd");
        assert_eq!(dealt.dealer.to_string(), "5c 9s");
        assert_eq!(g.drawn_count(), 4);
    }

    #[test]
    fn hole_card_hidden_until_dealer_turn() {
        let mut g = stacked("Ah 5c Kd 9s 3h");
        g.deal_hand().unwrap();
        assert_eq!(g.visible_dealer_cards().len(), 1);
        assert_eq!(g.visible_dealer_score(), 5);
        g.stand().unwrap();
        assert_eq!(g.visible_dealer_cards().len(), 3);
        assert_eq!(g.visible_dealer_score(), 17);
    }

    #[test]
    fn hit_does_not_check_for_bust() {
        let mut g = stacked("Th 5c 6d 9s Kc");
        g.deal_hand().unwrap();
        g.hit().unwrap();
        assert_eq!(g.player_hand().total(), 26);
        assert_eq!(g.phase(), RoundPhase::PlayerTurn);
    }

    #[test]
    fn act_hit_ends_round_on_bust() {
        let mut g = stacked("Th 5c 6d 9s Kc");
        g.deal_hand().unwrap();
        assert_eq!(g.act(Action::Hit).unwrap(), RoundPhase::PlayerBust);
        assert_eq!(g.phase().outcome(), Some(Outcome::PlayerBust));
        assert!(matches!(g.hit(), Err(RoundError::InvalidHandState { .. })));
    }

    #[test]
    fn stand_on_bust_hand_skips_dealer() {
        let mut g = stacked("Th 5c 6d 9s Kc");
        g.deal_hand().unwrap();
        g.hit().unwrap();
        assert_eq!(g.stand().unwrap(), Outcome::PlayerBust);
        assert_eq!(g.dealer_hand().len(), 2);
    }

    #[test]
    fn dealer_stands_on_soft_seventeen() {
        let mut g = stacked("Th Ac 8d 6s");
        g.deal_hand().unwrap();
        let dealer = g.dealer_play().unwrap();
        assert_eq!(dealer.len(), 2);
        assert_eq!(dealer.total(), 17);
    }

    #[test]
    fn dealer_play_settles_the_round() {
        let mut g = stacked("Th 5c 9d Ks 3h");
        g.deal_hand().unwrap();
        assert_eq!(g.dealer_play().unwrap().total(), 18);
        assert_eq!(g.phase(), RoundPhase::Resolved(Outcome::PlayerWins));
        assert!(g.phase().is_terminal());
        assert!(matches!(g.hit_for(Participant::Dealer), Err(RoundError::InvalidHandState { .. })));
        assert!(matches!(g.stand(), Err(RoundError::InvalidHandState { .. })));
    }

    #[test]
    fn dealer_play_after_player_hits_past_21() {
        let mut g = stacked("Th 5c 6d 9s Kc 4h");
        g.deal_hand().unwrap();
        g.hit().unwrap();
        g.dealer_play().unwrap();
        assert_eq!(g.phase(), RoundPhase::PlayerBust);
        assert_eq!(g.phase().outcome(), Some(Outcome::PlayerBust));
    }

    #[test]
    fn dealer_hit_allowed_during_round() {
        let mut g = stacked("Th 2c 8d 3s 4h");
        g.deal_hand().unwrap();
        let card = g.hit_for(Participant::Dealer).unwrap();
        assert_eq!(card.to_string(), "4h");
        assert_eq!(g.dealer_hand().total(), 9);
        assert_eq!(g.phase(), RoundPhase::Dealt);
    }

    #[test]
    fn resolve_orders_comparisons() {
        assert_eq!(resolve(22, 25), Outcome::PlayerBust);
        assert_eq!(resolve(12, 22), Outcome::DealerBust);
        assert_eq!(resolve(20, 19), Outcome::PlayerWins);
        assert_eq!(resolve(18, 19), Outcome::DealerWins);
        assert_eq!(resolve(19, 19), Outcome::Push);
    }

    #[test]
    fn failed_deal_leaves_empty_round() {
        let mut g = stacked("Ah 5c Kd");
        assert_eq!(g.deal_hand(), Err(RoundError::EmptyShoe { drawn: 3 }));
        assert_eq!(g.phase(), RoundPhase::Empty);
        assert!(g.player_hand().is_empty());
        assert!(g.dealer_hand().is_empty());
    }

    #[test]
    fn reset_clears_hands_but_keeps_shoe() {
        let mut g = Game::seeded(1, 5);
        g.deal_hand().unwrap();
        g.reset_round();
        assert_eq!(g.phase(), RoundPhase::Empty);
        assert!(g.player_hand().is_empty());
        assert_eq!(g.cards_remaining(), 48);
    }
}
