// Engine API boundary. Agents drive a round through this trait instead of
// touching `Game` directly. It only exposes what the player may see: the
// player's hand and the dealer's visible cards. The dealer's hole card, the
// shoe and the deal itself stay behind it.

use crate::agents::{Action, PlayerAgent};
use crate::cards::Card;
use crate::game::{Game, Outcome, RoundError, RoundPhase};
use crate::hand::Hand;

/// The player's seat at a round already in progress.
///
/// Dealing is not part of the seat: a new round starts from [`Game`], so an
/// agent can neither restart the round nor read both opening dealer cards.
///
/// ```compile_fail
/// use blackjack_rs::engine::BlackjackEngine;
///
/// fn peek(engine: &mut dyn BlackjackEngine) {
///     let _ = engine.deal_hand();
/// }
/// ```
pub trait BlackjackEngine {
    // Player actions
    fn hit(&mut self) -> Result<Card, RoundError>;
    fn stand(&mut self) -> Result<Outcome, RoundError>;
    fn act(&mut self, action: Action) -> Result<RoundPhase, RoundError>;

    // Queries
    fn phase(&self) -> RoundPhase;
    fn player_hand(&self) -> &Hand;
    fn dealer_up_card(&self) -> Option<Card>;
    fn visible_dealer_cards(&self) -> &[Card];
}

impl BlackjackEngine for Game {
    fn hit(&mut self) -> Result<Card, RoundError> {
        self.hit()
    }
    fn stand(&mut self) -> Result<Outcome, RoundError> {
        self.stand()
    }
    fn act(&mut self, action: Action) -> Result<RoundPhase, RoundError> {
        self.act(action)
    }

    fn phase(&self) -> RoundPhase {
        self.phase()
    }
    fn player_hand(&self) -> &Hand {
        self.player_hand()
    }
    fn dealer_up_card(&self) -> Option<Card> {
        self.dealer_up_card()
    }
    fn visible_dealer_cards(&self) -> &[Card] {
        self.visible_dealer_cards()
    }
}

/// Deal a round and let `agent` play it out.
///
/// Returns `Ok(None)` if the agent passes on a turn (e.g. a human agent with no
/// queued action), leaving the round in progress.
pub fn play_round(
    game: &mut Game,
    agent: &mut dyn PlayerAgent,
) -> Result<Option<Outcome>, RoundError> {
    game.deal_hand()?;
    while game.phase().player_can_act() {
        if !agent.on_turn(game)? {
            return Ok(None);
        }
    }
    Ok(game.phase().outcome())
}
