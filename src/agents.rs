//! Agents: who decides the player's moves.
//!
//! `PlayerAgent` is the small trait front ends drive on every turn. The
//! `StrategyAgent` plays basic strategy on its own; the `HumanAgent` applies
//! whatever intent the UI queued. Both see the round only through
//! [`BlackjackEngine`], so neither can peek at the hole card or the shoe.

use crate::engine::BlackjackEngine;
use crate::game::RoundError;
use std::time::{Duration, Instant};

mod basic_strategy;

pub use basic_strategy::{advise, recommend, Advice};

/// Kinds of agents that can control the player's seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AgentKind {
    Human,
    Bot,
}

/// A player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Hit,
    Stand,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::Hit => "Hit",
            Action::Stand => "Stand",
        }
    }
}

/// Controls the player's seat when it is the player's turn.
pub trait PlayerAgent {
    /// Called while the player may act. Returns `true` if an action was taken.
    fn on_turn(&mut self, engine: &mut dyn BlackjackEngine) -> Result<bool, RoundError>;
    /// The kind of this agent (human, bot, etc.).
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }
    /// Optionally receive an action intent; default is to ignore and return false.
    fn receive(&mut self, _action: Action) -> bool {
        false
    }
}

/// Executes user-intended actions on the player's turn.
#[derive(Debug, Default)]
pub struct HumanAgent {
    pending: Option<Action>,
}

impl HumanAgent {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn pending(&self) -> Option<Action> {
        self.pending
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}

impl PlayerAgent for HumanAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }
    fn receive(&mut self, action: Action) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(action);
        true
    }
    fn on_turn(&mut self, engine: &mut dyn BlackjackEngine) -> Result<bool, RoundError> {
        if !engine.phase().player_can_act() {
            self.pending = None;
            return Ok(false);
        }
        match self.pending.take() {
            Some(action) => engine.act(action).map(|_| true),
            None => Ok(false),
        }
    }
}

/// Plays every decision from the basic-strategy table.
#[derive(Debug, Default)]
pub struct StrategyAgent {
    min_delay: Duration,
    next_action_at: Option<Instant>,
}

impl StrategyAgent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pause at least `delay_ms` before each decision (for watchable autoplay).
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.min_delay = Duration::from_millis(delay_ms);
        self
    }
}

impl PlayerAgent for StrategyAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Bot
    }
    fn on_turn(&mut self, engine: &mut dyn BlackjackEngine) -> Result<bool, RoundError> {
        if !engine.phase().player_can_act() {
            self.next_action_at = None;
            return Ok(false);
        }
        let Some(up) = engine.dealer_up_card() else {
            return Ok(false);
        };
        if !self.min_delay.is_zero() {
            let now = Instant::now();
            match self.next_action_at {
                None => {
                    self.next_action_at = Some(now + self.min_delay);
                    return Ok(false);
                }
                Some(next) if now < next => return Ok(false),
                Some(_) => {}
            }
        }
        self.next_action_at = None;

        let action = recommend(engine.player_hand().as_slice(), up);
        engine.act(action).map(|_| true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::game::{Game, RoundPhase};
    use crate::shoe::Shoe;
    use std::thread;

    fn stacked(cards: &str) -> Game {
        Game::with_shoe(Shoe::stacked(parse_cards(cards).unwrap()))
    }

    #[test]
    fn human_agent_applies_one_queued_action() {
        let mut g = stacked("Th 5c 6d 9s 2c");
        g.deal_hand().unwrap();
        let mut human = HumanAgent::new();
        assert!(!human.on_turn(&mut g).unwrap());
        assert!(human.receive(Action::Hit));
        assert!(!human.receive(Action::Stand), "second intent is refused while one is pending");
        assert!(human.on_turn(&mut g).unwrap());
        assert_eq!(g.player_hand().total(), 18);
        assert!(human.pending().is_none());
    }

    #[test]
    fn human_agent_drops_intent_after_round_ends() {
        let mut g = Game::seeded(1, 3);
        let mut human = HumanAgent::new();
        human.receive(Action::Hit);
        assert!(!human.on_turn(&mut g).unwrap());
        assert!(human.pending().is_none());
    }

    #[test]
    fn strategy_agent_follows_table() {
        // player 16 vs dealer 7 -> hit
        let mut g = stacked("Th 7c 6d 9s 5h Kc");
        g.deal_hand().unwrap();
        let mut bot = StrategyAgent::new();
        assert!(bot.on_turn(&mut g).unwrap());
        assert_eq!(g.player_hand().total(), 21);
        // 21 -> stand, dealer 16 draws and busts
        assert!(bot.on_turn(&mut g).unwrap());
        assert!(g.phase().is_terminal());
    }

    #[test]
    fn strategy_agent_waits_out_its_delay() {
        let mut g = stacked("Th 7c 6d 9s 5h");
        g.deal_hand().unwrap();
        let mut bot = StrategyAgent::new().with_delay_ms(15);
        assert!(!bot.on_turn(&mut g).unwrap(), "first tick only schedules");
        assert_eq!(g.phase(), RoundPhase::Dealt);
        thread::sleep(Duration::from_millis(20));
        assert!(bot.on_turn(&mut g).unwrap());
        assert_eq!(g.phase(), RoundPhase::PlayerTurn);
    }
}
