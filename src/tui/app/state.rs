use crate::agents::{advise, Action, Advice, HumanAgent, PlayerAgent, StrategyAgent};
use crate::cards::Card;
use crate::config::TableConfig;
use crate::game::{Game, RoundError};
use crate::stats::{Record, Scoreboard};
use crate::tui::logger::{recent_lines, LogBuffer};
use log::{error, info};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    ToggleAutoplay,
    Deal,
    Hit,
    Stand,
    Reset,
}

pub const WELCOME: &str = "Welcome to the table! Press Space to deal.";
pub const YOUR_TURN: &str = "Your turn. Hit or Stand?";
pub const RESET: &str = "Game reset. Press Space to deal!";

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    // Core game engine instance
    pub game: Game,
    pub config: TableConfig,
    pub scoreboard: Scoreboard,
    pub message: String,
    pub autoplay: bool,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_num_decks: usize,
    pub cfg_autoplay: bool,
    pub cfg_agent_delay_ms: u64,
    pub(crate) human: HumanAgent,
    pub(crate) bot: StrategyAgent,
    round_recorded: bool,
    round_ended_at: Option<Instant>,
    help_open: bool,
    action_error: Option<String>,
    log: Option<LogBuffer>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TableConfig::default(), Scoreboard::in_memory())
    }
}

impl AppState {
    pub const LOG_LINES: usize = 6;

    pub fn new(config: TableConfig, scoreboard: Scoreboard) -> Self {
        let config = config.validated();
        Self {
            scene: Scene::Table,
            game: Game::from_config(&config),
            scoreboard,
            message: WELCOME.to_string(),
            autoplay: config.autoplay,
            menu_index: 0,
            cfg_num_decks: config.num_decks,
            cfg_autoplay: config.autoplay,
            cfg_agent_delay_ms: config.agent_delay_ms,
            human: HumanAgent::new(),
            bot: StrategyAgent::new().with_delay_ms(config.agent_delay_ms),
            round_recorded: true,
            round_ended_at: None,
            help_open: false,
            action_error: None,
            log: None,
            config,
        }
    }

    /// Show lines from this buffer in the log panel.
    pub fn with_log(mut self, buffer: LogBuffer) -> Self {
        self.log = Some(buffer);
        self
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    pub fn record(&self) -> Record {
        self.scoreboard.record()
    }

    pub fn log_lines(&self) -> Vec<String> {
        self.log.as_ref().map(|b| recent_lines(b, Self::LOG_LINES)).unwrap_or_default()
    }

    /// Basic-strategy hint for the player's current hand, while they can act.
    pub fn hint(&self) -> Option<Advice> {
        if !self.game.phase().player_can_act() {
            return None;
        }
        let up = self.game.dealer_up_card()?;
        Some(advise(self.game.player_hand().as_slice(), up))
    }

    /// Dealer cards as the player sees them; `None` is the face-down hole card.
    pub fn dealer_cards_for_display(&self) -> Vec<Option<Card>> {
        let all = self.game.dealer_hand().as_slice();
        let visible = self.game.visible_dealer_cards();
        all.iter()
            .enumerate()
            .map(|(i, c)| if i < visible.len() { Some(*c) } else { None })
            .collect()
    }

    fn autoplay_pause(&self) -> Duration {
        Duration::from_millis(self.config.agent_delay_ms.saturating_mul(3))
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::ToggleAutoplay => {
                if self.scene == Scene::Table {
                    self.autoplay = !self.autoplay;
                    self.human.clear();
                    info!("autoplay {}", if self.autoplay { "on" } else { "off" });
                }
                false
            }
            InputAction::Deal => self.scene == Scene::Table && self.deal(),
            InputAction::Hit => self.queue_action(Action::Hit),
            InputAction::Stand => self.queue_action(Action::Stand),
            InputAction::Reset => {
                if self.scene == Scene::Table {
                    self.reset();
                }
                false
            }
        }
    }

    /// Deal a new round. Ignored while a round is still in progress.
    pub fn deal(&mut self) -> bool {
        if self.game.phase().in_progress() {
            return false;
        }
        self.action_error = None;
        self.human.clear();
        match self.game.deal_hand() {
            Ok(_) => {
                self.round_recorded = false;
                self.round_ended_at = None;
                self.message = YOUR_TURN.to_string();
                true
            }
            Err(err) => {
                self.on_error(err);
                false
            }
        }
    }

    fn queue_action(&mut self, action: Action) -> bool {
        if self.scene != Scene::Table || self.autoplay || !self.game.phase().player_can_act() {
            return false;
        }
        self.action_error = None;
        self.human.receive(action)
    }

    pub fn reset(&mut self) {
        self.game.reset_round();
        self.human.clear();
        self.round_recorded = true;
        self.round_ended_at = None;
        self.action_error = None;
        self.message = RESET.to_string();
    }

    /// Drive whichever agent holds the player's seat, then settle a finished
    /// round.
    pub fn agents_on_turn(&mut self) {
        if self.scene != Scene::Table {
            return;
        }
        if self.autoplay && !self.game.phase().in_progress() {
            let ready = self.round_ended_at.map(|at| at.elapsed() >= self.autoplay_pause());
            if ready.unwrap_or(true) {
                self.deal();
            }
        }
        let agent: &mut dyn PlayerAgent =
            if self.autoplay { &mut self.bot } else { &mut self.human };
        if let Err(err) = agent.on_turn(&mut self.game) {
            self.on_error(err);
        }
        self.settle();
    }

    fn settle(&mut self) {
        if self.round_recorded {
            return;
        }
        let Some(outcome) = self.game.phase().outcome() else {
            return;
        };
        self.round_recorded = true;
        self.round_ended_at = Some(Instant::now());
        self.scoreboard.push(outcome);
        self.message = outcome.message().to_string();
        info!(
            "player {} vs dealer {}: {outcome:?}",
            self.game.player_hand().total(),
            self.game.dealer_hand().total()
        );
    }

    fn on_error(&mut self, err: RoundError) {
        error!("{err}");
        self.action_error = Some(err.to_string());
        if matches!(err, RoundError::EmptyShoe { .. }) {
            self.game.reset_round();
            self.round_recorded = true;
            self.autoplay = false;
            self.message = "Shoe exhausted. Open the menu (M) and apply to rebuild the table."
                .to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RoundPhase;

    #[test]
    fn hit_ignored_before_deal() {
        let mut app = AppState::default();
        assert!(!app.handle_input(InputAction::Hit));
        app.agents_on_turn();
        assert_eq!(app.game.phase(), RoundPhase::Empty);
        assert_eq!(app.message, WELCOME);
    }

    #[test]
    fn deal_is_noop_while_round_in_progress() {
        let mut app = AppState::new(TableConfig::default().with_seed(11), Scoreboard::in_memory());
        assert!(app.deal());
        let hand = app.game.player_hand().clone();
        let drawn = app.game.drawn_count();
        assert!(!app.deal());
        assert_eq!(app.game.player_hand(), &hand);
        assert_eq!(app.game.drawn_count(), drawn);
    }

    #[test]
    fn standing_settles_and_records_once() {
        let mut app = AppState::new(TableConfig::default().with_seed(5), Scoreboard::in_memory());
        app.deal();
        assert!(app.handle_input(InputAction::Stand));
        app.agents_on_turn();
        assert!(app.game.phase().is_terminal());
        assert_eq!(app.record().rounds(), 1);
        app.agents_on_turn();
        assert_eq!(app.record().rounds(), 1);
        assert_ne!(app.message, YOUR_TURN);
    }

    #[test]
    fn hole_card_masked_during_player_turn() {
        let mut app = AppState::new(TableConfig::default().with_seed(2), Scoreboard::in_memory());
        app.deal();
        let shown = app.dealer_cards_for_display();
        assert_eq!(shown.len(), 2);
        assert!(shown[0].is_some());
        assert!(shown[1].is_none());
    }
}
