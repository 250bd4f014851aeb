use crate::agents::StrategyAgent;
use crate::config::MAX_DECKS;
use crate::game::Game;
use log::info;

use super::AppState;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Decks,
    Autoplay,
    AgentDelayMs,
}

const MENU_ITEMS: [MenuItem; 3] = [MenuItem::Decks, MenuItem::Autoplay, MenuItem::AgentDelayMs];

const MAX_AGENT_DELAY_MS: u64 = 3000;

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Decks => format!("Decks in shoe: {}", app.cfg_num_decks),
            MenuItem::Autoplay => {
                format!("Autoplay: {}", if app.cfg_autoplay { "on" } else { "off" })
            }
            MenuItem::AgentDelayMs => format!("Agent delay (ms): {}", app.cfg_agent_delay_ms),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Decks => {
                if app.cfg_num_decks < MAX_DECKS {
                    app.cfg_num_decks += 1;
                }
            }
            MenuItem::Autoplay => app.cfg_autoplay = !app.cfg_autoplay,
            MenuItem::AgentDelayMs => {
                app.cfg_agent_delay_ms = (app.cfg_agent_delay_ms + 100).min(MAX_AGENT_DELAY_MS);
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Decks => {
                if app.cfg_num_decks > 1 {
                    app.cfg_num_decks -= 1;
                }
            }
            MenuItem::Autoplay => app.cfg_autoplay = !app.cfg_autoplay,
            MenuItem::AgentDelayMs => {
                app.cfg_agent_delay_ms = app.cfg_agent_delay_ms.saturating_sub(100);
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        match self.scene {
            super::Scene::Menu => self.scene = super::Scene::Table,
            _ => self.open_menu(),
        }
    }

    pub fn open_menu(&mut self) {
        self.close_help();
        self.menu_index = 0;
        self.cfg_num_decks = self.config.num_decks;
        self.cfg_autoplay = self.autoplay;
        self.cfg_agent_delay_ms = self.config.agent_delay_ms;
        self.scene = super::Scene::Menu;
    }

    /// Rebuild the table from the edited settings. The win/loss record carries
    /// over; the current round does not.
    pub fn apply_menu(&mut self) {
        self.config = self
            .config
            .clone()
            .with_decks(self.cfg_num_decks)
            .with_autoplay(self.cfg_autoplay)
            .with_agent_delay_ms(self.cfg_agent_delay_ms)
            .validated();
        self.game = Game::from_config(&self.config);
        self.bot = StrategyAgent::new().with_delay_ms(self.config.agent_delay_ms);
        self.autoplay = self.config.autoplay;
        self.reset();
        self.message = format!("New {}-deck shoe. Press Space to deal.", self.config.num_decks);
        info!("table rebuilt with {} decks", self.config.num_decks);
        self.scene = super::Scene::Table;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = super::Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
