//! Table configuration shared by the TUI and the headless runner.

use std::path::PathBuf;

/// Deck count used when nothing else is configured. Matches the deck count the
/// reshuffle policy rebuilds with.
pub const DEFAULT_DECKS: usize = 6;
pub const MAX_DECKS: usize = 8;
pub const DEFAULT_STATS_FILE: &str = "blackjack-stats.json";

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct TableConfig {
    pub num_decks: usize,
    /// Fixed shuffle seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Where the win/loss record is kept; `None` keeps it in memory only.
    pub stats_path: Option<PathBuf>,
    /// Let the strategy agent play the player's turns.
    pub autoplay: bool,
    /// Minimum pause between agent decisions when autoplaying.
    pub agent_delay_ms: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            num_decks: DEFAULT_DECKS,
            seed: None,
            stats_path: None,
            autoplay: false,
            agent_delay_ms: 400,
        }
    }
}

impl TableConfig {
    pub fn with_decks(mut self, num_decks: usize) -> Self {
        self.num_decks = num_decks;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_stats_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stats_path = Some(path.into());
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_agent_delay_ms(mut self, delay_ms: u64) -> Self {
        self.agent_delay_ms = delay_ms;
        self
    }

    /// Clamp the deck count into `1..=MAX_DECKS`.
    pub fn validated(mut self) -> Self {
        self.num_decks = self.num_decks.clamp(1, MAX_DECKS);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validated_clamps_deck_count() {
        assert_eq!(TableConfig::default().with_decks(0).validated().num_decks, 1);
        assert_eq!(TableConfig::default().with_decks(20).validated().num_decks, MAX_DECKS);
        assert_eq!(TableConfig::default().validated().num_decks, DEFAULT_DECKS);
    }

    #[test]
    fn builders_set_fields() {
        let cfg = TableConfig::default().with_seed(9).with_stats_path("x.json").with_autoplay(true);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.stats_path, Some(PathBuf::from("x.json")));
        assert!(cfg.autoplay);
    }
}
