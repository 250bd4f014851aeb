use blackjack_rs::agents::{Action, AgentKind, HumanAgent, PlayerAgent, StrategyAgent};
use blackjack_rs::cards::parse_cards;
use blackjack_rs::engine::play_round;
use blackjack_rs::game::{Game, Outcome, RoundPhase};
use blackjack_rs::shoe::Shoe;

fn stacked(cards: &str) -> Game {
    Game::with_shoe(Shoe::stacked(parse_cards(cards).unwrap()))
}

#[test]
fn strategy_agent_plays_a_full_round() {
    // player 12 vs 4 stands; dealer 4+6=10 draws 8 -> 18
    let mut g = stacked("Th 4c 2d 6s 8h");
    let mut bot = StrategyAgent::new();
    assert_eq!(bot.kind(), AgentKind::Bot);
    let outcome = play_round(&mut g, &mut bot).unwrap();
    assert_eq!(outcome, Some(Outcome::DealerWins));
    assert_eq!(g.player_hand().len(), 2);
}

#[test]
fn strategy_agent_busts_when_the_cards_say_so() {
    // player 16 vs 10 hits and draws a king
    let mut g = stacked("Th Tc 6d 7s Kh");
    let outcome = play_round(&mut g, &mut StrategyAgent::new()).unwrap();
    assert_eq!(outcome, Some(Outcome::PlayerBust));
    assert_eq!(g.phase(), RoundPhase::PlayerBust);
    assert_eq!(g.dealer_hand().len(), 2, "dealer does not draw against a bust player");
}

#[test]
fn many_rounds_always_settle() {
    let mut g = Game::seeded(6, 99);
    let mut bot = StrategyAgent::new();
    for _ in 0..500 {
        let outcome = play_round(&mut g, &mut bot).unwrap();
        assert!(outcome.is_some());
        assert!(g.phase().is_terminal());
    }
}

#[test]
fn idle_human_leaves_round_open() {
    let mut g = Game::seeded(6, 4);
    let mut human = HumanAgent::new();
    assert_eq!(play_round(&mut g, &mut human).unwrap(), None);
    assert!(g.phase().player_can_act());

    assert!(human.receive(Action::Stand));
    assert!(human.on_turn(&mut g).unwrap());
    assert!(g.phase().is_terminal());
}

/// Plays basic strategy and notes how many dealer cards it could see on
/// each of its turns.
#[derive(Default)]
struct Watcher {
    inner: StrategyAgent,
    seen: Vec<usize>,
}

impl PlayerAgent for Watcher {
    fn on_turn(
        &mut self,
        engine: &mut dyn blackjack_rs::engine::BlackjackEngine,
    ) -> Result<bool, blackjack_rs::game::RoundError> {
        self.seen.push(engine.visible_dealer_cards().len());
        self.inner.on_turn(engine)
    }
}

#[test]
fn agent_never_sees_the_hole_card() {
    // player 5+4 hits twice before standing on 19 against the dealer's 19
    let mut g = stacked("5h Tc 4d 9s 3c 7d 8h");
    let mut watcher = Watcher::default();
    let outcome = play_round(&mut g, &mut watcher).unwrap();
    assert_eq!(watcher.seen, vec![1, 1, 1]);
    assert_eq!(g.player_hand().total(), 19);
    assert_eq!(outcome, Some(Outcome::Push));
    assert_eq!(g.visible_dealer_cards().len(), 2, "revealed once the round is over");
}
