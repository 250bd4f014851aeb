use blackjack_rs::config::TableConfig;
use blackjack_rs::game::RoundPhase;
use blackjack_rs::stats::Scoreboard;
use blackjack_rs::tui::app::{AppState, InputAction, Scene};
use blackjack_rs::tui::controller::handle_key;
use crossterm::event::KeyCode;

fn setup_table_app(seed: u64) -> AppState {
    AppState::new(TableConfig::default().with_seed(seed), Scoreboard::in_memory())
}

#[test]
fn menu_navigation_and_apply() {
    let mut app = setup_table_app(1);
    assert!(matches!(app.scene, Scene::Table));
    let _ = app.handle_input(InputAction::ToggleMenu);
    assert!(matches!(app.scene, Scene::Menu));
    let start = app.menu_index;
    let _ = app.handle_input(InputAction::MenuNext);
    assert_ne!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuPrev);
    assert_eq!(app.menu_index, start);

    let _ = app.handle_input(InputAction::MenuDec);
    let _ = app.handle_input(InputAction::MenuApply);
    assert!(matches!(app.scene, Scene::Table));
    assert_eq!(app.config.num_decks, 5);
    assert_eq!(app.game.cards_remaining(), 5 * 52);
}

#[test]
fn menu_cancel_keeps_table() {
    let mut app = setup_table_app(1);
    let _ = app.handle_input(InputAction::ToggleMenu);
    let _ = app.handle_input(InputAction::MenuInc);
    let _ = app.handle_input(InputAction::MenuCancel);
    assert!(matches!(app.scene, Scene::Table));
    assert_eq!(app.config.num_decks, 6);
}

#[test]
fn help_toggle() {
    let mut app = setup_table_app(1);
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(app.help_open());
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(!app.help_open());
}

#[test]
fn keys_drive_a_round() {
    let mut app = setup_table_app(8);
    assert!(!handle_key(&mut app, KeyCode::Char(' ')));
    assert!(app.game.phase().player_can_act());
    assert_eq!(app.message, "Your turn. Hit or Stand?");
    assert!(app.hint().is_some());

    assert!(!handle_key(&mut app, KeyCode::Char('s')));
    assert!(app.game.phase().is_terminal());
    assert_eq!(app.record().rounds(), 1);
    assert!(app.hint().is_none());
    assert!(app.dealer_cards_for_display().iter().all(Option::is_some));
}

#[test]
fn help_swallows_table_keys() {
    let mut app = setup_table_app(3);
    handle_key(&mut app, KeyCode::Char('?'));
    handle_key(&mut app, KeyCode::Char(' '));
    assert_eq!(app.game.phase(), RoundPhase::Empty);
    handle_key(&mut app, KeyCode::Esc);
    assert!(!app.help_open());
}

#[test]
fn reset_clears_round() {
    let mut app = setup_table_app(2);
    handle_key(&mut app, KeyCode::Char(' '));
    handle_key(&mut app, KeyCode::Char('r'));
    assert_eq!(app.game.phase(), RoundPhase::Empty);
    assert!(app.game.player_hand().is_empty());
    assert_eq!(app.record().rounds(), 0);
}

#[test]
fn autoplay_blocks_manual_actions() {
    let mut app = setup_table_app(6);
    handle_key(&mut app, KeyCode::Char(' '));
    handle_key(&mut app, KeyCode::Char('a'));
    assert!(app.autoplay);
    assert!(!app.handle_input(InputAction::Hit));
}

#[test]
fn quit_key() {
    let mut app = setup_table_app(1);
    assert!(handle_key(&mut app, KeyCode::Char('q')));
}

#[test]
fn menu_keys_edit_and_apply() {
    let mut app = setup_table_app(4);
    handle_key(&mut app, KeyCode::Char('M'));
    assert!(matches!(app.scene, Scene::Menu));
    handle_key(&mut app, KeyCode::Char('+'));
    handle_key(&mut app, KeyCode::Down);
    assert_eq!(app.menu_index, 1);
    handle_key(&mut app, KeyCode::Enter);
    assert!(matches!(app.scene, Scene::Table));
    assert_eq!(app.config.num_decks, 7);
}

#[test]
fn uppercase_table_keys_work() {
    let mut app = setup_table_app(10);
    handle_key(&mut app, KeyCode::Char('D'));
    assert!(app.game.phase().player_can_act());
    handle_key(&mut app, KeyCode::Char('S'));
    assert!(app.game.phase().is_terminal());
}
