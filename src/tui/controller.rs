use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Draw, read keys and tick the agents until the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut next_tick = Instant::now() + tick_rate;
    loop {
        terminal.draw(|f| ui::draw(f, app))?;
        if let Some(code) = next_key(next_tick.saturating_duration_since(Instant::now()))? {
            if handle_key(app, code) {
                return Ok(());
            }
        }
        if Instant::now() >= next_tick {
            app.agents_on_turn();
            next_tick = Instant::now() + tick_rate;
        }
    }
}

fn next_key(timeout: Duration) -> io::Result<Option<KeyCode>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(key.code),
        _ => None,
    })
}

fn menu_action(code: KeyCode) -> Option<InputAction> {
    Some(match code {
        KeyCode::Up => InputAction::MenuPrev,
        KeyCode::Down => InputAction::MenuNext,
        KeyCode::Right | KeyCode::Char('+' | '=') => InputAction::MenuInc,
        KeyCode::Left | KeyCode::Char('-' | '_') => InputAction::MenuDec,
        KeyCode::Enter => InputAction::MenuApply,
        KeyCode::Esc => InputAction::MenuCancel,
        KeyCode::Char('m' | 'M') => InputAction::ToggleMenu,
        _ => return None,
    })
}

fn table_action(code: KeyCode) -> Option<InputAction> {
    let KeyCode::Char(c) = code else {
        return None;
    };
    Some(match c.to_ascii_lowercase() {
        ' ' | 'd' => InputAction::Deal,
        'h' => InputAction::Hit,
        's' => InputAction::Stand,
        'r' => InputAction::Reset,
        'a' => InputAction::ToggleAutoplay,
        'm' => InputAction::ToggleMenu,
        _ => return None,
    })
}

/// Apply one key press. Returns `true` when the app should quit.
///
/// While help is open only `?` and Esc are live.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    let action = match code {
        KeyCode::Char('?') => Some(InputAction::ToggleHelp),
        KeyCode::Esc if app.help_open() => Some(InputAction::ToggleHelp),
        _ if app.help_open() => None,
        KeyCode::Char('q' | 'Q') => return true,
        _ => match app.scene {
            Scene::Menu => menu_action(code),
            Scene::Table => table_action(code),
        },
    };
    if let Some(action) = action {
        // a queued hit or stand is played straight away instead of on the next tick
        if app.handle_input(action) && matches!(action, InputAction::Hit | InputAction::Stand) {
            app.agents_on_turn();
        }
    }
    false
}
