use crate::cards::Card;
use crate::game::RoundPhase;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::{inner, popup_area};

const CARD_WIDTH: u16 = 7;

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Length(6), // dealer
            Constraint::Length(6), // player
            Constraint::Length(5), // status
            Constraint::Min(3),    // log
        ])
        .split(f.area());

    let record = app.record();
    let header_lines = vec![
        Line::from(format!(
            "Wins: {}   Losses: {}   Pushes: {}",
            record.wins, record.losses, record.pushes
        )),
        Line::from(format!(
            "Shoe: {} left • {} drawn • {} decks   Autoplay: {}",
            app.game.cards_remaining(),
            app.game.drawn_count(),
            app.game.num_decks(),
            if app.autoplay { "on" } else { "off" },
        )),
    ];
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("blackjack-rs").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Dealer: the hole card stays face down until the player is done.
    let dealer_cards = app.dealer_cards_for_display();
    let dealer_title = if dealer_cards.is_empty() {
        "Dealer".to_string()
    } else {
        format!("Dealer: {}", app.game.visible_dealer_score())
    };
    draw_hand(f, chunks[1], dealer_title, &dealer_cards, None);

    let player = app.game.player_hand();
    let player_cards: Vec<Option<Card>> = player.as_slice().iter().copied().map(Some).collect();
    let player_title =
        if player.is_empty() { "You".to_string() } else { format!("You: {}", player.score()) };
    let border = match app.game.phase() {
        RoundPhase::Dealt | RoundPhase::PlayerTurn => Some(Color::Yellow),
        RoundPhase::PlayerBust => Some(Color::Red),
        RoundPhase::Resolved(o) if o.player_won() => Some(Color::Green),
        RoundPhase::Resolved(o) if o.player_lost() => Some(Color::Red),
        _ => None,
    };
    draw_hand(f, chunks[2], player_title, &player_cards, border);

    draw_status(f, chunks[3], app);

    let log: Vec<Line> = app.log_lines().into_iter().map(Line::from).collect();
    let log_para = Paragraph::new(log)
        .style(Style::default().add_modifier(Modifier::DIM))
        .block(Block::default().title("Log").borders(Borders::ALL));
    f.render_widget(log_para, chunks[4]);

    if app.help_open() {
        draw_help(f);
    }
}

fn draw_hand(
    f: &mut Frame,
    area: Rect,
    title: String,
    cards: &[Option<Card>],
    border: Option<Color>,
) {
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    f.render_widget(block, area);
    let hand_area = inner(area);
    let fits = (hand_area.width / CARD_WIDTH) as usize;
    if cards.is_empty() || fits == 0 {
        return;
    }
    let shown = cards.len().min(fits);
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..shown).map(|_| Constraint::Length(CARD_WIDTH)).collect::<Vec<_>>())
        .split(hand_area);
    for (slot, card) in slots.iter().zip(cards) {
        render_card_widget(f, *slot, *card);
    }
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(inner(area));

    let mut left = vec![Line::from(Span::styled(
        app.message.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(advice) = app.hint() {
        let mut hint = format!("Strategy: {}", advice.action.label());
        if advice.double_down {
            hint.push_str(" (double if allowed)");
        }
        left.push(Line::from(Span::styled(hint, Style::default().fg(Color::Cyan))));
    }
    if let Some(err) = app.action_error() {
        left.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    let can_act = app.game.phase().player_can_act() && !app.autoplay;
    let can_deal = !app.game.phase().in_progress();
    let key_style = |enabled: bool| {
        if enabled {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    };
    let right = vec![
        Line::from(vec![
            Span::styled("Space deal", key_style(can_deal)),
            Span::raw(" • "),
            Span::styled("H hit", key_style(can_act)),
            Span::raw(" • "),
            Span::styled("S stand", key_style(can_act)),
        ]),
        Line::from("R reset • A autoplay"),
        Line::from("? help • M menu • Q quit"),
    ];
    f.render_widget(Paragraph::new(left).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );
}

fn draw_help(f: &mut Frame) {
    let area = popup_area(f.area(), 60, 70);
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Table:", bold)),
        Line::from("- Space / D: deal a new round"),
        Line::from("- H: hit"),
        Line::from("- S: stand (dealer draws to 17)"),
        Line::from("- R: reset the round"),
        Line::from("- A: toggle autoplay (basic strategy)"),
        Line::from(""),
        Line::from(Span::styled("Menu:", bold)),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply"),
        Line::from("- Esc: cancel"),
        Line::from(""),
        Line::from("Q quits. Close help: ? or Esc"),
    ];
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner(area));
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>) {
    let content = match card {
        Some(c) => {
            let color = if c.suit().is_red() { Color::Red } else { Color::White };
            Line::from(Span::styled(
                format!("{}{}", c.rank().label(), c.suit().glyph()),
                Style::default().fg(color),
            ))
        }
        None => Line::from(Span::styled("??", Style::default().fg(Color::DarkGray))),
    };
    let border = if card.is_some() { Color::Cyan } else { Color::DarkGray };
    let block = Block::default().borders(Borders::ALL).border_style(Style::default().fg(border));
    let card_inner = inner(area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center), card_inner);
}
