use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::{inner, popup_area};

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let area = popup_area(f.area(), 60, 60);
    let block = Block::default().title("blackjack-rs: settings").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let logo = r#"
 ____  _            _     _            _
| __ )| | __ _  ___| | __(_) __ _  ___| | __
|  _ \| |/ _` |/ __| |/ /| |/ _` |/ __| |/ /
| |_) | | (_| | (__|   < | | (_| | (__|   <
|____/|_|\__,_|\___|_|\_\/ |\__,_|\___|_|\_\
                       |__/
"#;
    let logo_lines: Vec<Line> = logo
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Green))))
        .collect();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(logo_lines.len() as u16 + 1), Constraint::Min(3)])
        .split(inner(area));
    f.render_widget(Paragraph::new(logo_lines).alignment(Alignment::Center), rows[0]);

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        "Table settings:",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for (i, item) in app.menu_items_display().into_iter().enumerate() {
        let style = if i == app.menu_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(item, style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Apply  [Esc] Cancel  [↑/↓] Move  [+/-] Adjust  [Q] Quit",
        Style::default().add_modifier(Modifier::DIM),
    )));
    lines.push(Line::from(Span::styled(
        "Applying starts a fresh shoe; the win/loss record is kept.",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true }).alignment(Alignment::Center);
    f.render_widget(para, rows[1]);
}
