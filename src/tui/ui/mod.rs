mod menu;
mod table;

use crate::tui::app::{AppState, Scene};
use ratatui::layout::{Constraint, Flex, Layout, Margin, Rect};
use ratatui::prelude::Frame;

pub fn draw(f: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Menu => menu::draw_menu(f, app),
        Scene::Table => table::draw_table(f, app),
    }
}

/// The area inside a one-cell border.
fn inner(area: Rect) -> Rect {
    area.inner(Margin::new(1, 1))
}

/// A box `percent_x` wide and `percent_y` tall, centred in `area`.
fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [area] =
        Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center).areas(area);
    let [area] =
        Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center).areas(area);
    area
}
