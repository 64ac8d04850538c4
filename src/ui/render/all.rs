use super::{cards, filters, footer, log, Frame};
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

const LOG_HEIGHT: u16 = 8;

/// Render all widgets according to state. The whole area is repainted on
/// every call.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let mut constraints = vec![Constraint::Length(3), Constraint::Min(3)];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_HEIGHT));
    }
    constraints.push(Constraint::Length(1));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.size());

    filters(frame, rows[0], state);
    cards(frame, rows[1], state);
    if state.is_log_visible() {
        log(frame, rows[2], state);
    }
    footer(frame, rows[rows.len() - 1], state);
}
