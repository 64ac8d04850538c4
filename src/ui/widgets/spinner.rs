use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

/// Frames of the loading animation, advanced once per tick.
///
pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const LOADING_TEXT: &str = "Loading projects...";

/// Return a paragraph with the current spinner frame, vertically centred in
/// an area of the given height.
///
pub fn widget(state: &State, height: u16) -> Paragraph<'static> {
    let theme = state.get_theme();
    let frame = FRAMES[state.get_spinner_index() % FRAMES.len()];
    let mut lines: Vec<Line> = (0..height.saturating_sub(2) / 2)
        .map(|_| Line::from(""))
        .collect();
    lines.push(Line::from(vec![
        Span::styled(frame, styling::card_title_style(theme)),
        Span::raw(" "),
        Span::styled(LOADING_TEXT, styling::normal_text_style(theme)),
    ]));
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
}
