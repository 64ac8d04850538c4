use super::Frame;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const CLASS_BLOCK_TITLE: &str = "Class";
const SEARCH_BLOCK_TITLE: &str = "Search";

/// Render the class selector and the search box side by side.
///
pub fn filters(frame: &mut Frame, size: Rect, state: &mut State) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(size);

    class_selector(frame, columns[0], state);
    search_box(frame, columns[1], state);
}

fn focused_block(title: &'static str, focused: bool, state: &State) -> Block<'static> {
    let theme = state.get_theme();
    let block = Block::default().borders(Borders::ALL);
    if focused {
        block
            .border_style(styling::active_block_border_style(theme))
            .title(Span::styled(title, styling::active_block_title_style()))
    } else {
        block
            .border_style(styling::normal_block_border_style(theme))
            .title(title)
    }
}

fn class_selector(frame: &mut Frame, size: Rect, state: &mut State) {
    let focused = state.current_focus() == Focus::Classes;
    let theme = state.get_theme();
    let options = state.get_class_options().len();
    let position = format!(" {}/{}", state.get_class_index() + 1, options);
    let text_style = if focused {
        styling::card_title_style(theme)
    } else {
        styling::normal_text_style(theme)
    };
    let line = Line::from(vec![
        Span::styled("‹ ", styling::muted_text_style(theme)),
        Span::styled(state.get_selected_class().to_string(), text_style),
        Span::styled(" ›", styling::muted_text_style(theme)),
        Span::styled(position, styling::muted_text_style(theme)),
    ]);
    let block = focused_block(CLASS_BLOCK_TITLE, focused, state);
    frame.render_widget(Paragraph::new(line).block(block), size);
}

fn search_box(frame: &mut Frame, size: Rect, state: &mut State) {
    let focused = state.current_focus() == Focus::Search;
    let block = focused_block(SEARCH_BLOCK_TITLE, focused, state);
    let text_style = styling::normal_text_style(state.get_theme());
    let textarea = state.get_search_input();
    textarea.set_block(block);
    textarea.set_style(text_style);
    textarea.set_cursor_line_style(text_style);
    frame.render_widget(textarea.widget(), size);
}
