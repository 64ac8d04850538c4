use super::Frame;
use crate::state::{Focus, Phase, State};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the key help for the focused control.
///
fn controls_text(focus: Focus) -> &'static str {
    match focus {
        Focus::Cards => {
            " j/k: cards, h/l: class, Enter: open, /: search, c: classes, L: log, Tab: focus, q: quit"
        }
        Focus::Classes => " ←→/hjkl: change class, Enter/Esc: back to cards, Tab: focus",
        Focus::Search => " Type to search, Backspace: delete, Enter/Esc: back to cards, Tab: focus",
    }
}

fn focus_label(focus: Focus) -> &'static str {
    match focus {
        Focus::Cards => "CARDS",
        Focus::Classes => "CLASS",
        Focus::Search => "SEARCH",
    }
}

/// Render footer with the key help on the left and the dataset origin on the
/// right.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let focus = state.current_focus();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(40)])
        .split(size);

    let controls = Line::from(vec![
        Span::styled(
            format!("{}:", focus_label(focus)),
            Style::default()
                .fg(theme.highlight_fg.to_color())
                .bg(theme.highlight_bg.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            controls_text(focus),
            Style::default().fg(theme.warning.to_color()),
        ),
    ]);
    frame.render_widget(Paragraph::new(controls), columns[0]);

    let status_style = match state.get_phase() {
        Phase::Loading => Style::default().fg(theme.text_muted.to_color()),
        Phase::Loaded => Style::default().fg(theme.success.to_color()),
        Phase::LoadFailed => Style::default().fg(theme.error.to_color()),
    };
    let status = Paragraph::new(Line::from(Span::styled(
        state.get_source().to_string(),
        status_style,
    )))
    .alignment(Alignment::Right);
    frame.render_widget(status, columns[1]);
}
