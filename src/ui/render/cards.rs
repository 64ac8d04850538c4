use super::Frame;
use crate::cards::{CardView, Listing};
use crate::state::{Focus, State};
use crate::ui::theme::Theme;
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

/// Render the project cards, or the placeholder replacing them.
///
pub fn cards(frame: &mut Frame, size: Rect, state: &mut State) {
    let focused = state.current_focus() == Focus::Cards;
    let theme = state.get_theme().clone();
    let title = format!(
        "{} ({}/{})",
        state.get_mode().title(),
        state.visible_count(),
        state.get_catalog().len()
    );
    let block = Block::default().borders(Borders::ALL);
    let block = if focused {
        block
            .border_style(styling::active_block_border_style(&theme))
            .title(Span::styled(title, styling::active_block_title_style()))
    } else {
        block
            .border_style(styling::normal_block_border_style(&theme))
            .title(title)
    };

    match state.listing() {
        Listing::Loading => {
            frame.render_widget(spinner::widget(state, size.height).block(block), size);
        }
        Listing::Failed { message } => {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                message,
                styling::error_text_style(&theme),
            )))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
            frame.render_widget(paragraph, size);
        }
        Listing::Empty { message } => {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                message,
                styling::muted_text_style(&theme),
            )))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
            frame.render_widget(paragraph, size);
        }
        Listing::Cards(cards) => {
            let items: Vec<ListItem> = cards.iter().map(|card| card_item(card, &theme)).collect();
            let list = List::new(items)
                .style(styling::normal_text_style(&theme))
                .highlight_style(styling::active_list_item_style(&theme))
                .highlight_symbol("> ")
                .block(block);
            frame.render_stateful_widget(list, size, state.get_cards_list_state());
        }
    }
}

/// Lay a card out as a multi-line list item separated from the next one by
/// a blank line.
///
fn card_item(card: &CardView, theme: &Theme) -> ListItem<'static> {
    let mut lines = vec![Line::from(vec![
        Span::styled(card.title.clone(), styling::card_title_style(theme)),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", card.class_label),
            styling::class_badge_style(theme),
        ),
    ])];
    for field in &card.fields {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", field.label), styling::muted_text_style(theme)),
            Span::styled(field.value.clone(), styling::normal_text_style(theme)),
        ]));
    }
    let action_style = if card.is_available() {
        styling::open_action_style(theme)
    } else {
        styling::under_construction_style(theme)
    };
    let mut action = vec![Span::styled(card.action.label(), action_style)];
    if let Some(url) = card.action.target() {
        action.push(Span::styled(
            format!("  {}", url),
            styling::muted_text_style(theme),
        ));
    }
    lines.push(Line::from(action));
    lines.push(Line::from(""));
    ListItem::new(lines)
}
