use crate::state::{Focus, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => (),
                    Err(e) => error!("Failed to read terminal event: {}", e),
                },
                Ok(false) => (),
                Err(e) => error!("Failed to poll terminal events: {}", e),
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Links to open
    /// are handed back to the caller, which opens them once the state is
    /// released.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<Outcome> {
        match self.rx.recv()? {
            Event::Input(event) => Ok(dispatch(state, event)),
            Event::Tick => {
                state.advance_spinner_index();
                Ok(Outcome::Continue)
            }
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a single key press.
///
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Open(String),
    Exit,
}

fn is_exit(event: &KeyEvent) -> bool {
    event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL)
}

/// Apply a key press to the state according to the current focus.
///
pub fn dispatch(state: &mut State, event: KeyEvent) -> Outcome {
    if is_exit(&event) {
        debug!("Processing exit terminal event '{:?}'...", event);
        return Outcome::Exit;
    }
    if event.code == KeyCode::Tab {
        state.next_focus();
        return Outcome::Continue;
    }
    match state.current_focus() {
        Focus::Cards => cards_key(state, event),
        Focus::Classes => classes_key(state, event),
        Focus::Search => search_key(state, event),
    }
}

fn cards_key(state: &mut State, event: KeyEvent) -> Outcome {
    match event.code {
        KeyCode::Char('q') => {
            debug!("Processing exit terminal event '{:?}'...", event);
            return Outcome::Exit;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.next_card();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.previous_card();
        }
        KeyCode::Char('l') | KeyCode::Right => {
            state.next_class();
        }
        KeyCode::Char('h') | KeyCode::Left => {
            state.previous_class();
        }
        KeyCode::Enter | KeyCode::Char('o') => {
            if let Some(url) = state.activate_selected() {
                return Outcome::Open(url);
            }
        }
        KeyCode::Char('/') => {
            state.set_focus(Focus::Search);
        }
        KeyCode::Char('c') => {
            state.set_focus(Focus::Classes);
        }
        KeyCode::Char('L') => {
            state.toggle_log();
        }
        _ => debug!("Skipping processing of terminal event '{:?}'...", event),
    }
    Outcome::Continue
}

fn classes_key(state: &mut State, event: KeyEvent) -> Outcome {
    match event.code {
        KeyCode::Char('j') | KeyCode::Char('l') | KeyCode::Down | KeyCode::Right => {
            state.next_class();
        }
        KeyCode::Char('k') | KeyCode::Char('h') | KeyCode::Up | KeyCode::Left => {
            state.previous_class();
        }
        KeyCode::Enter | KeyCode::Esc => {
            state.set_focus(Focus::Cards);
        }
        _ => debug!("Skipping processing of terminal event '{:?}'...", event),
    }
    Outcome::Continue
}

fn search_key(state: &mut State, event: KeyEvent) -> Outcome {
    match event.code {
        KeyCode::Char(c)
            if !event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            state.add_search_char(c);
        }
        KeyCode::Backspace => {
            state.delete_search_char();
        }
        KeyCode::Enter | KeyCode::Esc => {
            state.set_focus(Focus::Cards);
        }
        _ => debug!("Skipping processing of terminal event '{:?}'...", event),
    }
    Outcome::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ClassOption, Mode};
    use crate::ui::Theme;
    use std::sync::{Arc, Mutex};

    const DATA: &str = "\
1º A|Horta|Plantas|#Link|Caio
2º B|Jornal|Notícias|https://jornal.test|Ana, Bea";

    fn loaded() -> State {
        let mut state = State::new(
            Mode::Group,
            String::new(),
            Theme::default(),
            Arc::new(Mutex::new(vec![])),
        );
        state.set_dataset(DATA);
        state
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn titles(state: &State) -> Vec<String> {
        state
            .get_visible_records()
            .iter()
            .map(|r| r.title().to_string())
            .collect()
    }

    #[test]
    fn ctrl_c_exits_from_any_focus() {
        let mut state = loaded();
        for focus in [Focus::Cards, Focus::Classes, Focus::Search] {
            state.set_focus(focus);
            let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
            assert_eq!(dispatch(&mut state, event), Outcome::Exit);
        }
        assert_eq!(state.get_search_query(), "");
    }

    #[test]
    fn q_exits_only_from_cards() {
        let mut state = loaded();
        assert_eq!(dispatch(&mut state, key(KeyCode::Char('q'))), Outcome::Exit);
        state.set_focus(Focus::Search);
        assert_eq!(dispatch(&mut state, key(KeyCode::Char('q'))), Outcome::Continue);
        assert_eq!(state.get_search_query(), "q");
    }

    #[test]
    fn tab_cycles_focus() {
        let mut state = loaded();
        dispatch(&mut state, key(KeyCode::Tab));
        assert_eq!(state.current_focus(), Focus::Classes);
        dispatch(&mut state, key(KeyCode::Tab));
        assert_eq!(state.current_focus(), Focus::Search);
        dispatch(&mut state, key(KeyCode::Tab));
        assert_eq!(state.current_focus(), Focus::Cards);
    }

    #[test]
    fn typing_in_search_filters() {
        let mut state = loaded();
        dispatch(&mut state, key(KeyCode::Char('/')));
        assert_eq!(state.current_focus(), Focus::Search);
        for c in "ANA".chars() {
            dispatch(&mut state, KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT));
        }
        assert_eq!(titles(&state), vec!["Jornal"]);
        dispatch(&mut state, key(KeyCode::Backspace));
        assert_eq!(state.get_search_query(), "AN");
        dispatch(&mut state, key(KeyCode::Esc));
        assert_eq!(state.current_focus(), Focus::Cards);
    }

    #[test]
    fn class_keys_cycle_options() {
        let mut state = loaded();
        dispatch(&mut state, key(KeyCode::Char('c')));
        assert_eq!(state.current_focus(), Focus::Classes);
        dispatch(&mut state, key(KeyCode::Down));
        assert_eq!(state.get_selected_class(), ClassOption::Label("1º A".to_string()));
        assert_eq!(titles(&state), vec!["Horta"]);
        dispatch(&mut state, key(KeyCode::Char('k')));
        dispatch(&mut state, key(KeyCode::Char('k')));
        assert_eq!(state.get_selected_class(), ClassOption::Label("2º B".to_string()));
        dispatch(&mut state, key(KeyCode::Enter));
        assert_eq!(state.current_focus(), Focus::Cards);

        dispatch(&mut state, key(KeyCode::Char('l')));
        assert_eq!(state.get_selected_class(), ClassOption::Any);
    }

    #[test]
    fn enter_on_under_construction_card_does_not_open() {
        let mut state = loaded();
        assert_eq!(dispatch(&mut state, key(KeyCode::Enter)), Outcome::Continue);
        dispatch(&mut state, key(KeyCode::Char('j')));
        assert_eq!(
            dispatch(&mut state, key(KeyCode::Char('o'))),
            Outcome::Open("https://jornal.test".to_string())
        );
    }

    #[test]
    fn handle_next_returns_link_without_opening_it() {
        let (tx, rx) = mpsc::channel();
        let handler = Handler { rx, _tx: tx.clone() };
        let mut state = loaded();
        state.next_card();

        tx.send(Event::Input(key(KeyCode::Enter))).unwrap();
        tx.send(Event::Tick).unwrap();
        tx.send(Event::Input(key(KeyCode::Char('q')))).unwrap();

        assert_eq!(
            handler.handle_next(&mut state).unwrap(),
            Outcome::Open("https://jornal.test".to_string())
        );
        assert_eq!(handler.handle_next(&mut state).unwrap(), Outcome::Continue);
        assert_eq!(state.get_spinner_index(), 1);
        assert_eq!(handler.handle_next(&mut state).unwrap(), Outcome::Exit);
    }

    #[test]
    fn capital_l_toggles_log() {
        let mut state = loaded();
        dispatch(&mut state, KeyEvent::new(KeyCode::Char('L'), KeyModifiers::SHIFT));
        assert!(state.is_log_visible());
    }
}
