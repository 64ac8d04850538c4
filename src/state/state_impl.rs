use crate::cards::{self, Listing};
use crate::catalog::{Catalog, ClassOption, Mode, ProjectRecord};
use crate::dataset::LoadError;
use crate::filter::{filter_indices, FilterState};
use crate::logger::LogEntries;
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use log::*;
use ratatui::widgets::ListState;
use std::sync::{Arc, Mutex};
use tui_textarea::TextArea;

use super::navigation::{Focus, Phase};

/// Houses the session: the catalog parsed once at load time, the filter
/// inputs and everything the interface needs to draw them.
///
pub struct State {
    mode: Mode,
    source: String,
    phase: Phase,
    catalog: Catalog,
    load_error: Option<String>,
    class_index: usize,
    search_input: TextArea<'static>,
    visible: Vec<usize>, // Indices into catalog records passing the filters
    cards_list_state: ListState,
    current_focus: Focus,
    spinner_index: usize,
    log_entries: LogEntries,
    show_log: bool,
    theme: Theme,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            mode: Mode::default(),
            source: String::new(),
            phase: Phase::Loading,
            catalog: Catalog::empty(Mode::default()),
            load_error: None,
            class_index: 0,
            search_input: TextArea::default(),
            visible: vec![],
            cards_list_state: ListState::default(),
            current_focus: Focus::Cards,
            spinner_index: 0,
            log_entries: Arc::new(Mutex::new(vec![])),
            show_log: false,
            theme: Theme::default(),
        }
    }
}

impl State {
    pub fn new(mode: Mode, source: String, theme: Theme, log_entries: LogEntries) -> Self {
        State {
            mode,
            source,
            catalog: Catalog::empty(mode),
            theme,
            log_entries,
            ..State::default()
        }
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn get_mode(&self) -> Mode {
        self.mode
    }

    /// Return a printable description of where the dataset comes from.
    ///
    pub fn get_source(&self) -> &str {
        &self.source
    }

    pub fn get_phase(&self) -> Phase {
        self.phase
    }

    /// Return the reason the load failed, for diagnostics.
    ///
    pub fn get_load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn get_catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Parse the fetched text and show every record. Only honoured while
    /// loading; the session never loads twice.
    ///
    pub fn set_dataset(&mut self, raw: &str) -> &mut Self {
        if self.phase != Phase::Loading {
            warn!("Ignoring dataset delivered in phase {:?}.", self.phase);
            return self;
        }
        self.catalog = Catalog::from_text(raw, self.mode);
        self.phase = Phase::Loaded;
        self.class_index = 0;
        info!(
            "Loaded {} projects in {} classes.",
            self.catalog.len(),
            self.catalog.class_options().len() - 1
        );
        self.apply_filters();
        self
    }

    /// Record that the dataset could not be fetched. No record is ever shown
    /// afterwards.
    ///
    pub fn set_load_failed(&mut self, error: &LoadError) -> &mut Self {
        if self.phase != Phase::Loading {
            warn!("Ignoring load failure reported in phase {:?}.", self.phase);
            return self;
        }
        self.phase = Phase::LoadFailed;
        self.load_error = Some(error.to_string());
        self.catalog = Catalog::empty(self.mode);
        self.apply_filters();
        self
    }

    /// Return what the display area should currently show.
    ///
    pub fn listing(&self) -> Listing {
        match self.phase {
            Phase::Loading => Listing::Loading,
            Phase::LoadFailed => cards::load_failed(),
            Phase::Loaded => cards::listing(&self.get_visible_records()),
        }
    }

    /// Return the records passing the current filters, in file order.
    ///
    pub fn get_visible_records(&self) -> Vec<&ProjectRecord> {
        let records = self.catalog.records();
        self.visible.iter().map(|&index| &records[index]).collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Return the current filter inputs.
    ///
    pub fn get_filter_state(&self) -> FilterState {
        FilterState::new(self.get_selected_class(), &self.get_search_query())
    }

    /// Recompute the visible records from scratch and reset the selection.
    ///
    fn apply_filters(&mut self) {
        self.visible = match self.phase {
            Phase::Loaded => filter_indices(self.catalog.records(), &self.get_filter_state()),
            Phase::Loading | Phase::LoadFailed => vec![],
        };
        trace!(
            "Filters matched {} of {} projects.",
            self.visible.len(),
            self.catalog.len()
        );
        let selection = if self.visible.is_empty() { None } else { Some(0) };
        self.cards_list_state.select(selection);
    }

    pub fn get_class_options(&self) -> &[ClassOption] {
        self.catalog.class_options()
    }

    pub fn get_class_index(&self) -> usize {
        self.class_index
    }

    /// Return the selected class option.
    ///
    pub fn get_selected_class(&self) -> ClassOption {
        self.catalog
            .class_options()
            .get(self.class_index)
            .cloned()
            .unwrap_or(ClassOption::Any)
    }

    /// Select the class option at index, clamped to the available options.
    ///
    pub fn select_class(&mut self, index: usize) -> &mut Self {
        let last = self.catalog.class_options().len().saturating_sub(1);
        self.class_index = index.min(last);
        debug!("Selected class '{}'.", self.get_selected_class());
        self.apply_filters();
        self
    }

    /// Activate the next class option, wrapping around.
    ///
    pub fn next_class(&mut self) -> &mut Self {
        let count = self.catalog.class_options().len();
        if count == 0 {
            return self;
        }
        self.select_class((self.class_index + 1) % count)
    }

    /// Activate the previous class option, wrapping around.
    ///
    pub fn previous_class(&mut self) -> &mut Self {
        let count = self.catalog.class_options().len();
        if count == 0 {
            return self;
        }
        let previous = if self.class_index > 0 {
            self.class_index - 1
        } else {
            count - 1
        };
        self.select_class(previous)
    }

    /// Return the raw text typed in the search box.
    ///
    pub fn get_search_query(&self) -> String {
        self.search_input.lines().join(" ")
    }

    /// Get the search input (mutable) for rendering.
    ///
    pub fn get_search_input(&mut self) -> &mut TextArea<'static> {
        &mut self.search_input
    }

    /// Add a character to the search query.
    ///
    pub fn add_search_char(&mut self, c: char) -> &mut Self {
        self.search_input.insert_char(c);
        self.apply_filters();
        self
    }

    /// Remove the character before the cursor from the search query.
    ///
    pub fn delete_search_char(&mut self) -> &mut Self {
        if self.search_input.delete_char() {
            self.apply_filters();
        }
        self
    }

    /// Clear the search query.
    ///
    pub fn clear_search(&mut self) -> &mut Self {
        self.search_input = TextArea::default();
        self.apply_filters();
        self
    }

    /// Return the card list state.
    ///
    pub fn get_cards_list_state(&mut self) -> &mut ListState {
        &mut self.cards_list_state
    }

    /// Activate the next card.
    ///
    pub fn next_card(&mut self) -> &mut Self {
        if self.visible.is_empty() {
            return self;
        }
        let current = self.cards_list_state.selected().unwrap_or(0);
        let next = if current + 1 < self.visible.len() {
            current + 1
        } else {
            0
        };
        self.cards_list_state.select(Some(next));
        self
    }

    /// Activate the previous card.
    ///
    pub fn previous_card(&mut self) -> &mut Self {
        if self.visible.is_empty() {
            return self;
        }
        let current = self.cards_list_state.selected().unwrap_or(0);
        let previous = if current > 0 {
            current - 1
        } else {
            self.visible.len() - 1
        };
        self.cards_list_state.select(Some(previous));
        self
    }

    /// Return the record under the card selection.
    ///
    pub fn get_selected_record(&self) -> Option<&ProjectRecord> {
        let selected = self.cards_list_state.selected()?;
        let index = *self.visible.get(selected)?;
        self.catalog.records().get(index)
    }

    /// Return the link to open for the selected card. Cards under
    /// construction never yield one.
    ///
    pub fn activate_selected(&self) -> Option<String> {
        let card = cards::describe(self.get_selected_record()?);
        match card.action.target() {
            Some(url) => {
                info!("Opening '{}' at {}...", card.title, url);
                Some(url.to_owned())
            }
            None => {
                info!("'{}' is under construction and cannot be opened.", card.title);
                None
            }
        }
    }

    pub fn current_focus(&self) -> Focus {
        self.current_focus
    }

    pub fn set_focus(&mut self, focus: Focus) -> &mut Self {
        self.current_focus = focus;
        self
    }

    /// Move focus to the next target in tab order.
    ///
    pub fn next_focus(&mut self) -> &mut Self {
        self.current_focus = self.current_focus.next();
        self
    }

    /// Advance the loading spinner by one frame.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
        self
    }

    pub fn get_spinner_index(&self) -> usize {
        self.spinner_index
    }

    /// Return up to `limit` of the most recent log entries, oldest first.
    ///
    pub fn get_log_entries(&self, limit: usize) -> Vec<String> {
        match self.log_entries.lock() {
            Ok(entries) => {
                let start = entries.len().saturating_sub(limit);
                entries[start..].to_vec()
            }
            Err(_) => vec![],
        }
    }

    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.show_log = !self.show_log;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUP_DATA: &str = "\
2º B|Horta escolar|Plantas|#Link|Caio, Davi
1º A|Proj X|Desc|https://x.test|Ana, Bea
10º C|Jornal|Notícias|https://jornal.test|Mariana
1º A|Robô|Arduino|https://robo.test|Pedro";

    fn loaded() -> State {
        let mut state = State::new(
            Mode::Group,
            "dados_grupos.txt".to_string(),
            Theme::default(),
            Arc::new(Mutex::new(vec![])),
        );
        state.set_dataset(GROUP_DATA);
        state
    }

    fn titles(state: &State) -> Vec<&str> {
        state.get_visible_records().iter().map(|r| r.title()).collect()
    }

    fn failure() -> LoadError {
        LoadError::Status {
            status: 503,
            url: "https://site.test/dados_grupos.txt".to_string(),
        }
    }

    #[test]
    fn starts_loading() {
        let state = State::default();
        assert_eq!(state.get_phase(), Phase::Loading);
        assert_eq!(state.listing(), Listing::Loading);
        assert_eq!(state.get_class_options(), &[ClassOption::Any]);
        assert!(state.get_visible_records().is_empty());
    }

    #[test]
    fn set_dataset_shows_everything() {
        let state = loaded();
        assert_eq!(state.get_phase(), Phase::Loaded);
        assert_eq!(titles(&state), vec!["Horta escolar", "Proj X", "Jornal", "Robô"]);
        assert_eq!(
            state.get_class_options(),
            &[
                ClassOption::Any,
                ClassOption::Label("1º A".to_string()),
                ClassOption::Label("2º B".to_string()),
                ClassOption::Label("10º C".to_string()),
            ]
        );
        assert_eq!(state.get_selected_class(), ClassOption::Any);
        assert!(state.get_filter_state().is_unrestricted());
    }

    #[test]
    fn second_dataset_is_ignored() {
        let mut state = loaded();
        state.set_dataset("9º Z|Other|||");
        assert_eq!(state.get_catalog().len(), 4);
        state.set_load_failed(&failure());
        assert_eq!(state.get_phase(), Phase::Loaded);
    }

    #[test]
    fn empty_dataset_shows_no_results() {
        let mut state = State::default();
        state.set_dataset("\n \n");
        assert_eq!(state.get_phase(), Phase::Loaded);
        assert!(matches!(state.listing(), Listing::Empty { .. }));
    }

    #[test]
    fn load_failure_is_terminal() {
        let mut state = State::default();
        state.set_load_failed(&failure());
        assert_eq!(state.get_phase(), Phase::LoadFailed);
        assert!(state.get_load_error().unwrap().contains("503"));
        assert_eq!(state.listing(), cards::load_failed());
        assert!(state.get_catalog().is_empty());

        // Filter controls still respond but change nothing.
        state.next_class().add_search_char('a');
        assert_eq!(state.listing(), cards::load_failed());
        assert!(state.get_visible_records().is_empty());

        state.set_dataset(GROUP_DATA);
        assert_eq!(state.get_phase(), Phase::LoadFailed);
        assert!(state.get_catalog().is_empty());
    }

    #[test]
    fn class_selection_filters_and_wraps() {
        let mut state = loaded();
        state.next_class();
        assert_eq!(state.get_selected_class(), ClassOption::Label("1º A".to_string()));
        assert_eq!(titles(&state), vec!["Proj X", "Robô"]);

        state.previous_class().previous_class();
        assert_eq!(state.get_selected_class(), ClassOption::Label("10º C".to_string()));
        assert_eq!(titles(&state), vec!["Jornal"]);

        state.next_class();
        assert_eq!(state.get_selected_class(), ClassOption::Any);
        assert_eq!(state.visible_count(), 4);

        state.select_class(99);
        assert_eq!(state.get_class_index(), 3);
    }

    #[test]
    fn search_filters_on_each_keystroke() {
        let mut state = loaded();
        state.add_search_char('A');
        assert_eq!(state.visible_count(), 4);
        state.add_search_char('n');
        state.add_search_char('a');
        assert_eq!(state.get_search_query(), "Ana");
        assert_eq!(titles(&state), vec!["Proj X", "Jornal"]);

        state.delete_search_char();
        assert_eq!(state.get_search_query(), "An");
        state.clear_search();
        assert_eq!(state.get_search_query(), "");
        assert_eq!(state.visible_count(), 4);
    }

    #[test]
    fn class_and_search_combine() {
        let mut state = loaded();
        state.select_class(1);
        for c in "arduino".chars() {
            state.add_search_char(c);
        }
        assert_eq!(titles(&state), vec!["Robô"]);
        state.select_class(2);
        assert!(state.get_visible_records().is_empty());
        assert!(matches!(state.listing(), Listing::Empty { .. }));
        assert_eq!(state.get_selected_record(), None);
    }

    #[test]
    fn card_navigation_wraps() {
        let mut state = loaded();
        assert_eq!(state.get_selected_record().unwrap().title(), "Horta escolar");
        state.previous_card();
        assert_eq!(state.get_selected_record().unwrap().title(), "Robô");
        state.next_card();
        assert_eq!(state.get_selected_record().unwrap().title(), "Horta escolar");
        state.next_card();
        assert_eq!(state.get_selected_record().unwrap().title(), "Proj X");
    }

    #[test]
    fn filtering_resets_selection() {
        let mut state = loaded();
        state.next_card().next_card();
        state.add_search_char('o');
        assert_eq!(state.get_cards_list_state().selected(), Some(0));
    }

    #[test]
    fn activate_selected_only_opens_available_links() {
        let mut state = loaded();
        // "Horta escolar" uses the placeholder link.
        assert_eq!(state.activate_selected(), None);
        state.next_card();
        assert_eq!(state.activate_selected(), Some("https://x.test".to_string()));
    }

    #[test]
    fn focus_and_log_toggles() {
        let mut state = State::default();
        assert_eq!(state.current_focus(), Focus::Cards);
        state.next_focus();
        assert_eq!(state.current_focus(), Focus::Classes);
        state.set_focus(Focus::Search);
        assert_eq!(state.current_focus(), Focus::Search);

        assert!(!state.is_log_visible());
        state.toggle_log();
        assert!(state.is_log_visible());
    }

    #[test]
    fn log_entries_are_limited() {
        let entries: LogEntries = Arc::new(Mutex::new(vec![
            "one".to_string(),
            "two".to_string(),
            "three".to_string(),
        ]));
        let state = State::new(Mode::Individual, String::new(), Theme::default(), entries);
        assert_eq!(state.get_log_entries(2), vec!["two", "three"]);
        assert_eq!(state.get_log_entries(10).len(), 3);
    }

    #[test]
    fn spinner_wraps() {
        let mut state = State::default();
        for _ in 0..SPINNER_FRAME_COUNT {
            state.advance_spinner_index();
        }
        assert_eq!(state.get_spinner_index(), 0);
    }
}
