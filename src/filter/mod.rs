//! Record filtering.
//!
//! A record is shown when it passes both the class predicate and the
//! free-text predicate. Filters are recomputed from scratch on every change.

pub mod class_filter;
pub mod text_filter;

pub use class_filter::ClassFilter;
pub use text_filter::TextFilter;

use crate::catalog::{ClassOption, ProjectRecord};

/// Trait for record predicates
pub trait Filter {
    fn matches(&self, record: &ProjectRecord) -> bool;
}

/// Snapshot of the two filter inputs.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    class: ClassOption,
    search: String,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            class: ClassOption::Any,
            search: String::new(),
        }
    }
}

impl FilterState {
    /// Build a state from raw UI values. The search term is trimmed and
    /// lower-cased here so predicates compare against a normalized term.
    ///
    pub fn new(class: ClassOption, search: &str) -> Self {
        FilterState {
            class,
            search: search.trim().to_lowercase(),
        }
    }

    pub fn class(&self) -> &ClassOption {
        &self.class
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Return true when neither predicate restricts anything.
    ///
    pub fn is_unrestricted(&self) -> bool {
        self.class == ClassOption::Any && self.search.is_empty()
    }
}

/// Return the positions of the records passing both predicates, in input order.
///
pub fn filter_indices(records: &[ProjectRecord], state: &FilterState) -> Vec<usize> {
    let class_filter = ClassFilter::new(state.class());
    let text_filter = TextFilter::new(state.search());
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| class_filter.matches(record) && text_filter.matches(record))
        .map(|(index, _)| index)
        .collect()
}

/// Return the records passing both predicates, in input order.
///
pub fn filter<'a>(records: &'a [ProjectRecord], state: &FilterState) -> Vec<&'a ProjectRecord> {
    filter_indices(records, state)
        .into_iter()
        .map(|index| &records[index])
        .collect()
}
