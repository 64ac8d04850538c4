use super::Filter;
use crate::catalog::ProjectRecord;

/// Case-insensitive substring search over a record's searchable fields
pub struct TextFilter {
    term: String,
}

impl TextFilter {
    pub fn new(term: &str) -> Self {
        Self {
            term: term.to_lowercase(),
        }
    }
}

impl Filter for TextFilter {
    fn matches(&self, record: &ProjectRecord) -> bool {
        if self.term.is_empty() {
            return true;
        }
        record
            .searchable_fields()
            .iter()
            .any(|field| !field.is_empty() && field.to_lowercase().contains(&self.term))
    }
}
