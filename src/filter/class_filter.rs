use super::Filter;
use crate::catalog::{ClassOption, ProjectRecord};

/// Exact, case-sensitive class label match. `ClassOption::Any` matches all.
pub struct ClassFilter {
    label: Option<String>,
}

impl ClassFilter {
    pub fn new(option: &ClassOption) -> Self {
        Self {
            label: option.label().map(str::to_string),
        }
    }
}

impl Filter for ClassFilter {
    fn matches(&self, record: &ProjectRecord) -> bool {
        match &self.label {
            Some(label) => record.class_label() == label,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GroupRecord, ProjectRecord};
    use fake::{Fake, Faker};

    fn record_in(class_label: &str) -> ProjectRecord {
        ProjectRecord::Group(GroupRecord {
            class_label: class_label.to_string(),
            ..Faker.fake()
        })
    }

    #[test]
    fn any_matches_everything() {
        let filter = ClassFilter::new(&ClassOption::Any);
        assert!(filter.matches(&record_in("1º A")));
        assert!(filter.matches(&record_in("")));
    }

    #[test]
    fn label_matches_exactly() {
        let filter = ClassFilter::new(&ClassOption::Label("1º A".to_string()));
        assert!(filter.matches(&record_in("1º A")));
        assert!(!filter.matches(&record_in("1º a")));
        assert!(!filter.matches(&record_in("11º A")));
    }
}
