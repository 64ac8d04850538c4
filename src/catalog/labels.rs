use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use log::*;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

/// Entry of the class selector.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClassOption {
    /// Synthetic entry meaning "no class filter".
    Any,
    Label(String),
}

impl ClassOption {
    /// Return the label text, or None for the synthetic entry.
    ///
    pub fn label(&self) -> Option<&str> {
        match self {
            ClassOption::Any => None,
            ClassOption::Label(label) => Some(label),
        }
    }
}

impl fmt::Display for ClassOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassOption::Any => f.write_str("All classes"),
            ClassOption::Label(label) => f.write_str(label),
        }
    }
}

/// Order labels by length first so that "10º A" lands after every "9º X",
/// then alphabetically. The result always starts with `ClassOption::Any`.
///
pub fn build_ordered_labels(labels: &HashSet<String>) -> Vec<ClassOption> {
    let collator = match Collator::try_new(Default::default(), CollatorOptions::default()) {
        Ok(collator) => Some(collator),
        Err(e) => {
            warn!("Collation data unavailable, ordering labels by code point: {}", e);
            None
        }
    };
    let mut ordered = labels.iter().collect::<Vec<_>>();
    ordered.sort_by(|a, b| compare_labels(collator.as_ref(), a, b));
    std::iter::once(ClassOption::Any)
        .chain(ordered.into_iter().cloned().map(ClassOption::Label))
        .collect()
}

fn compare_labels(collator: Option<&CollatorBorrowed<'static>>, a: &str, b: &str) -> Ordering {
    a.chars()
        .count()
        .cmp(&b.chars().count())
        .then_with(|| match collator {
            Some(collator) => collator.compare(a, b),
            None => fallback_collate(a, b),
        })
        .then_with(|| a.cmp(b))
}

// Case-insensitive first, lower case before upper case on ties.
fn fallback_collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
