//! Parsed project data for a session.
//!
//! This module turns the raw dataset text into typed records and the ordered
//! list of class labels offered by the class selector.

mod labels;
mod parser;
mod record;

pub use labels::{build_ordered_labels, ClassOption};
pub use parser::{parse, ParsedDataset};
pub use record::{
    is_link_available, GroupRecord, IndividualRecord, Mode, ParseModeError, ProjectRecord,
    PLACEHOLDER_LINK, UNAVAILABLE_MARKERS,
};

/// Records and class options owned by the session, written once per load.
///
#[derive(Clone, Debug)]
pub struct Catalog {
    mode: Mode,
    records: Vec<ProjectRecord>,
    class_options: Vec<ClassOption>,
}

impl Catalog {
    /// Return an empty catalog, offering only the "all classes" option.
    ///
    pub fn empty(mode: Mode) -> Self {
        Catalog {
            mode,
            records: vec![],
            class_options: vec![ClassOption::Any],
        }
    }

    /// Parse the raw text and index its class labels.
    ///
    pub fn from_text(raw: &str, mode: Mode) -> Self {
        let ParsedDataset { records, labels } = parse(raw, mode);
        Catalog {
            mode,
            records,
            class_options: build_ordered_labels(&labels),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn class_options(&self) -> &[ClassOption] {
        &self.class_options
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
