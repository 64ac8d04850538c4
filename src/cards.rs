//! Display-agnostic description of project cards.
//!
//! Everything the terminal painter needs is decided here: which text fields a
//! card shows, whether its link can be opened, and which placeholder replaces
//! the card list when there is nothing to show.

use crate::catalog::ProjectRecord;

pub const NO_RESULTS_MESSAGE: &str = "No projects match the current filters and search.";
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load project data.";

/// What activating a card does.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardAction {
    /// Open the link in a new browsing context.
    Open { url: String },
    /// Inert: the project is not ready and must not navigate anywhere.
    UnderConstruction,
}

impl CardAction {
    pub fn label(&self) -> &'static str {
        match self {
            CardAction::Open { .. } => "Open project",
            CardAction::UnderConstruction => "Under construction (do not open)",
        }
    }

    /// Return the destination, or None when activation must do nothing.
    ///
    pub fn target(&self) -> Option<&str> {
        match self {
            CardAction::Open { url } => Some(url),
            CardAction::UnderConstruction => None,
        }
    }
}

/// A labelled line of card body text.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardField {
    pub label: &'static str,
    pub value: String,
}

impl CardField {
    fn new(label: &'static str, value: &str) -> Self {
        CardField {
            label,
            value: value.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub title: String,
    pub class_label: String,
    pub fields: Vec<CardField>,
    pub action: CardAction,
}

impl CardView {
    pub fn is_available(&self) -> bool {
        matches!(self.action, CardAction::Open { .. })
    }
}

/// What the display area should show.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Listing {
    Loading,
    Failed { message: String },
    Empty { message: String },
    Cards(Vec<CardView>),
}

/// Describe a single record as a card.
///
/// Individual records show the student name only. Their authors column is
/// kept for search and intentionally left off the card.
///
pub fn describe(record: &ProjectRecord) -> CardView {
    let fields = match record {
        ProjectRecord::Group(r) => vec![
            CardField::new("Description", &r.description),
            CardField::new("Members", &r.members),
        ],
        ProjectRecord::Individual(r) => vec![CardField::new("Student", &r.student_name)],
    };
    let action = if record.is_link_available() {
        CardAction::Open {
            url: record.link().to_string(),
        }
    } else {
        CardAction::UnderConstruction
    };
    CardView {
        title: record.title().to_string(),
        class_label: record.class_label().to_string(),
        fields,
        action,
    }
}

/// Describe a filtered record list, substituting the "no results" placeholder
/// for an empty one.
///
pub fn listing(records: &[&ProjectRecord]) -> Listing {
    if records.is_empty() {
        return Listing::Empty {
            message: NO_RESULTS_MESSAGE.to_string(),
        };
    }
    Listing::Cards(records.iter().map(|record| describe(record)).collect())
}

/// The replacement shown when the dataset could not be fetched.
///
pub fn load_failed() -> Listing {
    Listing::Failed {
        message: LOAD_ERROR_MESSAGE.to_string(),
    }
}
