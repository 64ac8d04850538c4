use fake::Dummy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Link value used by the data files for projects without a destination yet.
///
pub const PLACEHOLDER_LINK: &str = "#Link";

/// Substrings that mark a link as not ready to be opened.
///
pub const UNAVAILABLE_MARKERS: [&str; 2] = ["em_constru-o", "PROJETO ABANDONADO!"];

/// Specifying the dataset variant, fixed for a whole session.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[serde(alias = "grupos")]
    Group,
    #[default]
    #[serde(alias = "individuais")]
    Individual,
}

impl Mode {
    /// Return the data file conventionally published for this mode.
    ///
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Mode::Group => "dados_grupos.txt",
            Mode::Individual => "dados_individuais.txt",
        }
    }

    /// Return a short human-readable title for this mode.
    ///
    pub fn title(&self) -> &'static str {
        match self {
            Mode::Group => "Group projects",
            Mode::Individual => "Individual projects",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Group => f.write_str("group"),
            Mode::Individual => f.write_str("individual"),
        }
    }
}

/// Returned when a mode name is not recognised.
///
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown dataset mode '{0}' (expected 'group' or 'individual')")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "group" | "grupos" => Ok(Mode::Group),
            "individual" | "individuais" => Ok(Mode::Individual),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// Defines a team project line: `ClassLabel|Title|Description|Link|Members`.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq)]
pub struct GroupRecord {
    pub class_label: String,
    pub title: String,
    pub description: String,
    pub link: String,
    pub members: String,
}

/// Defines a single-student project line: `ClassLabel|StudentName|Title|Link|Authors`.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq)]
pub struct IndividualRecord {
    pub class_label: String,
    pub student_name: String,
    pub title: String,
    pub link: String,
    /// Parsed and searchable, never displayed on its own.
    pub authors: String,
}

/// One parsed line of the dataset.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectRecord {
    Group(GroupRecord),
    Individual(IndividualRecord),
}

impl ProjectRecord {
    /// Map trimmed columns positionally according to the mode. Columns past
    /// the end of the slice become empty strings.
    ///
    pub fn from_columns(columns: &[&str], mode: Mode) -> Self {
        let column = |index: usize| columns.get(index).copied().unwrap_or_default().to_string();
        match mode {
            Mode::Group => ProjectRecord::Group(GroupRecord {
                class_label: column(0),
                title: column(1),
                description: column(2),
                link: column(3),
                members: column(4),
            }),
            Mode::Individual => ProjectRecord::Individual(IndividualRecord {
                class_label: column(0),
                student_name: column(1),
                title: column(2),
                link: column(3),
                authors: column(4),
            }),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            ProjectRecord::Group(_) => Mode::Group,
            ProjectRecord::Individual(_) => Mode::Individual,
        }
    }

    pub fn class_label(&self) -> &str {
        match self {
            ProjectRecord::Group(r) => &r.class_label,
            ProjectRecord::Individual(r) => &r.class_label,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ProjectRecord::Group(r) => &r.title,
            ProjectRecord::Individual(r) => &r.title,
        }
    }

    pub fn link(&self) -> &str {
        match self {
            ProjectRecord::Group(r) => &r.link,
            ProjectRecord::Individual(r) => &r.link,
        }
    }

    /// Return the fields free-text search looks into, in a fixed order.
    ///
    pub fn searchable_fields(&self) -> [&str; 4] {
        match self {
            ProjectRecord::Group(r) => [&r.title, &r.class_label, &r.description, &r.members],
            ProjectRecord::Individual(r) => {
                [&r.title, &r.class_label, &r.student_name, &r.authors]
            }
        }
    }

    pub fn is_link_available(&self) -> bool {
        is_link_available(self.link())
    }
}

/// A link is unavailable when missing, equal to the placeholder, or carrying
/// one of the "under construction" markers.
///
pub fn is_link_available(link: &str) -> bool {
    !(link.is_empty()
        || link == PLACEHOLDER_LINK
        || UNAVAILABLE_MARKERS.iter().any(|marker| link.contains(marker)))
}
