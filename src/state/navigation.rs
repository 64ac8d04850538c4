//! Navigation-related state types.
//!
//! This module contains the page lifecycle phase and the focus targets.

/// Specifying the page lifecycle.
///
/// `LoadFailed` is terminal and only reachable from `Loading`.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Phase {
    Loading,
    Loaded,
    LoadFailed,
}

/// Specifying the different foci.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Cards,
    Classes,
    Search,
}

impl Focus {
    /// Return the next focus in tab order.
    ///
    pub fn next(self) -> Focus {
        match self {
            Focus::Cards => Focus::Classes,
            Focus::Classes => Focus::Search,
            Focus::Search => Focus::Cards,
        }
    }
}
