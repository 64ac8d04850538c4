//! Terminal browser for student project showcases.
//!
//! A showcase is a pipe-separated text file listing projects by class. The
//! application fetches it once, lists every project as a card, and narrows
//! the list by class and free-text search.

pub mod app;
pub mod cards;
pub mod catalog;
pub mod config;
pub mod dataset;
pub mod error;
pub mod events;
pub mod filter;
pub mod logger;
pub mod state;
pub mod ui;
