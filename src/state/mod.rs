//! Application state management module.
//!
//! This module contains the session state for the application, including:
//! - Main `State` struct owning the parsed catalog and filter inputs
//! - Navigation types (Phase, Focus)

mod navigation;

pub use navigation::{Focus, Phase};

#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
