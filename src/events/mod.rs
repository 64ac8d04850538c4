//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Network events: dataset retrieval
//! - Terminal events: user input and ticks

pub mod network;
pub mod terminal;
