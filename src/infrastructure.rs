//! Infrastructure layer
//!
//! This module handles external integrations:
//! - Terminal foundation
//! - CLI argument processing
//! - Configuration loading

pub mod cli;
pub mod config;
pub mod test_terminal;
pub mod tui;
