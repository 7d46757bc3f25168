//! Reusable widgets
//!
//! This module contains the widgets composed by the shell component.

pub mod active_view;
pub mod nav_bar;
