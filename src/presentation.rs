//! Presentation layer
//!
//! This module contains the view tree, its query interface, widgets and
//! components, plus UI configuration (keybindings).

pub mod components;
pub mod config;
pub mod query;
pub mod view;
pub mod widgets;
