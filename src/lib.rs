//! # Navshell - terminal navigation shell
//!
//! Renders a configured, ordered set of named routes as a navigation bar and
//! hosts the active route's view, built with Rust and Ratatui.
//!
//! ## Architecture Overview
//!
//! - **Model** (`model`): the validated [`NavigationModel`] and the [`AppShell`]
//!   that projects it into a view tree
//! - **View** (`presentation`): [`ViewTree`] nodes, text queries over rendered
//!   output, widgets and components
//! - **Runner** (`app`): event loop translating key and mouse events into shell
//!   messages
//! - **Infrastructure** (`infrastructure`): config, CLI, terminal backends
//!
//! ## Example Usage
//!
//! ```rust
//! use navshell::{
//!     model::{navigation::NavigationModel, shell::AppShell},
//!     presentation::query::get_by_text,
//! };
//!
//! let model = NavigationModel::new([("Home", "/"), ("Clients", "/clients")]).unwrap();
//! let mut shell = AppShell::new(model);
//! let tree = shell.render();
//!
//! assert_eq!(get_by_text(&tree, "Clients").unwrap().target(), "/clients");
//! assert!(get_by_text(&tree, "Invoices").is_err());
//! ```

pub mod action;
pub mod app;
pub mod infrastructure;
pub mod model;
pub mod presentation;
pub mod utils;

pub use action::Action;
pub use app::App;
pub use model::navigation::{NavigationModel, RouteDescriptor, ValidationError};
pub use model::shell::AppShell;
pub use presentation::query::LookupMiss;
pub use presentation::view::{ViewNode, ViewTree};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
