//! Components are stateless renderers that receive state as parameters.

pub mod shell;

pub use shell::{ShellComponent, ShellLayout};
