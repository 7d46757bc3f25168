//! Domain state
//!
//! - [`navigation`]: the validated, ordered route list
//! - [`shell`]: the shell that projects routes into a view tree and tracks
//!   selection, activation and mount state

pub mod navigation;
pub mod shell;
