//! Knobs Core
//!
//! Ambient functionality shared by every knobs crate: logging bootstrap,
//! configuration and the hasher used by element tables.

pub mod alloc;
pub mod config;
pub mod logging;

pub use config::Config;
