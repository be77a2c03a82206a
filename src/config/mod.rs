//! Configuration module for symkey
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SymkeyPaths;
pub use settings::Settings;
