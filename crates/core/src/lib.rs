//! autoconf - wires freshly installed midway plugins into the host project
//!
//! This crate provides functionality to:
//! - Resolve the host project's source directory from its manifest
//! - Locate or synthesize the `configuration.ts` declaration file
//! - Insert a plugin module name into the `@Configuration` imports list
pub mod autoconf;
pub mod error;
pub mod manifest;
pub mod template;

// Re-export commonly used types
pub use autoconf::{AutoConf, AutoConfOptions};
pub use error::{Error, Result};
pub use manifest::Manifest;
