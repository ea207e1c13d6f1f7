//! Configuration management module.
//!
//! Loads the TOML file that lists which databases the binary opens at
//! startup.
//!
//! # Configuration Structure
//!
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **default_engine**: engine used when no name is given
//! - **databases**: one `[[databases]]` table per engine with its source
//!
//! # Example
//!
//! ```rust,ignore
//! use sql_registry::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! for database in &config.databases {
//!     println!("{} -> {}", database.engine, database.source);
//! }
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
