//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// One database to open at startup.
pub mod database_config;
