//! Configuration enumerations.

/// Failures while reading or writing the configuration file.
pub mod configuration_error;
