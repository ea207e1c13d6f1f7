//! Common utilities and shared functionality.
//!
//! # Utilities
//!
//! - Logging setup
//! - Parsing of command-line placeholder values
//!
//! # Data Structures
//!
//! - `CustomError` - Custom error type
//!
//! # Example
//!
//! ```rust,ignore
//! use sql_registry::common::common::{parse_value, setup_logging};
//!
//! setup_logging(&config)?;
//! let value = parse_value("42");
//! ```

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
