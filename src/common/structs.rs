//! Common data structures.

/// Error carrying a plain message.
pub mod custom_error;
