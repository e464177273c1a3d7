//! Error handling and error accumulation.
//!
//! This module provides:
//! - Error type definitions for startup, config loading, dispatch, DNS lookups
//!   and check verification
//! - Categorization of library errors into short kind names
//! - The run-scoped [`ErrorSink`]
//!
//! Every failure below the process level is recovered at the narrowest scope
//! (check, entry, or config source) and turned into a recorded message.

mod categorization;
mod sink;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, categorize_resolve_error};
pub use sink::ErrorSink;
pub use types::{CheckFailure, ConfigLoadError, DispatchError, InitializationError, LookupError};
