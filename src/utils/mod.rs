//! Utility functions.
//!
//! This module provides:
//! - Timing metrics for performance analysis

mod timing;

pub use timing::TimingStats;
