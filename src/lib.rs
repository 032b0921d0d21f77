//! Timestring - convenience helpers for dates, times, and app metadata
//!
//! This library collects the small, stateless helpers that tend to be
//! re-implemented in every application: strict string-to-date parsing,
//! fixed-layout date formatting (including timezone-aware variants),
//! relative-day arithmetic, and a read-only application metadata object
//! loaded from configuration.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`app_info`] - Application metadata loaded from configuration
//! * [`constants`] - Fixed format patterns and named-zone identifiers
//! * [`utils`] - Utility functions and helpers

/// Application metadata configuration, read-only after construction
pub mod app_info;

/// Fixed format patterns and other constant values
pub mod constants;

/// Utility functions for date/time handling and other helpers
pub mod utils;

// Re-export the metadata object for convenient access
pub use app_info::AppInfo;
