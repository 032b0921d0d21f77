//! Utility modules for the Timestring library.
//!
//! This module contains common utility functions and helpers that are used
//! by applications embedding this library. These utilities provide
//! functionality for date/time handling and other cross-cutting concerns.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Date and time formatting, parsing, and manipulation functions
//!
//! # Design Philosophy
//!
//! All utilities follow these principles:
//!
//! - **Pure functions** when possible - Avoid side effects for predictable behavior
//! - **No shared state** - Each call builds what it needs and discards it
//! - **Testability** - Easy to unit test with clear inputs and outputs

pub mod datetime;
