//! Constants used throughout the library
//!
//! This module centralizes the fixed format patterns and named-zone
//! identifiers so that every caller renders and parses the exact same
//! layouts. The patterns are part of the serialized-data contract and
//! must not drift.

// Date/time layout patterns
/// Full date and time: `2024-01-05 10:30:00`
pub const FULL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Full date and time without seconds: `2024-01-05 10:30`
pub const FULL_NO_SECONDS_FORMAT: &str = "%Y-%m-%d %H:%M";
/// Date only: `2024-01-05`
pub const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";
/// ISO 8601 with numeric offset: `2024-01-05T10:30:00+08:00`
pub const ISO8601_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";
/// Time of day: `10:30`
pub const HOUR_MINUTE_FORMAT: &str = "%H:%M";
/// Slash-separated date and time without seconds: `2024/01/05 10:30`
pub const FULL_SLASH_FORMAT: &str = "%Y/%m/%d %H:%M";

// Named zones
/// Zone used by the fixed-zone formatting helpers
pub const TAIPEI_ZONE: &str = "Asia/Taipei";
