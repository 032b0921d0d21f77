//! Date and time utility functions
//!
//! This module provides strict parsers from fixed string layouts to
//! absolute instants, formatters from instants back to those layouts
//! (optionally rendered in a named timezone), and calendar-aware
//! relative-day helpers.
//!
//! Parsing is strict: the input must match its layout exactly, including
//! field widths and literal separators, and a mismatch yields `None`
//! rather than an error. Formatting is total. A named zone that fails to
//! resolve falls back to the host's local zone, never to UTC.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::constants::{
    DATE_ONLY_FORMAT, FULL_FORMAT, FULL_NO_SECONDS_FORMAT, FULL_SLASH_FORMAT, HOUR_MINUTE_FORMAT,
    ISO8601_FORMAT, TAIPEI_ZONE,
};

// Shape masks enforcing exact field widths and separators before chrono
// gets to see the input. `#` is an ASCII digit, `+` is either sign, any
// other byte matches itself.
const FULL_SHAPE: &str = "####-##-## ##:##:##";
const FULL_NO_SECONDS_SHAPE: &str = "####-##-## ##:##";
const DATE_ONLY_SHAPE: &str = "####-##-##";
const ISO8601_SHAPE: &str = "####-##-##T##:##:##+##:##";

fn matches_shape(text: &str, shape: &str) -> bool {
    text.len() == shape.len()
        && text.bytes().zip(shape.bytes()).all(|(have, want)| match want {
            b'#' => have.is_ascii_digit(),
            b'+' => have == b'+' || have == b'-',
            _ => have == want,
        })
}

/// Interpret a naive wall time in the host's local zone.
///
/// A wall time that does not exist locally (DST spring-forward gap)
/// yields `None`; an ambiguous one (fall-back fold) resolves to its
/// first occurrence.
fn local_instant(naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_local(text: &str, format: &str, shape: &str) -> Option<DateTime<Utc>> {
    if !matches_shape(text, shape) {
        return None;
    }
    let naive = NaiveDateTime::parse_from_str(text, format).ok()?;
    local_instant(naive)
}

/// Parse a `yyyy-MM-dd HH:mm:ss` string in the host's local zone.
///
/// # Arguments
/// * `text` - Date string, e.g. `"2024-01-05 10:30:00"`
///
/// # Returns
/// * `Option<DateTime<Utc>>` - The instant, or `None` on any mismatch
pub fn parse_full(text: &str) -> Option<DateTime<Utc>> {
    parse_local(text, FULL_FORMAT, FULL_SHAPE)
}

/// Parse a `yyyy-MM-dd HH:mm` string in the host's local zone.
pub fn parse_full_no_seconds(text: &str) -> Option<DateTime<Utc>> {
    parse_local(text, FULL_NO_SECONDS_FORMAT, FULL_NO_SECONDS_SHAPE)
}

/// Parse a `yyyy-MM-dd` string as midnight local time.
pub fn parse_date_only(text: &str) -> Option<DateTime<Utc>> {
    if !matches_shape(text, DATE_ONLY_SHAPE) {
        return None;
    }
    let date = NaiveDate::parse_from_str(text, DATE_ONLY_FORMAT).ok()?;
    local_instant(date.and_hms_opt(0, 0, 0)?)
}

/// Parse an ISO 8601 string with an embedded numeric offset.
///
/// The offset must be in `+HH:mm` form, e.g. `"2025-03-01T12:00:00+08:00"`.
/// A literal `Z` suffix is rejected.
pub fn parse_iso8601(text: &str) -> Option<DateTime<Utc>> {
    if !matches_shape(text, ISO8601_SHAPE) {
        return None;
    }
    DateTime::parse_from_str(text, ISO8601_FORMAT)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Format an instant as `HH:mm` in the host's local zone.
pub fn format_hour_minute(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&Local).format(HOUR_MINUTE_FORMAT).to_string()
}

/// Format an instant as `yyyy/MM/dd HH:mm` in the host's local zone.
pub fn format_full_slash(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&Local).format(FULL_SLASH_FORMAT).to_string()
}

/// Format an instant as `yyyy-MM-dd` in the host's local zone.
pub fn format_date_only(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&Local).format(DATE_ONLY_FORMAT).to_string()
}

/// Render an instant with the given pattern in a named zone, falling
/// back to the host's local zone when the name does not resolve.
fn format_at_zone(instant: DateTime<Utc>, zone: &str, format: &str) -> String {
    match zone.parse::<Tz>() {
        Ok(tz) => instant.with_timezone(&tz).format(format).to_string(),
        Err(_) => {
            log::debug!("unknown time zone {zone:?}, formatting in local time");
            instant.with_timezone(&Local).format(format).to_string()
        }
    }
}

/// Format an instant as `yyyy-MM-dd HH:mm:ss` in the named zone.
///
/// # Arguments
/// * `zone` - IANA zone name, e.g. `"Asia/Taipei"`; an unresolvable
///   name falls back to the host's local zone
pub fn format_full_at_zone(instant: DateTime<Utc>, zone: &str) -> String {
    format_at_zone(instant, zone, FULL_FORMAT)
}

/// Format an instant as ISO 8601 with numeric offset in the named zone.
///
/// An unresolvable zone name falls back to the host's local zone.
pub fn format_iso8601_at_zone(instant: DateTime<Utc>, zone: &str) -> String {
    format_at_zone(instant, zone, ISO8601_FORMAT)
}

/// Format an instant as ISO 8601 in the named zone, requiring the zone
/// to resolve.
///
/// Unlike [`format_iso8601_at_zone`] there is no local-zone fallback:
/// an unresolvable name yields `None`.
pub fn format_iso8601(instant: DateTime<Utc>, zone: &str) -> Option<String> {
    let tz: Tz = zone.parse().ok()?;
    Some(instant.with_timezone(&tz).format(ISO8601_FORMAT).to_string())
}

/// Format an instant as `yyyy-MM-dd HH:mm:ss` in Taipei time.
pub fn format_full_taipei(instant: DateTime<Utc>) -> String {
    format_full_at_zone(instant, TAIPEI_ZONE)
}

/// Format an instant as ISO 8601 in Taipei time, e.g. `2025-03-01T12:00:00+08:00`.
pub fn format_iso8601_taipei(instant: DateTime<Utc>) -> String {
    format_iso8601_at_zone(instant, TAIPEI_ZONE)
}

/// Add whole calendar days in local time, preserving the wall-clock time.
///
/// When the resulting wall time lands in a DST gap or fold, a fixed
/// 24-hour step is taken instead.
fn add_calendar_days(now: DateTime<Local>, days: i64) -> DateTime<Local> {
    let date = now.date_naive() + Duration::days(days);
    let naive = date.and_time(now.time());
    Local
        .from_local_datetime(&naive)
        .single()
        .unwrap_or_else(|| now + Duration::days(days))
}

/// The current instant plus one calendar day.
pub fn tomorrow() -> DateTime<Utc> {
    tomorrow_at(Local::now())
}

/// One calendar day after the given local time.
pub fn tomorrow_at(now: DateTime<Local>) -> DateTime<Utc> {
    add_calendar_days(now, 1).with_timezone(&Utc)
}

/// The current instant plus two calendar days.
pub fn day_after_tomorrow() -> DateTime<Utc> {
    day_after_tomorrow_at(Local::now())
}

/// Two calendar days after the given local time.
pub fn day_after_tomorrow_at(now: DateTime<Local>) -> DateTime<Utc> {
    add_calendar_days(now, 2).with_timezone(&Utc)
}

/// Whether the instant falls on the local calendar date two days from today.
///
/// Only the date component is compared; the time of day on either side
/// is ignored.
pub fn is_day_after_tomorrow(instant: DateTime<Utc>) -> bool {
    is_day_after_tomorrow_at(instant, Local::now())
}

/// Whether the instant falls exactly two calendar days after `now`.
pub fn is_day_after_tomorrow_at(instant: DateTime<Utc>, now: DateTime<Local>) -> bool {
    let date = instant.with_timezone(&Local).date_naive();
    (date - now.date_naive()).num_days() == 2
}
