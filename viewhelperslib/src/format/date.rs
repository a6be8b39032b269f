//! Relative-or-absolute date formatting.
//!
//! Dates less than a week old read as words ("3 days ago"). Older dates read
//! as a calendar date, with the year only when it differs from the current
//! one ("Jan 5" vs "Jan 5, 2019").
//!
//! The current time is never read implicitly: callers pass `now` directly or
//! go through a [`DateFormatter`], which reads its [`Clock`] once per call.

use std::fmt;

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc,
};
use chrono_humanize::{Accuracy, HumanTime, Tense};
use tracing::trace;

use crate::error::ViewHelperError;
use crate::options::DateFormatOptions;
use crate::Result;

/// Age below which a date is described relative to now.
pub const CUTOVER_SECONDS: i64 = 7 * 24 * 60 * 60;

const SHORT_FORMAT: &str = "%b %e";
const LONG_FORMAT: &str = "%b %e, %Y";

/// Wording for distances too small to count.
const JUST_NOW: &str = "a moment";

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stopped at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Produces the wording for a relative date, without the " ago" suffix.
///
/// `elapsed` is `now - date`; it is negative for dates in the future.
pub trait RelativeTime {
    fn distance_in_words(&self, elapsed: TimeDelta) -> String;
}

impl<F> RelativeTime for F
where
    F: Fn(TimeDelta) -> String,
{
    fn distance_in_words(&self, elapsed: TimeDelta) -> String {
        self(elapsed)
    }
}

/// English relative wording from `chrono-humanize`, at rough accuracy.
///
/// Direction is ignored: the wording is computed on the absolute distance,
/// so a date two days ahead also reads as "2 days".
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceInWords;

impl RelativeTime for DistanceInWords {
    fn distance_in_words(&self, elapsed: TimeDelta) -> String {
        let text = HumanTime::from(elapsed.abs()).to_text_en(Accuracy::Rough, Tense::Present);
        // "now" cannot take the " ago" suffix
        if text == "now" {
            JUST_NOW.to_string()
        } else {
            text
        }
    }
}

/// Format `date` relative to `now` using [`DistanceInWords`].
///
/// Returns `None` when there is no date.
pub fn format_relative_or_date<Tz>(
    date: Option<&DateTime<Tz>>,
    now: DateTime<Utc>,
    options: &DateFormatOptions,
) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    format_relative_or_date_with(date, now, options, &DistanceInWords)
}

/// Format `date` relative to `now`, taking the relative wording from `words`.
///
/// The same-year test compares calendar years in the date's own time zone.
pub fn format_relative_or_date_with<Tz, W>(
    date: Option<&DateTime<Tz>>,
    now: DateTime<Utc>,
    options: &DateFormatOptions,
    words: &W,
) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
    W: RelativeTime + ?Sized,
{
    let date = date?;
    let elapsed = now.signed_duration_since(date);

    if elapsed.num_seconds() < CUTOVER_SECONDS {
        trace!(seconds = elapsed.num_seconds(), "formatting date as relative");
        return Some(format!("{} ago", words.distance_in_words(elapsed)));
    }

    let now = now.with_timezone(&date.timezone());
    let formatted = if date.year() == now.year() {
        trace!(year = date.year(), "formatting date without year");
        match options.short() {
            Some(format) => date.format(format).to_string(),
            None => collapse_spaces(date.format(SHORT_FORMAT).to_string()),
        }
    } else {
        trace!(year = date.year(), "formatting date with year");
        match options.long() {
            Some(format) => date.format(format).to_string(),
            None => collapse_spaces(date.format(LONG_FORMAT).to_string()),
        }
    };
    Some(formatted)
}

/// `%e` pads single-digit days with a space.
fn collapse_spaces(formatted: String) -> String {
    formatted.replace("  ", " ")
}

/// Date formatter bound to a clock and a relative-wording source.
#[derive(Debug, Clone, Default)]
pub struct DateFormatter<C = SystemClock, W = DistanceInWords> {
    clock: C,
    words: W,
}

impl DateFormatter {
    /// Wall clock, English wording.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C, W> DateFormatter<C, W> {
    /// Builder: replace the clock
    pub fn with_clock<C2: Clock>(self, clock: C2) -> DateFormatter<C2, W> {
        DateFormatter {
            clock,
            words: self.words,
        }
    }

    /// Builder: replace the relative wording
    pub fn with_words<W2: RelativeTime>(self, words: W2) -> DateFormatter<C, W2> {
        DateFormatter {
            clock: self.clock,
            words,
        }
    }
}

impl<C: Clock, W: RelativeTime> DateFormatter<C, W> {
    /// Format `date`, reading the clock once.
    pub fn format<Tz>(&self, date: Option<&DateTime<Tz>>, options: &DateFormatOptions) -> Option<String>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let date = date?;
        let now = self.clock.now();
        format_relative_or_date_with(Some(date), now, options, &self.words)
    }
}

/// Parse an instant from RFC 3339, `YYYY-MM-DD HH:MM:SS` (UTC) or
/// `YYYY-MM-DD` (UTC midnight).
pub fn parse_instant(input: &str) -> Result<DateTime<FixedOffset>> {
    let input = input.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Ok(instant);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&naive).into());
    }
    let invalid = |message: String| ViewHelperError::InvalidTimestamp {
        input: input.to_string(),
        message,
    };
    let day = NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|e| invalid(e.to_string()))?;
    let midnight = day
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| invalid("no midnight on this day".to_string()))?;
    Ok(Utc.from_utc_datetime(&midnight).into())
}
