//! Input options for the formatters and layout helpers.
//!
//! Every option type has a sensible `Default`, builder-style setters and
//! serde derives so that it can be loaded from template configuration.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ViewHelperError;
use crate::Result;

/// Options for list item rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Attach alternating `odd`/`even` classes
    #[serde(default = "default_stripe")]
    pub stripe: bool,
}

fn default_stripe() -> bool {
    true
}

impl Default for ListOptions {
    fn default() -> Self {
        Self { stripe: true }
    }
}

impl ListOptions {
    /// Striped list (default)
    pub fn new() -> Self {
        Self::default()
    }

    /// List without stripe classes
    pub fn unstriped() -> Self {
        Self { stripe: false }
    }

    /// Builder: set striping
    pub fn with_stripe(mut self, stripe: bool) -> Self {
        self.stripe = stripe;
        self
    }
}

/// Override formats for absolute dates.
///
/// Formats are strftime strings as understood by `chrono`. They are checked
/// when set, so a `DateFormatOptions` value always formats successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDateFormatOptions")]
pub struct DateFormatOptions {
    short_format: Option<String>,
    long_format: Option<String>,
}

#[derive(Deserialize)]
struct RawDateFormatOptions {
    #[serde(default)]
    short_format: Option<String>,
    #[serde(default)]
    long_format: Option<String>,
}

impl TryFrom<RawDateFormatOptions> for DateFormatOptions {
    type Error = ViewHelperError;

    fn try_from(raw: RawDateFormatOptions) -> Result<Self> {
        let mut options = DateFormatOptions::new();
        if let Some(format) = raw.short_format {
            options = options.short_format(format)?;
        }
        if let Some(format) = raw.long_format {
            options = options.long_format(format)?;
        }
        Ok(options)
    }
}

impl DateFormatOptions {
    /// No overrides: use the built-in `Jan 5` / `Jan 5, 2019` shapes
    pub fn new() -> Self {
        Self::default()
    }

    /// Format for dates older than a week but within the current year.
    pub fn short_format(mut self, format: impl Into<String>) -> Result<Self> {
        let format = format.into();
        validate_format(&format)?;
        self.short_format = Some(format);
        Ok(self)
    }

    /// Format for dates from another year.
    pub fn long_format(mut self, format: impl Into<String>) -> Result<Self> {
        let format = format.into();
        validate_format(&format)?;
        self.long_format = Some(format);
        Ok(self)
    }

    pub fn short(&self) -> Option<&str> {
        self.short_format.as_deref()
    }

    pub fn long(&self) -> Option<&str> {
        self.long_format.as_deref()
    }
}

/// Reject unknown specifiers, and parse-only ones such as `%#z` that
/// chrono accepts but cannot render.
fn validate_format(format: &str) -> Result<()> {
    let invalid = |message: String| ViewHelperError::InvalidDateFormat {
        format: format.to_string(),
        message,
    };
    for (position, item) in StrftimeItems::new(format).enumerate() {
        if let Item::Error = item {
            return Err(invalid(format!("unrecognized specifier at item {}", position)));
        }
    }
    let sample = DateTime::<Utc>::default();
    let mut rendered = String::new();
    write!(rendered, "{}", sample.format(format))
        .map_err(|_| invalid("specifier cannot be formatted".to_string()))?;
    Ok(())
}
