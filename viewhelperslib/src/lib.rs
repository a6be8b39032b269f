//! # viewhelperslib
//!
//! Presentation-formatting helpers for templates.
//!
//! ## Overview
//!
//! The helpers turn domain values into display text and markup fragments:
//!
//! - **Dates**: "3 days ago" within a week, "Jan 5" within the year,
//!   "Jan 5, 2019" otherwise
//! - **Numbers**: thousands separators on the integer part of any numeral
//! - **Identifiers**: `Admin::UserAccount` to `admin/user_account`
//! - **JavaScript strings**: escaping for quoted literals and inline scripts
//! - **Lists**: `li` items with `first`/`last`/`odd`/`even` classes
//! - **Tables**: `thead`/`tbody` layout from a collection of rows
//!
//! ## Collaborators
//!
//! Nothing here reads global state. The current time comes from a
//! [`Clock`], relative wording from a [`RelativeTime`] and markup from a
//! [`ContentTag`]. [`SystemClock`], [`DistanceInWords`] and [`Html`] are the
//! defaults.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use viewhelperslib::{
//!     commify, js_string, render_list_items, snakeify, DateFormatOptions, DateFormatter,
//!     FixedClock, Html, ListOptions,
//! };
//!
//! assert_eq!(commify("1234567.89"), "1,234,567.89");
//! assert_eq!(snakeify("Foo::BarBaz"), "foo/bar_baz");
//! assert_eq!(js_string("it's"), "it\\'s");
//!
//! let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
//! let formatter = DateFormatter::new().with_clock(FixedClock(now));
//! let date = Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap();
//! assert_eq!(
//!     formatter.format(Some(&date), &DateFormatOptions::new()).as_deref(),
//!     Some("Jan 5")
//! );
//!
//! let html = render_list_items(&["One", "Two"], &ListOptions::default(), &Html);
//! assert_eq!(
//!     html,
//!     "<li class=\"first odd\">One</li>\n<li class=\"last even\">Two</li>"
//! );
//! ```

pub mod error;
pub mod format;
pub mod helpers;
pub mod layout;
pub mod markup;
pub mod options;

pub use error::ViewHelperError;
pub use format::{
    commify, commify_value, format_relative_or_date, format_relative_or_date_with, js_string,
    parse_instant, snakeify, Clock, DateFormatter, DistanceInWords, FixedClock, RelativeTime,
    SystemClock,
};
pub use helpers::{
    info_pair, link, link_to, list_model_columns, options_td, urlify, Record, RequestInfo,
    Resource, Router,
};
pub use layout::{
    convert_to_list_items, generate_table, position_classes, render_list_items, render_table,
    ListItem, PositionClass, Table,
};
pub use markup::{Attributes, ContentTag, Html};
pub use options::{DateFormatOptions, ListOptions};

/// Result type for viewhelperslib operations
pub type Result<T> = std::result::Result<T, ViewHelperError>;
