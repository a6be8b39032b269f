//! Pure text transformations: dates, numerals, identifiers and JS strings.
//!
//! Each function takes plain values and returns a plain `String`; none of
//! them emit markup.

pub mod date;
pub mod identifier;
pub mod js;
pub mod number;

pub use date::{
    format_relative_or_date, format_relative_or_date_with, parse_instant, Clock, DateFormatter,
    DistanceInWords, FixedClock, RelativeTime, SystemClock,
};
pub use identifier::snakeify;
pub use js::js_string;
pub use number::{commify, commify_value};
