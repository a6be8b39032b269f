//! Thousands separators for decimal numerals.
//!
//! Grouping works on the text form of a number, so values of any width
//! (integers, floats, arbitrary-precision decimals rendered to a string)
//! are handled the same way: `532566` becomes `532,566` and
//! `79593255.66` becomes `79,593,255.66`.
//!
//! Known limitation: characters other than ASCII digits are opaque. Only a
//! digit run that touches the decimal point (or follows an existing comma)
//! is grouped; anything else is copied unchanged.

use std::fmt::Display;

/// Insert a comma between every group of three integer digits.
///
/// The fractional part, starting at the first `.`, is kept verbatim.
pub fn commify(numeral: &str) -> String {
    let (integer, fraction) = match numeral.find('.') {
        Some(dot) => numeral.split_at(dot),
        None => (numeral, ""),
    };

    let mut reversed: Vec<char> = integer.chars().rev().collect();
    while insert_separators(&mut reversed) {}

    let mut out: String = reversed.into_iter().rev().collect();
    out.push_str(fraction);
    out
}

/// Group the `Display` form of any value.
pub fn commify_value(value: impl Display) -> String {
    commify(&value.to_string())
}

/// One left-to-right pass over the reversed integer part.
///
/// Wherever an anchor (the start of the text, or a `,` or `.`) is followed by
/// three digits and then one more digit, a comma goes between the group and
/// that digit. Matches do not overlap. Returns whether anything was inserted.
fn insert_separators(reversed: &mut Vec<char>) -> bool {
    let mut out = Vec::with_capacity(reversed.len() + reversed.len() / 3);
    let mut inserted = false;
    let mut i = 0;

    while i < reversed.len() {
        let anchor = match reversed[i] {
            ',' | '.' => Some(1),
            _ if i == 0 => Some(0),
            _ => None,
        };
        let group_start = anchor.map(|len| i + len);

        match group_start {
            Some(start) if is_digit_run(reversed, start, 4) => {
                out.extend_from_slice(&reversed[i..start + 3]);
                out.push(',');
                out.push(reversed[start + 3]);
                i = start + 4;
                inserted = true;
            }
            _ => {
                out.push(reversed[i]);
                i += 1;
            }
        }
    }

    *reversed = out;
    inserted
}

fn is_digit_run(chars: &[char], start: usize, len: usize) -> bool {
    chars
        .get(start..start + len)
        .is_some_and(|run| run.iter().all(|c| c.is_ascii_digit()))
}
