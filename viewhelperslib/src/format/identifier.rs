//! Namespaced, mixed-case identifiers to lowercase path-like tokens.
//!
//! `Admin::UserAccount` becomes `admin/user_account`, `HTMLParser` becomes
//! `html_parser`. Useful for deriving template paths and CSS class names from
//! type names.

/// Convert `identifier` to its lowercase, underscore-separated form.
///
/// Case boundaries are detected on ASCII letters only. The result is a fixed
/// point: converting it again returns it unchanged.
pub fn snakeify(identifier: &str) -> String {
    let pathed = identifier.replace("::", "/");
    let chars: Vec<char> = pathed.chars().collect();

    let split_acronyms = insert_underscores(&chars, |prev, cur, next| {
        prev.is_ascii_uppercase()
            && cur.is_ascii_uppercase()
            && next.is_some_and(|c| c.is_ascii_lowercase())
    });
    let split_words = insert_underscores(&split_acronyms, |prev, cur, _| {
        (prev.is_ascii_lowercase() || prev.is_ascii_digit()) && cur.is_ascii_uppercase()
    });

    split_words
        .into_iter()
        .map(|c| if c == '-' { '_' } else { c })
        .collect::<String>()
        .to_lowercase()
}

/// Copy `chars`, putting `_` before every position where `boundary` holds.
///
/// `boundary` sees the previous character, the current one and the next one.
fn insert_underscores<F>(chars: &[char], boundary: F) -> Vec<char>
where
    F: Fn(char, char, Option<char>) -> bool,
{
    let mut out = Vec::with_capacity(chars.len() + chars.len() / 2);
    for (i, &cur) in chars.iter().enumerate() {
        if i > 0 && boundary(chars[i - 1], cur, chars.get(i + 1).copied()) {
            out.push('_');
        }
        out.push(cur);
    }
    out
}
