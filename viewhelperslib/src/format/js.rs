//! Escaping text for JavaScript string literals.

/// Escape `text` for use inside a single- or double-quoted JavaScript string.
///
/// The output is also safe inside an inline `<script>` block: `</` is written
/// as `<\/` so the text cannot close the script element. Every line break
/// (CRLF, LF or a lone CR) becomes a single `\n`.
pub fn js_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '<' if chars.peek() == Some(&'/') => {
                chars.next();
                out.push_str("<\\/");
            }
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("\\n");
            }
            '\n' => out.push_str("\\n"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            other => out.push(other),
        }
    }

    out
}
