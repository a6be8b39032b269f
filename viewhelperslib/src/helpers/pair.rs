//! Label/value pairs.

use crate::markup::{Attributes, ContentTag};

/// An easily styleable key-value pair:
/// `<span class="info_pair"><span class="label">Name:</span> value</span>`.
///
/// A blank value (absent, empty or whitespace only) is shown as
/// `<span class="blank">None</span>`.
pub fn info_pair(label: &str, value: Option<&str>, tag: &impl ContentTag) -> String {
    let value = match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => tag.content_tag("span", "None", &Attributes::new().with("class", "blank")),
    };
    let label = tag.content_tag(
        "span",
        &format!("{}:", label),
        &Attributes::new().with("class", "label"),
    );
    tag.content_tag(
        "span",
        &format!("{} {}", label, value),
        &Attributes::new().with("class", "info_pair"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Html;

    #[test]
    fn test_info_pair_with_value() {
        assert_eq!(
            info_pair("Name", Some("Ada"), &Html),
            r#"<span class="info_pair"><span class="label">Name:</span> Ada</span>"#
        );
    }

    #[test]
    fn test_info_pair_blank_values() {
        let expected =
            r#"<span class="info_pair"><span class="label">Email:</span> <span class="blank">None</span></span>"#;
        assert_eq!(info_pair("Email", None, &Html), expected);
        assert_eq!(info_pair("Email", Some(""), &Html), expected);
        assert_eq!(info_pair("Email", Some("  \t"), &Html), expected);
    }
}
