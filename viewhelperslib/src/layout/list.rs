//! List items with positional CSS classes.
//!
//! Give it a sequence of rendered fragments and get back one `li` per
//! fragment. The first item gets `first`, the last gets `last`, and with
//! striping on, items alternate `odd`/`even` starting from `odd`, so the
//! first visual row is row one.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::markup::{Attributes, ContentTag};
use crate::options::ListOptions;

/// A positional styling class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionClass {
    First,
    Last,
    Odd,
    Even,
}

impl PositionClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionClass::First => "first",
            PositionClass::Last => "last",
            PositionClass::Odd => "odd",
            PositionClass::Even => "even",
        }
    }
}

impl fmt::Display for PositionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fragment paired with the classes for its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub content: String,
    pub classes: Vec<PositionClass>,
}

impl ListItem {
    /// Classes joined by single spaces; empty when none apply.
    pub fn class_attr(&self) -> String {
        self.classes
            .iter()
            .map(PositionClass::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Render as an `li` element. The `class` attribute is always present.
    pub fn render(&self, tag: &impl ContentTag) -> String {
        let attrs = Attributes::new().with("class", self.class_attr());
        tag.content_tag("li", &self.content, &attrs)
    }
}

/// Classes for the item at `index`, in the order first, last, stripe.
///
/// `first`/`last` compare values, not positions: every item equal to the
/// first (or last) item is tagged. Stripes count from one, so index 0 is
/// `odd`. Returns `None` when `index` is out of bounds.
pub fn position_classes<S: AsRef<str>>(
    items: &[S],
    index: usize,
    options: &ListOptions,
) -> Option<Vec<PositionClass>> {
    let item = items.get(index)?.as_ref();
    let mut classes = Vec::with_capacity(3);

    if items.first().is_some_and(|first| first.as_ref() == item) {
        classes.push(PositionClass::First);
    }
    if items.last().is_some_and(|last| last.as_ref() == item) {
        classes.push(PositionClass::Last);
    }
    if options.stripe {
        classes.push(if index % 2 == 1 {
            PositionClass::Even
        } else {
            PositionClass::Odd
        });
    }

    Some(classes)
}

/// Pair every fragment with its position classes.
pub fn convert_to_list_items<S: AsRef<str>>(items: &[S], options: &ListOptions) -> Vec<ListItem> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| ListItem {
            content: item.as_ref().to_string(),
            classes: position_classes(items, index, options).unwrap_or_default(),
        })
        .collect()
}

/// Render every fragment as an `li`, newline-joined.
pub fn render_list_items<S: AsRef<str>>(
    items: &[S],
    options: &ListOptions,
    tag: &impl ContentTag,
) -> String {
    debug!(count = items.len(), stripe = options.stripe, "rendering list items");
    convert_to_list_items(items, options)
        .iter()
        .map(|item| item.render(tag))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Html;
    use proptest::prelude::*;

    fn class_attrs(items: &[&str], options: &ListOptions) -> Vec<String> {
        convert_to_list_items(items, options)
            .iter()
            .map(ListItem::class_attr)
            .collect()
    }

    #[test]
    fn test_four_items_striped() {
        let classes = class_attrs(&["a", "b", "c", "d"], &ListOptions::default());
        assert_eq!(classes, vec!["first odd", "even", "odd", "last even"]);
    }

    #[test]
    fn test_unstriped() {
        let classes = class_attrs(&["a", "b", "c"], &ListOptions::unstriped());
        assert_eq!(classes, vec!["first", "", "last"]);
    }

    #[test]
    fn test_single_item_is_first_and_last() {
        let classes = class_attrs(&["only"], &ListOptions::default());
        assert_eq!(classes, vec!["first last odd"]);
    }

    #[test]
    fn test_duplicates_tagged_by_value() {
        let classes = class_attrs(&["x", "y", "x", "z", "z"], &ListOptions::default());
        assert_eq!(
            classes,
            vec!["first odd", "even", "first odd", "last even", "last odd"]
        );
    }

    #[test]
    fn test_empty_list() {
        let empty: [&str; 0] = [];
        assert!(convert_to_list_items(&empty, &ListOptions::default()).is_empty());
        assert_eq!(render_list_items(&empty, &ListOptions::default(), &Html), "");
    }

    #[test]
    fn test_render_list_items() {
        let out = render_list_items(&["One", "Two"], &ListOptions::default(), &Html);
        assert_eq!(
            out,
            "<li class=\"first odd\">One</li>\n<li class=\"last even\">Two</li>"
        );
    }

    #[test]
    fn test_render_keeps_empty_class() {
        let out = render_list_items(&["a", "b", "c"], &ListOptions::unstriped(), &Html);
        assert_eq!(out.lines().nth(1), Some("<li class=\"\">b</li>"));
    }

    #[test]
    fn test_position_classes_out_of_bounds() {
        let items = ["a", "b"];
        assert_eq!(
            position_classes(&items, 1, &ListOptions::default()),
            Some(vec![PositionClass::Last, PositionClass::Even])
        );
        assert_eq!(position_classes(&items, 2, &ListOptions::default()), None);
        let empty: [&str; 0] = [];
        assert_eq!(position_classes(&empty, 0, &ListOptions::default()), None);
    }

    #[test]
    fn test_position_class_serializes_lowercase() {
        let json = serde_json::to_string(&vec![PositionClass::First, PositionClass::Odd]).unwrap();
        assert_eq!(json, r#"["first","odd"]"#);
    }

    proptest! {
        #[test]
        fn prop_distinct_items_follow_position(len in 1usize..40, stripe in any::<bool>()) {
            let items: Vec<String> = (0..len).map(|i| format!("item{}", i)).collect();
            let options = ListOptions::new().with_stripe(stripe);
            for (index, item) in convert_to_list_items(&items, &options).iter().enumerate() {
                prop_assert_eq!(item.classes.contains(&PositionClass::First), index == 0);
                prop_assert_eq!(item.classes.contains(&PositionClass::Last), index == len - 1);
                let stripe_class = item.classes.last().filter(|c| matches!(c, PositionClass::Odd | PositionClass::Even));
                match (stripe, index % 2) {
                    (false, _) => prop_assert!(stripe_class.is_none()),
                    (true, 0) => prop_assert_eq!(stripe_class, Some(&PositionClass::Odd)),
                    (true, _) => prop_assert_eq!(stripe_class, Some(&PositionClass::Even)),
                }
            }
        }
    }
}
