//! Hyperlinks that know about the current page.

use crate::markup::{Attributes, ContentTag};

/// Answers whether a URL points at the page being rendered.
pub trait Router {
    fn is_current(&self, url: &str) -> bool;
}

impl<F> Router for F
where
    F: Fn(&str) -> bool,
{
    fn is_current(&self, url: &str) -> bool {
        self(url)
    }
}

/// An `a` element. A caller-supplied `href` in `attrs` wins over `url`.
pub fn link_to(name: &str, url: &str, attrs: &Attributes, tag: &impl ContentTag) -> String {
    let mut attrs = attrs.clone();
    if attrs.get("href").is_none() {
        attrs.set("href", url);
    }
    tag.content_tag("a", name, &attrs)
}

/// Like [`link_to`], but a link to the current page gets an `active` class
/// appended to whatever classes it already has.
pub fn link(
    name: &str,
    url: &str,
    attrs: &Attributes,
    router: &impl Router,
    tag: &impl ContentTag,
) -> String {
    if !router.is_current(url) {
        return link_to(name, url, attrs, tag);
    }

    let mut classes: Vec<&str> = attrs.get("class").unwrap_or("").split_whitespace().collect();
    classes.push("active");
    let attrs = attrs.clone().with("class", classes.join(" "));
    link_to(name, url, &attrs, tag)
}
