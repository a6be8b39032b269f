//! Markup emission seam.
//!
//! The formatters never build tags themselves. They hand a tag name, a body
//! and an attribute list to a [`ContentTag`] implementation supplied by the
//! host templating layer. [`Html`] is a plain default emitter for callers
//! that have no templating layer of their own.
//!
//! Bodies and attribute values are written as given: fragments are expected
//! to be rendered (and escaped, where needed) by the caller.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ViewHelperError;

/// Ordered element attributes. Insertion order is kept in the output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set an attribute, replacing an existing value for the same key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Set an attribute in place, keeping the original position of an existing key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.set(k, v);
        }
        attrs
    }
}

impl FromStr for Attributes {
    type Err = ViewHelperError;

    /// Parse a single `key=value` pair. The value may be empty or contain `=`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok(Attributes::new().with(key.trim(), value))
            }
            _ => Err(ViewHelperError::InvalidAttribute(s.to_string())),
        }
    }
}

impl fmt::Display for Attributes {
    /// Renders as ` key="value"` pairs, each with a leading space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            write!(f, " {}=\"{}\"", key, value)?;
        }
        Ok(())
    }
}

/// The markup-emission primitive.
pub trait ContentTag {
    /// Wrap `body` in a `name` element carrying `attrs`.
    fn content_tag(&self, name: &str, body: &str, attrs: &Attributes) -> String;

    /// Wrap already-rendered sibling fragments, newline-joined, in one element.
    fn content_tag_join(&self, name: &str, children: &[String], attrs: &Attributes) -> String {
        self.content_tag(name, &children.join("\n"), attrs)
    }
}

/// Plain HTML emitter: `<name attrs>body</name>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Html;

impl ContentTag for Html {
    fn content_tag(&self, name: &str, body: &str, attrs: &Attributes) -> String {
        format!("<{name}{attrs}>{body}</{name}>")
    }
}

impl<T: ContentTag + ?Sized> ContentTag for &T {
    fn content_tag(&self, name: &str, body: &str, attrs: &Attributes) -> String {
        (**self).content_tag(name, body, attrs)
    }
}
