//! Tables from a collection of rows.
//!
//! The layout step ([`generate_table`]) only decides which header and body
//! cells exist and in what order. Rendering goes through the caller's
//! [`ContentTag`] so the host templating layer owns the actual markup.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::markup::{Attributes, ContentTag};

/// Table-ready cell text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Header cells, if the caller supplied headers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<Vec<String>>,
    /// Body rows; rows may differ in length
    pub rows: Vec<Vec<String>>,
    /// Attributes for the outer `table` element
    #[serde(skip_serializing_if = "Attributes::is_empty", default)]
    pub attrs: Attributes,
}

impl Table {
    /// Render `thead` (when there is a header) followed by `tbody`,
    /// wrapped once in `table`.
    pub fn render(&self, tag: &impl ContentTag) -> String {
        let none = Attributes::new();

        let thead = self.header.as_ref().map(|header| {
            let row = render_row(tag, "th", header, &none);
            tag.content_tag("thead", &row, &none)
        });

        let body_rows: Vec<String> = self
            .rows
            .iter()
            .map(|values| render_row(tag, "td", values, &none))
            .collect();
        let tbody = tag.content_tag_join("tbody", &body_rows, &none);

        let sections: Vec<String> = thead.into_iter().chain(std::iter::once(tbody)).collect();
        tag.content_tag_join("table", &sections, &self.attrs)
    }

    /// Number of cells in the widest row, header included.
    pub fn width(&self) -> usize {
        let header = self.header.as_ref().map_or(0, Vec::len);
        self.rows.iter().map(Vec::len).fold(header, usize::max)
    }
}

fn render_row(tag: &impl ContentTag, cell: &str, values: &[String], none: &Attributes) -> String {
    let cells: Vec<String> = values
        .iter()
        .map(|value| tag.content_tag(cell, value, none))
        .collect();
    tag.content_tag_join("tr", &cells, none)
}

/// Lay out `collection` under optional `headers`.
///
/// Returns `None` for an absent or empty collection. Every row keeps its own
/// number of cells.
pub fn generate_table<R, C, H>(
    collection: Option<&[R]>,
    headers: Option<&[H]>,
    attrs: Attributes,
) -> Option<Table>
where
    R: AsRef<[C]>,
    C: Display,
    H: AsRef<str>,
{
    let collection = match collection {
        Some(rows) if !rows.is_empty() => rows,
        _ => {
            debug!("skipping table for empty collection");
            return None;
        }
    };

    let header = headers.map(|headers| {
        headers
            .iter()
            .map(|h| h.as_ref().to_string())
            .collect::<Vec<_>>()
    });
    let rows = collection
        .iter()
        .map(|row| row.as_ref().iter().map(ToString::to_string).collect())
        .collect();

    let table = Table {
        header,
        rows,
        attrs,
    };
    debug!(rows = table.rows.len(), width = table.width(), "laid out table");
    Some(table)
}

/// Lay out and render in one step.
pub fn render_table<R, C, H>(
    collection: Option<&[R]>,
    headers: Option<&[H]>,
    attrs: Attributes,
    tag: &impl ContentTag,
) -> Option<String>
where
    R: AsRef<[C]>,
    C: Display,
    H: AsRef<str>,
{
    generate_table(collection, headers, attrs).map(|table| table.render(tag))
}
