//! Structural helpers: striped list items and tables.

pub mod list;
pub mod table;

pub use list::{
    convert_to_list_items, position_classes, render_list_items, ListItem, PositionClass,
};
pub use table::{generate_table, render_table, Table};
