//! Helpers over record-like values.
//!
//! The host application describes its records through [`Record`] (column
//! introspection) and [`Resource`] (routes), so nothing here depends on an
//! ORM or a router.

use crate::helpers::link::link_to;
use crate::helpers::pair::info_pair;
use crate::layout::list::render_list_items;
use crate::markup::{Attributes, ContentTag};
use crate::options::ListOptions;

/// Column introspection for a record.
pub trait Record {
    /// Column names in display order.
    fn column_names(&self) -> Vec<String>;

    /// Display text for a column, `None` when the value is null.
    fn column_value(&self, name: &str) -> Option<String>;
}

/// Routes for a record.
pub trait Resource {
    fn path(&self) -> String;
    fn edit_path(&self) -> String;
}

/// A `ul.model_columns` list with one info pair per column.
pub fn list_model_columns(record: &impl Record, tag: &impl ContentTag) -> String {
    let pairs: Vec<String> = record
        .column_names()
        .iter()
        .map(|name| info_pair(name, record.column_value(name).as_deref(), tag))
        .collect();
    let items = render_list_items(&pairs, &ListOptions::default(), tag);
    tag.content_tag(
        "ul",
        &items,
        &Attributes::new().with("class", "model_columns"),
    )
}

/// Edit and delete links for a record, as a `td.options` cell.
///
/// The delete link carries `data-confirm` and `data-method="delete"` for
/// unobtrusive JS handlers. `hide_destroy` leaves it out.
pub fn options_td(resource: &impl Resource, hide_destroy: bool, tag: &impl ContentTag) -> String {
    let mut links = vec![link_to("Edit", &resource.edit_path(), &Attributes::new(), tag)];
    if !hide_destroy {
        let attrs = Attributes::new()
            .with("data-confirm", "Are you sure?")
            .with("data-method", "delete")
            .with("rel", "nofollow")
            .with("class", "destructive");
        links.push(link_to("Delete", &resource.path(), &attrs, tag));
    }
    let items = render_list_items(&links, &ListOptions::default(), tag);
    let list = tag.content_tag("ul", &items, &Attributes::new());
    tag.content_tag("td", &list, &Attributes::new().with("class", "options"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Html;

    struct Post {
        id: u32,
        title: &'static str,
        body: Option<&'static str>,
    }

    impl Record for Post {
        fn column_names(&self) -> Vec<String> {
            vec!["id".to_string(), "title".to_string(), "body".to_string()]
        }

        fn column_value(&self, name: &str) -> Option<String> {
            match name {
                "id" => Some(self.id.to_string()),
                "title" => Some(self.title.to_string()),
                "body" => self.body.map(str::to_string),
                _ => None,
            }
        }
    }

    impl Resource for Post {
        fn path(&self) -> String {
            format!("/posts/{}", self.id)
        }

        fn edit_path(&self) -> String {
            format!("/posts/{}/edit", self.id)
        }
    }

    fn post() -> Post {
        Post {
            id: 7,
            title: "Hello",
            body: None,
        }
    }

    #[test]
    fn test_list_model_columns() {
        let html = list_model_columns(&post(), &Html);
        assert!(html.starts_with("<ul class=\"model_columns\"><li class=\"first odd\">"));
        assert!(html.contains("<span class=\"label\">title:</span> Hello"));
        assert!(html.contains(
            "<li class=\"last odd\"><span class=\"info_pair\"><span class=\"label\">body:</span> <span class=\"blank\">None</span></span></li>"
        ));
        assert_eq!(html.matches("<li ").count(), 3);
    }

    #[test]
    fn test_options_td() {
        let html = options_td(&post(), false, &Html);
        assert_eq!(
            html,
            "<td class=\"options\"><ul><li class=\"first odd\"><a href=\"/posts/7/edit\">Edit</a></li>\n\
             <li class=\"last even\"><a data-confirm=\"Are you sure?\" data-method=\"delete\" rel=\"nofollow\" class=\"destructive\" href=\"/posts/7\">Delete</a></li></ul></td>"
        );
    }

    #[test]
    fn test_options_td_without_destroy() {
        let html = options_td(&post(), true, &Html);
        assert!(html.contains("<li class=\"first last odd\"><a href=\"/posts/7/edit\">Edit</a></li>"));
        assert!(!html.contains("Delete"));
    }
}
