//! Thin wrappers over the collaborator seams: key/value pairs, links,
//! URLs and record listings.

pub mod link;
pub mod pair;
pub mod record;
pub mod url;

pub use link::{link, link_to, Router};
pub use pair::info_pair;
pub use record::{list_model_columns, options_td, Record, Resource};
pub use url::{urlify, RequestInfo};
