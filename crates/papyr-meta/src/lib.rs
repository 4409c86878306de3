//! Post metadata support: front matter and slugs.
//!
//! Posts carry a leading `---`-delimited block of `key: value` lines with
//! their title, date and optional description. This crate splits that block
//! off the markdown body and parses it, and derives URL-friendly slugs from
//! post titles.

mod front_matter;
mod slug;

pub use front_matter::{MetaError, PostMeta, split_front_matter};
pub use slug::slugify;
