// tagsift/src/ui/mod.rs
//! Terminal presentation helpers.

pub mod output_format;
pub mod tag_summary;
