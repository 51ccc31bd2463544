//! Writers for the finished data dictionary

pub mod json;
pub mod markdown;

pub use json::write_json;
pub use markdown::{render_markdown, write_markdown};
