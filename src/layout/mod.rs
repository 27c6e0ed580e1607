#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Owned element tree for parsed layout documents.
pub mod document;
/// Parsing and loading of submitted layout files.
pub mod parser;

pub use document::{Attribute, Element};
pub use parser::Parser;
