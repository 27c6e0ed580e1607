#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::Path;

use super::document::{Attribute, Element};
use crate::error::GradeError;

/// A struct that wraps a parsed layout document and the source markup it
/// was built from.
#[derive(Debug, Clone)]
pub struct Parser {
    /// the source markup being parsed
    code: String,
    /// the owned root element of the parse tree
    root: Element,
}

impl Parser {
    /// Parses layout markup held in memory.
    ///
    /// * `source_code`: the markup to be parsed
    pub fn new(source_code: String) -> Result<Self, GradeError> {
        let document = roxmltree::Document::parse(&source_code).map_err(GradeError::parse)?;
        let root = convert(document.root_element());

        Ok(Self {
            code: source_code,
            root,
        })
    }

    /// Loads and parses the artifact at `path`. A missing file is reported
    /// as `NotFound`; any other read or parse failure is classified as
    /// `Parse` so callers can always map the outcome onto a result
    /// document.
    pub fn load(path: &Path) -> Result<Self, GradeError> {
        if !path.exists() {
            return Err(GradeError::NotFound {
                path: path.display().to_string(),
            });
        }

        let code = std::fs::read_to_string(path).map_err(GradeError::parse)?;
        Self::new(code)
    }

    /// A getter for the parser's source markup
    pub fn code(&self) -> &str {
        self.code.as_str()
    }

    /// The root element of the parsed document.
    pub fn root(&self) -> &Element {
        &self.root
    }
}

/// Converts a borrowed document node into an owned element, recursively.
/// The borrowed document is dropped at the end of the load so the tree can
/// outlive the source buffer it was parsed from.
fn convert(node: roxmltree::Node<'_, '_>) -> Element {
    let attributes = node
        .attributes()
        .map(|a| Attribute {
            namespace: a.namespace().map(str::to_string),
            name:      a.name().to_string(),
            value:     a.value().to_string(),
        })
        .collect();

    let children = node
        .children()
        .filter(roxmltree::Node::is_element)
        .map(convert)
        .collect();

    Element {
        tag: node.tag_name().name().to_string(),
        attributes,
        children,
    }
}
