#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::Serialize;

use crate::constants::ANDROID_NS;

/// A single attribute on a layout element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Namespace URI the attribute was declared under, if any.
    pub namespace: Option<String>,
    /// Local attribute name, without any namespace prefix.
    pub name:      String,
    /// Raw attribute value as written in the source.
    pub value:     String,
}

/// An element of a parsed layout document. Owns its attributes and child
/// elements; children are kept in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    /// Tag name, without any namespace prefix.
    pub tag:        String,
    /// Attributes in source order.
    pub attributes: Vec<Attribute>,
    /// Child elements in document order.
    pub children:   Vec<Element>,
}

impl Element {
    /// Looks up an Android resource attribute by local name. The
    /// namespaced key is tried first, then the bare local name, so
    /// submissions that omit the namespace declaration resolve to the same
    /// logical attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attr_ns(ANDROID_NS, name)
    }

    /// Two-key attribute lookup: the fully-qualified namespaced key wins
    /// when both forms are present, the bare local name is the fallback.
    pub fn attr_ns(&self, namespace: &str, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.namespace.as_deref() == Some(namespace) && a.name == name)
            .or_else(|| {
                self.attributes
                    .iter()
                    .find(|a| a.namespace.is_none() && a.name == name)
            })
            .map(|a| a.value.as_str())
    }

    /// Pre-order traversal over this element and everything below it.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// All elements with the given tag, in document order.
    pub fn find_all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.walk().filter(move |e| e.tag == tag)
    }

    /// The first element with the given tag in document order. Document
    /// order is the fixed tie-break rule when several candidates exist.
    pub fn find_first(&self, tag: &str) -> Option<&Element> {
        self.walk().find(|e| e.tag == tag)
    }
}

/// Iterator yielding an element tree in pre-order.
pub struct Walk<'a> {
    /// Elements not yet yielded, most recently discovered first.
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
