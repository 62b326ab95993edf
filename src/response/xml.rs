use roxmltree::Node;

use crate::error::{ElawsError, Result};

/// First direct child element with the given tag name.
///
/// Presence is decided by whether the element is found, never by the
/// element's emptiness.
pub(crate) fn child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == tag)
}

pub(crate) fn require_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Result<Node<'a, 'input>> {
    child(node, tag).ok_or_else(|| ElawsError::missing_element(tag))
}

/// Text of a required child element. A present but textless element reads
/// as the empty string.
pub(crate) fn child_text(node: Node, tag: &str) -> Result<String> {
    let elem = require_child(node, tag)?;
    Ok(elem.text().unwrap_or_default().to_string())
}

/// Text of an optional child element. Absent element or absent text is `None`.
pub(crate) fn optional_child_text(node: Node, tag: &str) -> Option<String> {
    child(node, tag).and_then(|n| n.text()).map(str::to_string)
}

/// Text of a required child element whose text may be absent.
pub(crate) fn required_child_optional_text(node: Node, tag: &str) -> Result<Option<String>> {
    let elem = require_child(node, tag)?;
    Ok(elem.text().map(str::to_string))
}

/// Integer value of a required child element.
pub(crate) fn child_int(node: Node, tag: &str) -> Result<i32> {
    let text = child_text(node, tag)?;
    text.trim()
        .parse()
        .map_err(|_| ElawsError::invalid_integer(tag, &text))
}

/// An owned, immutable copy of one XML subtree.
///
/// Captured from the source document by byte range, so the fragment stays
/// valid after the parsed document it came from is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlFragment {
    raw: String,
}

impl XmlFragment {
    pub(crate) fn from_node(node: Node) -> Self {
        Self {
            raw: node.document().input_text()[node.range()].to_string(),
        }
    }

    /// Raw XML text of the fragment, from start tag through end tag.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Re-parse the fragment as a standalone document.
    pub fn parse(&self) -> Result<roxmltree::Document<'_>> {
        Ok(roxmltree::Document::parse(&self.raw)?)
    }
}
