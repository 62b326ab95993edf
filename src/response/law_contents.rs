use std::path::Path;

use roxmltree::{Document, Node};
use serde::Serialize;

use super::xml::{self, child_text, required_child_optional_text, XmlFragment};
use super::{parse_envelope, read_document, ProcessingResult};
use crate::error::Result;

/// Title of one appendix table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppdxTableTitle {
    /// Title text
    pub title: String,
    /// Writing direction attribute, when present
    pub writing_mode: Option<String>,
}

impl AppdxTableTitle {
    pub(crate) fn from_node(node: Node) -> Self {
        Self {
            title: node.text().unwrap_or_default().to_string(),
            writing_mode: node.attribute("WritingMode").map(str::to_string),
        }
    }
}

/// Ordered collection of appendix-table titles.
///
/// A present but childless `AppdxTableTitleLists` element parses to an
/// empty collection; presence is decided by the element being found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppdxTableTitleList {
    titles: Vec<AppdxTableTitle>,
}

impl AppdxTableTitleList {
    pub(crate) fn from_node(node: Node) -> Self {
        let titles = node
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == "AppdxTableTitle")
            .map(AppdxTableTitle::from_node)
            .collect();
        Self { titles }
    }

    pub fn titles(&self) -> &[AppdxTableTitle] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

/// `ApplData` payload of a law content excerpt response.
///
/// `article`, `paragraph`, and `appdx_table` echo the request selectors;
/// the elements are always present but only the requested ones carry text.
#[derive(Debug, Clone)]
pub struct LawContentsData {
    /// Law ID
    pub law_id: String,
    /// Law number
    pub law_number: String,
    /// Echoed article selector
    pub article: Option<String>,
    /// Echoed paragraph selector
    pub paragraph: Option<String>,
    /// Echoed appendix-table selector
    pub appdx_table: Option<String>,
    /// The `LawContents` subtree, owned
    pub law_contents: XmlFragment,
    /// Appendix-table titles, when the response carries the list element
    pub appdx_table_title_list: Option<AppdxTableTitleList>,
    /// Raw image payload, when present
    pub image_data: Option<String>,
}

impl LawContentsData {
    pub(crate) fn from_node(node: Node) -> Result<Self> {
        let contents = xml::require_child(node, "LawContents")?;
        Ok(Self {
            law_id: child_text(node, "LawId")?,
            law_number: child_text(node, "LawNum")?,
            article: required_child_optional_text(node, "Article")?,
            paragraph: required_child_optional_text(node, "Paragraph")?,
            appdx_table: required_child_optional_text(node, "AppdxTable")?,
            law_contents: XmlFragment::from_node(contents),
            appdx_table_title_list: xml::child(node, "AppdxTableTitleLists")
                .map(AppdxTableTitleList::from_node),
            image_data: xml::optional_child_text(node, "ImageData"),
        })
    }
}

/// Parsed response of the `articles` endpoint.
#[derive(Debug, Clone)]
pub struct LawContentResponse {
    result: ProcessingResult,
    appl_data: LawContentsData,
}

impl LawContentResponse {
    /// Parse a response from raw XML text.
    pub fn from_text(text: &str) -> Result<Self> {
        let doc = Document::parse(text)?;
        let (result_node, appl_data_node) = parse_envelope(&doc)?;
        Ok(Self {
            result: ProcessingResult::from_node(result_node)?,
            appl_data: LawContentsData::from_node(appl_data_node)?,
        })
    }

    /// Parse a response from an XML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_text(&read_document(path.as_ref())?)
    }

    pub fn result(&self) -> &ProcessingResult {
        &self.result
    }

    pub fn appl_data(&self) -> &LawContentsData {
        &self.appl_data
    }

    pub fn law_contents(&self) -> &XmlFragment {
        &self.appl_data.law_contents
    }

    pub fn appdx_table_title_list(&self) -> Option<&AppdxTableTitleList> {
        self.appl_data.appdx_table_title_list.as_ref()
    }
}
