use std::path::Path;

use roxmltree::{Document, Node};

use super::xml::{self, child_text, XmlFragment};
use super::{parse_envelope, read_document, ProcessingResult};
use crate::error::Result;

/// `ApplData` payload of a full law text response.
#[derive(Debug, Clone)]
pub struct LawTextData {
    /// Law ID
    pub law_id: String,
    /// Law number
    pub law_number: String,
    /// The `LawFullText` subtree, owned
    pub law_full_text: XmlFragment,
    /// Raw image payload, when the law carries one
    pub image_data: Option<String>,
}

impl LawTextData {
    pub(crate) fn from_node(node: Node) -> Result<Self> {
        let full_text = xml::require_child(node, "LawFullText")?;
        Ok(Self {
            law_id: child_text(node, "LawId")?,
            law_number: child_text(node, "LawNum")?,
            law_full_text: XmlFragment::from_node(full_text),
            image_data: xml::optional_child_text(node, "ImageData"),
        })
    }
}

/// Parsed response of the `lawdata` endpoint.
#[derive(Debug, Clone)]
pub struct LawTextResponse {
    result: ProcessingResult,
    appl_data: LawTextData,
}

impl LawTextResponse {
    /// Parse a response from raw XML text.
    pub fn from_text(text: &str) -> Result<Self> {
        let doc = Document::parse(text)?;
        let (result_node, appl_data_node) = parse_envelope(&doc)?;
        Ok(Self {
            result: ProcessingResult::from_node(result_node)?,
            appl_data: LawTextData::from_node(appl_data_node)?,
        })
    }

    /// Parse a response from an XML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_text(&read_document(path.as_ref())?)
    }

    pub fn result(&self) -> &ProcessingResult {
        &self.result
    }

    pub fn appl_data(&self) -> &LawTextData {
        &self.appl_data
    }

    pub fn law_full_text(&self) -> &XmlFragment {
        &self.appl_data.law_full_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ElawsError;

    const LAW_TEXT_XML: &str = "\
<DataRoot>\
  <Result><Code>0</Code><Message>OK</Message></Result>\
  <ApplData>\
    <LawId>129AC0000000089</LawId>\
    <LawNum>明治二十九年法律第八十九号</LawNum>\
    <LawFullText><Law><LawBody><MainProvision/></LawBody></Law></LawFullText>\
  </ApplData>\
</DataRoot>";

    #[test]
    fn test_from_text() {
        let response = LawTextResponse::from_text(LAW_TEXT_XML).unwrap();
        assert_eq!(response.result().code, 0);
        assert_eq!(response.appl_data().law_id, "129AC0000000089");
        assert_eq!(response.appl_data().law_number, "明治二十九年法律第八十九号");
        assert!(response.appl_data().image_data.is_none());
        assert!(response.law_full_text().as_str().starts_with("<LawFullText>"));
    }

    #[test]
    fn test_full_text_fragment_reparses() {
        let response = LawTextResponse::from_text(LAW_TEXT_XML).unwrap();
        let doc = response.law_full_text().parse().unwrap();
        assert_eq!(doc.root_element().tag_name().name(), "LawFullText");
    }

    #[test]
    fn test_missing_full_text_is_field_error() {
        let text = "\
<DataRoot>\
  <Result><Code>0</Code><Message>OK</Message></Result>\
  <ApplData><LawId>1</LawId><LawNum>No. 1</LawNum></ApplData>\
</DataRoot>";
        let err = LawTextResponse::from_text(text).unwrap_err();
        assert!(matches!(err, ElawsError::Field(_)));
    }

    #[test]
    fn test_image_data_present() {
        let text = "\
<DataRoot>\
  <Result><Code>0</Code><Message>OK</Message></Result>\
  <ApplData>\
    <LawId>1</LawId>\
    <LawNum>No. 1</LawNum>\
    <LawFullText><Law/></LawFullText>\
    <ImageData>iVBORw0KGgo=</ImageData>\
  </ApplData>\
</DataRoot>";
        let response = LawTextResponse::from_text(text).unwrap();
        assert_eq!(response.appl_data().image_data.as_deref(), Some("iVBORw0KGgo="));
    }
}
