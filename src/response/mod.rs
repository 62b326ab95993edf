mod common;
mod law_contents;
mod law_data;
mod law_lists;
mod xml;

pub use common::ProcessingResult;
pub use law_contents::{AppdxTableTitle, AppdxTableTitleList, LawContentResponse, LawContentsData};
pub use law_data::{LawTextData, LawTextResponse};
pub use law_lists::{LawListData, LawListResponse, LawNameInfo, LawNameListInfo};
pub use xml::XmlFragment;

use std::fs;
use std::path::Path;

use roxmltree::{Document, Node};

use crate::error::{ElawsError, Result};

/// Split a parsed response document into its `Result` and `ApplData`
/// sections. Both are required in every well-formed response.
pub(crate) fn parse_envelope<'a, 'input>(
    doc: &'a Document<'input>,
) -> Result<(Node<'a, 'input>, Node<'a, 'input>)> {
    let root = doc.root_element();

    let result = xml::child(root, "Result")
        .ok_or_else(|| ElawsError::Structure("Result is not found".to_string()))?;
    let appl_data = xml::child(root, "ApplData")
        .ok_or_else(|| ElawsError::Structure("ApplData is not found".to_string()))?;

    Ok((result, appl_data))
}

pub(crate) fn read_document(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_missing_result_is_structure_error() {
        let doc = Document::parse("<DataRoot><ApplData/></DataRoot>").unwrap();
        let err = parse_envelope(&doc).unwrap_err();
        assert!(matches!(err, ElawsError::Structure(_)));
    }

    #[test]
    fn test_envelope_missing_appl_data_is_structure_error() {
        let doc =
            Document::parse("<DataRoot><Result><Code>0</Code><Message>OK</Message></Result></DataRoot>")
                .unwrap();
        let err = parse_envelope(&doc).unwrap_err();
        assert!(matches!(err, ElawsError::Structure(_)));
    }
}
