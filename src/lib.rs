//! Client library for the Japanese e-Gov eLaws API.
//!
//! Retrieves law/ordinance lists, full law text, and article/paragraph/
//! appendix-table excerpts as XML and maps them into typed, read-only
//! response objects with indexed lookups.

pub mod api;
pub mod error;
pub mod response;

pub use api::{ClientConfig, ElawsClient, HttpTransport, LawContentRequest, LawIdentifier};
pub use error::{ElawsError, Result};
pub use response::{
    AppdxTableTitle, AppdxTableTitleList, LawContentResponse, LawContentsData, LawListData,
    LawListResponse, LawNameInfo, LawNameListInfo, LawTextData, LawTextResponse, ProcessingResult,
    XmlFragment,
};
