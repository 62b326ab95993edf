pub mod client;
pub mod elaws;
pub mod request;

pub use client::{ClientConfig, HttpTransport, ReqwestTransport, DEFAULT_BASE_URL};
pub use elaws::ElawsClient;
pub use request::{LawContentRequest, LawIdentifier};
