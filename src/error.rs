use thiserror::Error;

#[derive(Debug, Error)]
pub enum ElawsError {
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Malformed XML: {0}")]
    Syntax(#[from] roxmltree::Error),

    #[error("Malformed response: {0}")]
    Structure(String),

    #[error("Malformed record: {0}")]
    Field(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ElawsError {
    pub(crate) fn missing_element(tag: &str) -> Self {
        Self::Field(format!("required element <{}> not found", tag))
    }

    pub(crate) fn invalid_integer(tag: &str, text: &str) -> Self {
        Self::Field(format!(
            "element <{}> does not contain an integer: {:?}",
            tag, text
        ))
    }

    /// Check if the error was raised while mapping a response document,
    /// as opposed to building or dispatching the request.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Syntax(_) | Self::Structure(_) | Self::Field(_))
    }
}

pub type Result<T> = std::result::Result<T, ElawsError>;
