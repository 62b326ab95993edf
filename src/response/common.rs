use roxmltree::Node;
use serde::Serialize;

use super::xml::{child_int, child_text};
use crate::error::Result;

/// Processing status reported at the top of every API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessingResult {
    /// Status code; `0` is success
    pub code: i32,
    /// Human-readable status message
    pub message: String,
}

impl ProcessingResult {
    pub(crate) fn from_node(node: Node) -> Result<Self> {
        Ok(Self {
            code: child_int(node, "Code")?,
            message: child_text(node, "Message")?,
        })
    }

    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}
