//! Document attachment reference.

use serde::{Deserialize, Serialize};

/// A file already stored on the platform. Only the reference travels; bytes are never downloaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Id usable to re-send the file.
    pub file_id: String,
    /// Stable id of the file across bots; not usable for sending.
    pub file_unique_id: String,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<u64>,
}
