use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{Document, SubjectSummary};

/// Style used when a request does not name one.
pub const DEFAULT_NOTE_TYPE: &str = "summary";

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GenerateNotesParams {
    /// Topic to write notes about, e.g. "algebra" or "photosynthesis".
    #[serde(default)]
    pub topic: String,
    /// Subject key such as "mathematics" or "history". Unknown subjects still produce notes.
    #[serde(default)]
    pub subject: Option<String>,
    /// One of "summary" (default), "detailed" or "quick". Anything else yields general notes.
    #[serde(default)]
    pub note_type: Option<String>,
}

impl GenerateNotesParams {
    pub fn subject(&self) -> &str {
        self.subject.as_deref().unwrap_or_default()
    }

    pub fn note_type(&self) -> &str {
        self.note_type.as_deref().unwrap_or(DEFAULT_NOTE_TYPE)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListTopicsParams {
    /// Subject key as returned by list_subjects.
    pub subject: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GenerateNotesResponse {
    pub success: bool,
    pub notes: Document,
    /// Normalised (trimmed, lowercased) topic.
    pub topic: String,
    /// Normalised subject key.
    pub subject: String,
    pub generated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SubjectListResponse {
    pub subjects: Vec<SubjectSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TopicListResponse {
    pub subject: String,
    pub topics: Vec<String>,
}
