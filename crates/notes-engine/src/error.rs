/// Error types for the note-synthesis engine.
///
/// `EmptyTopic` is the only input the engine rejects. Unknown subjects, unmatched
/// topics and unrecognised styles are absorbed by fallback policy and never surface
/// here. The remaining variants come from loading a replacement catalogue.

#[derive(Debug, thiserror::Error)]
pub enum NotesError {
    #[error("topic must not be empty")]
    EmptyTopic,

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid catalog json: {0}")]
    Json(#[from] serde_json::Error),
}

impl NotesError {
    /// True for errors caused by caller input rather than the engine itself.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyTopic)
    }
}
