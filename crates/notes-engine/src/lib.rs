pub mod api;
pub mod assembler;
pub mod builders;
pub mod catalog;
pub mod error;
pub mod fallback;
pub mod model;
pub mod random;
pub mod resolver;

pub use assembler::NoteSynthesizer;
pub use catalog::KnowledgeBase;
pub use error::NotesError;
pub use model::{Document, NoteRequest, NoteStyle, Section, SectionKind, SubjectSummary};
