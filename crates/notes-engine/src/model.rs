use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::NotesError;

/// A recognised fact field within a topic's bundle.
///
/// `Examples` and `Complexities` are carried by the catalogue but no section
/// builder reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    KeyConcepts,
    Formulas,
    Timeline,
    Achievements,
    Applications,
    Figures,
    Languages,
    Technologies,
    Examples,
    Complexities,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::KeyConcepts => "key_concepts",
            Self::Formulas => "formulas",
            Self::Timeline => "timeline",
            Self::Achievements => "achievements",
            Self::Applications => "applications",
            Self::Figures => "figures",
            Self::Languages => "languages",
            Self::Technologies => "technologies",
            Self::Examples => "examples",
            Self::Complexities => "complexities",
        }
    }
}

/// Named fact sequences for one topic. No field is guaranteed present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactBundle(BTreeMap<Field, Vec<String>>);

impl FactBundle {
    pub const EMPTY: Self = Self(BTreeMap::new());

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: Field, facts: &[&str]) -> Self {
        self.insert(field, facts.iter().map(|f| f.to_string()).collect());
        self
    }

    pub fn insert(&mut self, field: Field, facts: Vec<String>) {
        self.0.insert(field, facts);
    }

    /// Facts stored under `field`, or `None` when the field is absent or empty.
    pub fn get(&self, field: Field) -> Option<&[String]> {
        self.0
            .get(&field)
            .map(Vec::as_slice)
            .filter(|facts| !facts.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &[String])> {
        self.0.iter().map(|(field, facts)| (*field, facts.as_slice()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub key: String,
    pub facts: FactBundle,
}

/// A subject in the catalogue, e.g. "mathematics" / "Mathematics".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub key: String,
    pub name: String,
    pub topics: Vec<Topic>,
}

/// Entry returned by the subject listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SubjectSummary {
    pub id: String,
    #[serde(rename = "name")]
    pub display_name: String,
}

/// The requested document template. Parsing never fails: anything other than
/// the three named styles selects `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteStyle {
    Summary,
    Detailed,
    Quick,
    Default,
}

impl NoteStyle {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "summary" => Self::Summary,
            "detailed" => Self::Detailed,
            "quick" => Self::Quick,
            _ => Self::Default,
        }
    }
}

/// One note-generation request, normalised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRequest {
    pub subject: String,
    pub topic: String,
    /// Raw style text, kept for the document's style label.
    pub style_text: String,
    pub style: NoteStyle,
}

impl NoteRequest {
    /// Subject and topic are trimmed and lowercased. An empty topic is rejected.
    pub fn new(subject: &str, topic: &str, style: &str) -> Result<Self, NotesError> {
        let topic = topic.trim().to_lowercase();
        if topic.is_empty() {
            return Err(NotesError::EmptyTopic);
        }
        Ok(Self {
            subject: subject.trim().to_lowercase(),
            topic,
            style_text: style.to_string(),
            style: NoteStyle::parse(style),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Concepts,
    Points,
    Quick,
    Intro,
    Analysis,
    Examples,
    Practice,
    Memory,
    Tips,
    Overview,
    Objectives,
    General,
}

/// One titled, typed block of content lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Section {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub content: Vec<String>,
}

impl Section {
    pub fn new(title: &str, kind: SectionKind, content: Vec<String>) -> Self {
        Self {
            title: title.to_string(),
            kind,
            content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Metadata {
    pub difficulty: String,
    pub reading_time: String,
    /// Always 5, whatever the number of sections actually produced.
    pub sections: u32,
}

/// The assembled study-note document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Document {
    pub title: String,
    pub subject: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub metadata: Metadata,
    pub sections: Vec<Section>,
}
