use std::sync::Arc;

use tracing::debug;

use crate::builders;
use crate::catalog::KnowledgeBase;
use crate::model::{Document, Metadata, NoteRequest, SubjectSummary};
use crate::random::{RandomSource, ThreadRandom, DIFFICULTY_LEVELS, READING_MINUTES};
use crate::resolver::resolve;

const TITLE_SUFFIX: &str = " - Complete Study Guide";
/// Reported in metadata regardless of how many sections were built.
const METADATA_SECTION_COUNT: u32 = 5;

/// Turns note requests into documents against an injected catalogue.
#[derive(Clone)]
pub struct NoteSynthesizer {
    kb: Arc<KnowledgeBase>,
    rng: Arc<dyn RandomSource>,
}

impl NoteSynthesizer {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self::with_random(kb, Arc::new(ThreadRandom))
    }

    pub fn with_random(kb: Arc<KnowledgeBase>, rng: Arc<dyn RandomSource>) -> Self {
        Self { kb, rng }
    }

    pub fn synthesize(&self, request: &NoteRequest) -> Document {
        let subject_name = match self.kb.subject(&request.subject) {
            Some(subject) => subject.name.clone(),
            None if request.subject.is_empty() => "General".to_string(),
            None => title_case(&request.subject),
        };

        let bundle = resolve(&self.kb, &request.subject, &request.topic);
        let sections = builders::build(
            request.style,
            &request.topic,
            bundle,
            &request.subject,
            self.rng.as_ref(),
        );
        debug!(
            subject = %request.subject,
            topic = %request.topic,
            style = ?request.style,
            matched = !bundle.is_empty(),
            sections = sections.len(),
            "notes synthesized"
        );

        Document {
            title: format!("{}{TITLE_SUFFIX}", title_case(&request.topic)),
            subject: subject_name,
            kind: title_case(&request.style_text),
            metadata: Metadata {
                difficulty: self.rng.pick(&DIFFICULTY_LEVELS).to_string(),
                reading_time: format!(
                    "{} minutes",
                    self.rng.minutes(READING_MINUTES.0, READING_MINUTES.1)
                ),
                sections: METADATA_SECTION_COUNT,
            },
            sections,
        }
    }

    pub fn list_subjects(&self) -> Vec<SubjectSummary> {
        self.kb.list_subjects()
    }

    pub fn list_topics(&self, subject_key: &str) -> Vec<String> {
        self.kb.list_topics(subject_key)
    }
}

/// Upper-case every cased letter that follows an uncased character, lower-case
/// the rest. Uncased characters (digits, punctuation, CJK) pass through.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;
    for ch in s.chars() {
        if ch.is_lowercase() || ch.is_uppercase() {
            if prev_cased {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_cased = true;
        } else {
            out.push(ch);
            prev_cased = false;
        }
    }
    out
}
