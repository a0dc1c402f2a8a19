use tracing::debug;

use crate::catalog::KnowledgeBase;
use crate::model::FactBundle;

/// Find the fact bundle for `topic_text` within `subject_key`.
///
/// Topic keys are scanned in catalogue order and the first key that contains, or
/// is contained in, the topic text wins. An unknown subject or an unmatched topic
/// yields an empty bundle.
pub fn resolve<'a>(kb: &'a KnowledgeBase, subject_key: &str, topic_text: &str) -> &'a FactBundle {
    static EMPTY: FactBundle = FactBundle::EMPTY;

    let Some(subject) = kb.subject(subject_key) else {
        debug!(subject = subject_key, "unknown subject, using empty bundle");
        return &EMPTY;
    };

    match subject
        .topics
        .iter()
        .find(|t| topic_text.contains(t.key.as_str()) || t.key.contains(topic_text))
    {
        Some(topic) => {
            debug!(subject = subject_key, topic = %topic.key, "topic resolved");
            &topic.facts
        }
        None => {
            debug!(subject = subject_key, topic = topic_text, "no matching topic");
            &EMPTY
        }
    }
}
