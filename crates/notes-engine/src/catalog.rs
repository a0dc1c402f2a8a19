/// The static knowledge base: subjects, their topics, and per-topic fact bundles.
///
/// Built once at startup (from the curated catalogue or a JSON file) and shared
/// read-only afterwards. Subject and topic order is significant: topic resolution
/// takes the first match in catalogue order.
use std::collections::HashSet;
use std::path::Path;

use regex::Regex;

use crate::error::NotesError;
use crate::model::{FactBundle, Field, Subject, SubjectSummary, Topic};

pub const GENERAL_KEY: &str = "general";
pub const GENERAL_NAME: &str = "General Studies";

#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeBase {
    subjects: Vec<Subject>,
}

impl KnowledgeBase {
    pub fn new(subjects: Vec<Subject>) -> Result<Self, NotesError> {
        let kb = Self { subjects };
        kb.validate()?;
        Ok(kb)
    }

    /// Parse a catalogue from a JSON array of subjects.
    pub fn from_json_str(json: &str) -> Result<Self, NotesError> {
        let subjects: Vec<Subject> = serde_json::from_str(json)?;
        Self::new(subjects)
    }

    pub fn from_path(path: &Path) -> Result<Self, NotesError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), NotesError> {
        let key_re = Regex::new(r"^[a-z][a-z0-9_]*$").expect("valid regex");
        let mut subject_keys = HashSet::new();

        for subject in &self.subjects {
            if !key_re.is_match(&subject.key) {
                return Err(NotesError::Catalog(format!(
                    "invalid subject key: '{}'",
                    subject.key
                )));
            }
            if subject.key == GENERAL_KEY {
                return Err(NotesError::Catalog(format!(
                    "subject key '{GENERAL_KEY}' is reserved"
                )));
            }
            if !subject_keys.insert(subject.key.as_str()) {
                return Err(NotesError::Catalog(format!(
                    "duplicate subject key: '{}'",
                    subject.key
                )));
            }

            let mut topic_keys = HashSet::new();
            for topic in &subject.topics {
                if !key_re.is_match(&topic.key) {
                    return Err(NotesError::Catalog(format!(
                        "invalid topic key: '{}.{}'",
                        subject.key, topic.key
                    )));
                }
                if !topic_keys.insert(topic.key.as_str()) {
                    return Err(NotesError::Catalog(format!(
                        "duplicate topic key: '{}.{}'",
                        subject.key, topic.key
                    )));
                }
                for (field, facts) in topic.facts.iter() {
                    if facts.iter().any(|f| f.trim().is_empty()) {
                        return Err(NotesError::Catalog(format!(
                            "empty fact in {}.{}.{}",
                            subject.key,
                            topic.key,
                            field.as_str()
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    pub fn subject(&self, key: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.key == key)
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Every subject in catalogue order, followed by the synthetic general entry.
    pub fn list_subjects(&self) -> Vec<SubjectSummary> {
        self.subjects
            .iter()
            .map(|s| SubjectSummary {
                id: s.key.clone(),
                display_name: s.name.clone(),
            })
            .chain(std::iter::once(SubjectSummary {
                id: GENERAL_KEY.to_string(),
                display_name: GENERAL_NAME.to_string(),
            }))
            .collect()
    }

    /// Topic keys of a known subject, or `["general"]` for anything else.
    pub fn list_topics(&self, subject_key: &str) -> Vec<String> {
        match self.subject(subject_key) {
            Some(subject) => subject.topics.iter().map(|t| t.key.clone()).collect(),
            None => vec![GENERAL_KEY.to_string()],
        }
    }

    /// The curated catalogue shipped with the service.
    pub fn builtin() -> Self {
        let subjects = vec![
            subject(
                "mathematics",
                "Mathematics",
                vec![
                    topic(
                        "algebra",
                        FactBundle::new()
                            .with(
                                Field::KeyConcepts,
                                &["Variables", "Equations", "Functions", "Polynomials", "Inequalities"],
                            )
                            .with(
                                Field::Formulas,
                                &[
                                    "Quadratic formula: x = [-b ± √(b² - 4ac)]/2a",
                                    "Slope: m = (y₂ - y₁)/(x₂ - x₁)",
                                    "Distance formula: d = √[(x₂ - x₁)² + (y₂ - y₁)²]",
                                ],
                            )
                            .with(
                                Field::Applications,
                                &["Physics calculations", "Engineering design", "Financial modeling"],
                            ),
                    ),
                    topic(
                        "calculus",
                        FactBundle::new()
                            .with(
                                Field::KeyConcepts,
                                &["Limits", "Derivatives", "Integrals", "Series", "Multivariable calculus"],
                            )
                            .with(
                                Field::Formulas,
                                &[
                                    "Power rule: d/dx(xⁿ) = nxⁿ⁻¹",
                                    "Chain rule: dy/dx = (dy/du)(du/dx)",
                                    "Integration by parts: ∫udv = uv - ∫vdu",
                                ],
                            )
                            .with(
                                Field::Applications,
                                &["Physics motion", "Economics optimization", "Engineering problems"],
                            ),
                    ),
                    topic(
                        "geometry",
                        FactBundle::new()
                            .with(
                                Field::KeyConcepts,
                                &["Points", "Lines", "Angles", "Shapes", "Transformations"],
                            )
                            .with(
                                Field::Formulas,
                                &[
                                    "Area of circle: A = πr²",
                                    "Pythagorean theorem: a² + b² = c²",
                                    "Volume of sphere: V = (4/3)πr³",
                                ],
                            )
                            .with(
                                Field::Applications,
                                &["Architecture", "Computer graphics", "Navigation"],
                            ),
                    ),
                ],
            ),
            subject(
                "science",
                "Science",
                vec![
                    topic(
                        "physics",
                        FactBundle::new()
                            .with(
                                Field::KeyConcepts,
                                &["Motion", "Forces", "Energy", "Waves", "Electricity"],
                            )
                            .with(
                                Field::Formulas,
                                &[
                                    "F = ma (Newton's second law)",
                                    "E = mc² (Mass-energy equivalence)",
                                    "v = fλ (Wave equation)",
                                ],
                            )
                            .with(
                                Field::Applications,
                                &["Mechanical engineering", "Electronics", "Astrophysics"],
                            ),
                    ),
                    topic(
                        "chemistry",
                        FactBundle::new()
                            .with(
                                Field::KeyConcepts,
                                &["Atoms", "Molecules", "Reactions", "Bonds", "Periodic table"],
                            )
                            .with(
                                Field::Formulas,
                                &["PV = nRT (Ideal gas law)", "pH = -log[H⁺]", "ΔG = ΔH - TΔS"],
                            )
                            .with(
                                Field::Applications,
                                &["Medicine", "Materials science", "Environmental science"],
                            ),
                    ),
                    topic(
                        "biology",
                        FactBundle::new()
                            .with(
                                Field::KeyConcepts,
                                &["Cells", "DNA", "Evolution", "Ecosystems", "Photosynthesis"],
                            )
                            .with(
                                Field::Formulas,
                                &["Hardy-Weinberg: p² + 2pq + q² = 1", "Population growth: dN/dt = rN"],
                            )
                            .with(
                                Field::Applications,
                                &["Medicine", "Agriculture", "Conservation"],
                            ),
                    ),
                ],
            ),
            subject(
                "history",
                "History",
                vec![
                    topic(
                        "world_wars",
                        FactBundle::new()
                            .with(
                                Field::KeyConcepts,
                                &["Causes", "Major battles", "Key figures", "Treaties", "Aftermath"],
                            )
                            .with(
                                Field::Timeline,
                                &[
                                    "1914: WWI begins",
                                    "1918: WWI ends",
                                    "1939: WWII begins",
                                    "1945: WWII ends",
                                ],
                            )
                            .with(
                                Field::Figures,
                                &[
                                    "Winston Churchill",
                                    "Adolf Hitler",
                                    "Franklin Roosevelt",
                                    "Joseph Stalin",
                                ],
                            ),
                    ),
                    topic(
                        "ancient_civilizations",
                        FactBundle::new()
                            .with(
                                Field::KeyConcepts,
                                &["Egyptian", "Greek", "Roman", "Mesopotamian", "Chinese"],
                            )
                            .with(
                                Field::Achievements,
                                &["Pyramids", "Democracy", "Roads", "Writing", "Philosophy"],
                            ),
                    ),
                ],
            ),
            subject(
                "computer_science",
                "Computer Science",
                vec![
                    topic(
                        "programming",
                        FactBundle::new()
                            .with(
                                Field::KeyConcepts,
                                &["Variables", "Loops", "Functions", "Classes", "Data structures"],
                            )
                            .with(
                                Field::Languages,
                                &["Python", "Java", "JavaScript", "C++", "Ruby"],
                            )
                            .with(
                                Field::Examples,
                                &["def hello():\n    print(\"Hello World\")"],
                            ),
                    ),
                    topic(
                        "algorithms",
                        FactBundle::new()
                            .with(
                                Field::KeyConcepts,
                                &["Sorting", "Searching", "Recursion", "Dynamic programming", "Graphs"],
                            )
                            .with(
                                Field::Complexities,
                                &[
                                    "O(1) - Constant",
                                    "O(log n) - Logarithmic",
                                    "O(n) - Linear",
                                    "O(n²) - Quadratic",
                                ],
                            ),
                    ),
                    topic(
                        "web_development",
                        FactBundle::new()
                            .with(
                                Field::KeyConcepts,
                                &["HTML", "CSS", "JavaScript", "Frameworks", "Databases"],
                            )
                            .with(
                                Field::Technologies,
                                &["React", "Node.js", "Django", "Flask", "MongoDB"],
                            ),
                    ),
                ],
            ),
        ];

        Self { subjects }
    }
}

fn subject(key: &str, name: &str, topics: Vec<Topic>) -> Subject {
    Subject {
        key: key.to_string(),
        name: name.to_string(),
        topics,
    }
}

fn topic(key: &str, facts: FactBundle) -> Topic {
    Topic {
        key: key.to_string(),
        facts,
    }
}
