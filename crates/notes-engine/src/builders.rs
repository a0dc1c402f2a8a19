/// Section builders, one per note style.
///
/// Each builder turns a fact bundle plus the raw topic and subject text into an
/// ordered list of sections. Data-driven sections resolve their source through a
/// fixed field chain (see `fallback::pick`) and are capped in length.
use crate::fallback::pick;
use crate::model::{FactBundle, Field, NoteStyle, Section, SectionKind};
use crate::random::{RandomSource, QUICK_DIFFICULTY, TIME_TO_LEARN};

const CONCEPTS_CHAIN: &[Field] = &[Field::KeyConcepts];
const POINTS_CHAIN: &[Field] = &[Field::Formulas, Field::Timeline, Field::Achievements];
const REFERENCE_CHAIN: &[Field] = &[Field::Applications, Field::Figures, Field::Languages];
const EXAMPLES_CHAIN: &[Field] = &[Field::Applications, Field::Figures, Field::Technologies];

pub fn build(
    style: NoteStyle,
    topic: &str,
    bundle: &FactBundle,
    subject: &str,
    rng: &dyn RandomSource,
) -> Vec<Section> {
    match style {
        NoteStyle::Summary => summary(topic, bundle, subject),
        NoteStyle::Detailed => detailed(topic, bundle, subject),
        NoteStyle::Quick => quick(topic, bundle, subject, rng),
        NoteStyle::Default => default(topic),
    }
}

pub fn summary(topic: &str, bundle: &FactBundle, subject: &str) -> Vec<Section> {
    let concepts = pick(bundle, CONCEPTS_CHAIN, || {
        lines(&[
            &format!("Fundamental principles of {topic}"),
            "Core theories and definitions",
            "Important terminology",
            "Basic applications",
        ])
    });

    let points = pick(bundle, POINTS_CHAIN, || {
        lines(&[
            &format!("Point 1: Understanding {topic}"),
            &format!("Point 2: Applications of {topic}"),
            &format!("Point 3: Related concepts in {subject}"),
            "Point 4: Common misconceptions",
        ])
    });

    let reference = pick(bundle, REFERENCE_CHAIN, || {
        lines(&[
            "Real-world applications",
            "Study tips and tricks",
            "Memory aids",
            "Practice suggestions",
        ])
    });

    vec![
        Section::new("🎯 Key Concepts", SectionKind::Concepts, bullets(&concepts, 5)),
        Section::new("📋 Important Points", SectionKind::Points, bullets(&points, 4)),
        Section::new("⚡ Quick Reference", SectionKind::Quick, bullets(&reference, 4)),
    ]
}

pub fn detailed(topic: &str, bundle: &FactBundle, subject: &str) -> Vec<Section> {
    let intro = lines(&[
        &format!("**Overview of {topic}**"),
        &format!("**Subject Area**: {subject}"),
        "**Learning Objectives**:",
        "  • Understand fundamental concepts",
        "  • Analyze complex applications",
        "  • Master key techniques",
        "  • Apply knowledge practically",
    ]);

    let concepts = pick(bundle, CONCEPTS_CHAIN, || {
        lines(&[
            "Concept 1: Basic definition and principles",
            "Concept 2: Theoretical framework",
            "Concept 3: Practical implementation",
            "Concept 4: Advanced applications",
            "Concept 5: Current developments",
        ])
    });
    let concepts = concepts
        .iter()
        .take(5)
        .enumerate()
        .map(|(i, concept)| format!("**{}. {concept}**", i + 1))
        .collect();

    let explanation = pick(bundle, POINTS_CHAIN, || {
        lines(&[
            &format!("**Section A**: Theoretical foundations of {topic}"),
            "**Section B**: Practical applications",
            "**Section C**: Case studies and examples",
            "**Section D**: Common challenges and solutions",
        ])
    });

    let examples = pick(bundle, EXAMPLES_CHAIN, || {
        lines(&[
            &format!("**Example 1**: Real-world application of {topic}"),
            "**Example 2**: Problem-solving scenario",
            "**Example 3**: Advanced case study",
            "**Practice Exercise**: Apply your knowledge",
        ])
    });

    vec![
        Section::new("📚 Introduction", SectionKind::Intro, intro),
        Section::new("🔍 Core Concepts", SectionKind::Analysis, concepts),
        Section::new("📝 Detailed Explanation", SectionKind::Examples, capped(explanation, 6)),
        Section::new("💡 Examples & Applications", SectionKind::Practice, capped(examples, 4)),
    ]
}

pub fn quick(topic: &str, bundle: &FactBundle, subject: &str, rng: &dyn RandomSource) -> Vec<Section> {
    let facts = lines(&[
        &format!("**Topic**: {topic}"),
        &format!("**Subject**: {subject}"),
        &format!("**Difficulty**: {}", rng.pick(&QUICK_DIFFICULTY)),
        &format!("**Time to Learn**: {}", rng.pick(&TIME_TO_LEARN)),
        &format!("**Prerequisites**: Basic understanding of {subject}"),
    ]);

    let points = pick(bundle, CONCEPTS_CHAIN, || {
        lines(&[
            &format!("Point 1: Essential concept of {topic}"),
            "Point 2: Key principle to remember",
            "Point 3: Important relationship",
            "Point 4: Critical application",
        ])
    });

    let memory = lines(&[
        "• **Mnemonic**: Create a memorable acronym",
        "• **Visual**: Draw a quick diagram",
        "• **Connection**: Link to familiar concepts",
        "• **Story**: Create a narrative",
        "• **Rhythm**: Make it musical",
    ]);

    let tips = lines(&[
        "• Review these notes daily",
        "• Practice with flashcards",
        "• Teach someone else",
        "• Take regular breaks",
        "• Test yourself frequently",
    ]);

    vec![
        Section::new("⚡ Quick Facts", SectionKind::Quick, facts),
        Section::new("🔑 Key Points", SectionKind::Points, bullets(&points, 4)),
        Section::new("🧠 Memory Aids", SectionKind::Memory, memory),
        Section::new("💡 Quick Tips", SectionKind::Tips, tips),
    ]
}

/// Template-only notes driven by the topic text; no catalogue data is used.
pub fn default(topic: &str) -> Vec<Section> {
    let overview = lines(&[
        &format!("**Topic**: {topic}"),
        "**Category**: General Study",
        "**Purpose**: Comprehensive learning material",
        "**Target Audience**: Students and self-learners",
    ]);

    let objectives = lines(&[
        &format!("• Understand the basic concepts of {topic}"),
        "• Identify key components and relationships",
        "• Apply knowledge to practical situations",
        "• Analyze complex scenarios",
        "• Evaluate different perspectives",
    ]);

    let guide = lines(&[
        &format!("**Section 1**: Introduction to {topic}"),
        "  • Historical background",
        "  • Current relevance",
        "  • Future potential",
        "",
        &format!("**Section 2**: Core elements of {topic}"),
        "  • Fundamental principles",
        "  • Key terminology",
        "  • Important relationships",
        "",
        &format!("**Section 3**: Applications of {topic}"),
        "  • Real-world examples",
        "  • Case studies",
        "  • Practical exercises",
    ]);

    let questions = lines(&[
        &format!("1. What are the main concepts of {topic}?"),
        &format!("2. How does {topic} apply in real life?"),
        "3. What are the key challenges?",
        "4. How would you explain this to someone else?",
        "5. Create a mind map of the topic",
    ]);

    vec![
        Section::new("📖 Overview", SectionKind::Overview, overview),
        Section::new("🎯 Learning Objectives", SectionKind::Objectives, objectives),
        Section::new("📝 Study Guide", SectionKind::General, guide),
        Section::new("✅ Review Questions", SectionKind::Practice, questions),
    ]
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn bullets(items: &[String], cap: usize) -> Vec<String> {
    items.iter().take(cap).map(|item| format!("• {item}")).collect()
}

fn capped(mut items: Vec<String>, cap: usize) -> Vec<String> {
    items.truncate(cap);
    items
}
