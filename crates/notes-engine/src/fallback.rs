use crate::model::{FactBundle, Field};

/// Resolve a field fallback chain.
///
/// Returns the facts of the first field in `chain` that is present and non-empty,
/// otherwise the generated default. Never fails.
pub fn pick(bundle: &FactBundle, chain: &[Field], default: impl FnOnce() -> Vec<String>) -> Vec<String> {
    chain
        .iter()
        .find_map(|field| bundle.get(*field))
        .map(<[String]>::to_vec)
        .unwrap_or_else(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_lines() -> Vec<String> {
        vec!["Fundamental principles of xyz".to_string()]
    }

    #[test]
    fn primary_field_is_returned_verbatim() {
        let bundle = FactBundle::new()
            .with(Field::Formulas, &["F = ma"])
            .with(Field::Timeline, &["1914"]);
        let got = pick(&bundle, &[Field::Formulas, Field::Timeline], default_lines);
        assert_eq!(got, vec!["F = ma".to_string()]);
    }

    #[test]
    fn alternates_are_tried_in_order() {
        let bundle = FactBundle::new()
            .with(Field::Achievements, &["Roads"])
            .with(Field::Timeline, &["1914"]);
        let got = pick(
            &bundle,
            &[Field::Formulas, Field::Timeline, Field::Achievements],
            default_lines,
        );
        assert_eq!(got, vec!["1914".to_string()]);
    }

    #[test]
    fn empty_field_falls_through() {
        let mut bundle = FactBundle::new().with(Field::Figures, &["Churchill"]);
        bundle.insert(Field::Applications, Vec::new());
        let got = pick(&bundle, &[Field::Applications, Field::Figures], default_lines);
        assert_eq!(got, vec!["Churchill".to_string()]);
    }

    #[test]
    fn exhausted_chain_uses_default() {
        let got = pick(&FactBundle::new(), &[Field::KeyConcepts], default_lines);
        assert_eq!(got, default_lines());
    }
}
