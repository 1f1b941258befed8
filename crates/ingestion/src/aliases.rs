/// Ordered mapping from lowercase title fragments to nominee ids.
///
/// Market questions are free text ("Will Sinners win Best Picture?"), so
/// matching is substring containment against each alias in priority order;
/// the first alias that appears in the question wins. A nominee may carry
/// several aliases when the market phrases its title differently.
#[derive(Debug, Clone)]
pub struct NomineeAliases {
    entries: Vec<(String, i32)>,
}

impl NomineeAliases {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(alias, nominee_id)| (alias.into().to_lowercase(), nominee_id))
                .collect(),
        }
    }

    /// The 98th Academy Awards Best Picture field.
    pub fn best_picture_2026() -> Self {
        Self::new([
            ("one battle after another", 1),
            ("hamnet", 2),
            ("sinners", 3),
            ("marty supreme", 4),
            ("sentimental value", 5),
            ("the secret agent", 6),
            ("frankenstein", 7),
            ("bugonia", 8),
            ("f1", 9),
            ("f1: the movie", 9),
            ("train dreams", 10),
        ])
    }

    /// First alias contained in the question wins, case-insensitively.
    pub fn match_question(&self, question: &str) -> Option<(&str, i32)> {
        let question = question.to_lowercase();
        self.entries
            .iter()
            .find(|(alias, _)| question.contains(alias.as_str()))
            .map(|(alias, nominee_id)| (alias.as_str(), *nominee_id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NomineeAliases {
    fn default() -> Self {
        Self::best_picture_2026()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_is_case_insensitive() {
        let aliases = NomineeAliases::best_picture_2026();

        let hit = aliases.match_question("Will SINNERS win Best Picture?");
        assert_eq!(hit, Some(("sinners", 3)));
    }

    #[test]
    fn first_alias_in_priority_order_wins() {
        let aliases = NomineeAliases::new([("hamnet", 2), ("ham", 99)]);

        assert_eq!(
            aliases.match_question("Will Hamnet win?"),
            Some(("hamnet", 2))
        );
    }

    #[test]
    fn multiple_aliases_map_to_one_nominee() {
        let aliases = NomineeAliases::best_picture_2026();

        let short = aliases.match_question("Will F1 win Best Picture?");
        let long = aliases.match_question("Will 'F1: The Movie' win Best Picture?");
        assert_eq!(short.map(|(_, id)| id), Some(9));
        assert_eq!(long.map(|(_, id)| id), Some(9));
    }

    #[test]
    fn unrelated_questions_match_nothing() {
        let aliases = NomineeAliases::best_picture_2026();

        assert_eq!(aliases.match_question("Will it rain tomorrow?"), None);
    }

    #[test]
    fn aliases_are_normalized_to_lowercase() {
        let aliases = NomineeAliases::new([("Train Dreams", 10)]);

        assert_eq!(
            aliases.match_question("will train dreams win best picture?"),
            Some(("train dreams", 10))
        );
    }
}
