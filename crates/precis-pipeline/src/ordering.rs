/// Join selected sentences in the order they first appear in `reference`.
///
/// Matching is a case-insensitive substring search. Sentences that cannot be
/// found go last, keeping their relative order. A sentence repeated verbatim
/// in the reference is placed at its first occurrence.
pub fn order_by_origin(sentences: &[String], reference: &str) -> String {
    let lowered = reference.to_lowercase();

    let mut keyed: Vec<(Option<usize>, &str)> = sentences
        .iter()
        .map(|s| (lowered.find(&s.to_lowercase()), s.as_str()))
        .collect();
    keyed.sort_by_key(|(offset, _)| offset.unwrap_or(usize::MAX));

    keyed
        .iter()
        .map(|(_, s)| *s)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_restores_source_order() {
        let reference = "Alpha comes first. Beta is second. Gamma is third.";
        let selected = strings(&["Gamma is third.", "Alpha comes first."]);
        assert_eq!(
            order_by_origin(&selected, reference),
            "Alpha comes first. Gamma is third."
        );
    }

    #[test]
    fn test_case_insensitive_match() {
        let reference = "THE QUICK FOX. the lazy dog.";
        let selected = strings(&["The lazy dog.", "The quick fox."]);
        assert_eq!(order_by_origin(&selected, reference), "The quick fox. The lazy dog.");
    }

    #[test]
    fn test_unmatched_sentences_go_last_in_order() {
        let reference = "Known sentence here.";
        let selected = strings(&["Missing two.", "Known sentence here.", "Missing one."]);
        assert_eq!(
            order_by_origin(&selected, reference),
            "Known sentence here. Missing two. Missing one."
        );
    }

    #[test]
    fn test_empty_selection() {
        assert_eq!(order_by_origin(&[], "Anything."), "");
    }
}
