//! Card Filtering
//!
//! Pure search logic over the directory cards.

use crate::models::Card;

/// Case-insensitive substring match on title or description.
/// An empty term matches everything.
pub fn card_matches(card: &Card, term: &str) -> bool {
    let term = term.to_lowercase();
    term.is_empty()
        || card.title.to_lowercase().contains(&term)
        || card.description.to_lowercase().contains(&term)
}

/// Visibility flag for each card, in order
pub fn visible_cards(cards: &[Card], term: &str) -> Vec<bool> {
    cards.iter().map(|card| card_matches(card, term)).collect()
}

/// A section is shown iff at least one of its cards is visible.
///
/// `sections` holds card indices into `visible`; out-of-range indices count
/// as hidden.
pub fn visible_sections(sections: &[Vec<usize>], visible: &[bool]) -> Vec<bool> {
    sections
        .iter()
        .map(|cards| cards.iter().any(|&i| visible.get(i).copied().unwrap_or(false)))
        .collect()
}

/// Ctrl+K or Cmd+K
pub fn is_search_shortcut(key: &str, ctrl: bool, meta: bool) -> bool {
    (ctrl || meta) && key == "k"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Card> {
        vec![
            Card::new("Mortgage Calculator", "Estimate monthly home loan payments"),
            Card::new("BMI Calculator", "Body mass index from height and weight"),
            Card::new("Loan Payoff", "See when your MORTGAGE or car loan ends"),
            Card::new("Tip Splitter", "Divide a restaurant bill"),
        ]
    }

    #[test]
    fn test_empty_term_shows_everything() {
        assert_eq!(visible_cards(&catalog(), ""), vec![true; 4]);
    }

    #[test]
    fn test_match_is_case_insensitive_on_title_and_description() {
        let visible = visible_cards(&catalog(), "MortGage");
        assert_eq!(visible, vec![true, false, true, false]);
    }

    #[test]
    fn test_visible_subset_equals_definition() {
        let cards = catalog();
        for term in ["", "loan", "calc", "xyz", "bill", "a"] {
            let visible = visible_cards(&cards, term);
            let expected: Vec<bool> = cards
                .iter()
                .map(|c| {
                    term.is_empty()
                        || c.title.to_lowercase().contains(&term.to_lowercase())
                        || c.description.to_lowercase().contains(&term.to_lowercase())
                })
                .collect();
            assert_eq!(visible, expected, "term {:?}", term);
        }
    }

    #[test]
    fn test_sections_hidden_when_empty() {
        let cards = catalog();
        let sections = vec![vec![0, 2], vec![1], vec![3], vec![]];

        let visible = visible_cards(&cards, "mortgage");
        assert_eq!(visible_sections(&sections, &visible), vec![true, false, false, false]);

        let visible = visible_cards(&cards, "");
        assert_eq!(visible_sections(&sections, &visible), vec![true, true, true, false]);
    }

    #[test]
    fn test_section_visibility_tracks_visible_count() {
        let cards = catalog();
        let sections = vec![vec![0, 1], vec![2, 3]];
        for term in ["", "bmi", "tip", "nothing-here"] {
            let visible = visible_cards(&cards, term);
            let shown = visible_sections(&sections, &visible);
            for (section, is_shown) in sections.iter().zip(shown) {
                let count = section.iter().filter(|&&i| visible[i]).count();
                assert_eq!(is_shown, count > 0);
            }
        }
    }

    #[test]
    fn test_search_shortcut() {
        assert!(is_search_shortcut("k", true, false));
        assert!(is_search_shortcut("k", false, true));
        assert!(!is_search_shortcut("k", false, false));
        assert!(!is_search_shortcut("j", true, false));
    }
}
