#[cfg(test)]
mod tests {
    use crate::problems::problem::Problem;
    use crate::problems::sort::{compare_ids, sort_indices, sort_problems, SortDirection, SortKey, SortState};
    use std::cmp::Ordering;

    fn problem(id: &str, difficulty: &str, rating: f64) -> Problem {
        Problem {
            id: id.to_string(),
            title: format!("Problem {}", id),
            url: None,
            slug: None,
            difficulty: difficulty.to_string(),
            rating,
            topics: Vec::new(),
            companies: Vec::new(),
        }
    }

    fn ids(problems: &[Problem]) -> Vec<&str> {
        problems.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_default_sort_is_rating_descending() {
        let sort = SortState::default();
        assert_eq!(sort.key, SortKey::Rating);
        assert_eq!(sort.direction, SortDirection::Desc);
    }

    #[test]
    fn test_rating_desc_and_asc_are_reverses() {
        let original = vec![
            problem("1", "easy", 1500.0),
            problem("2", "hard", 2300.0),
            problem("3", "medium", 1800.0),
            problem("4", "easy", 1100.0),
        ];

        let mut desc = original.clone();
        sort_problems(&mut desc, &SortState::new(SortKey::Rating, SortDirection::Desc));
        let mut asc = original;
        sort_problems(&mut asc, &SortState::new(SortKey::Rating, SortDirection::Asc));

        assert_eq!(ids(&desc), vec!["2", "3", "1", "4"]);
        let mut reversed = ids(&asc);
        reversed.reverse();
        assert_eq!(ids(&desc), reversed);
    }

    #[test]
    fn test_ties_keep_incoming_order() {
        let mut problems = vec![
            problem("a", "easy", 1500.0),
            problem("b", "easy", 1500.0),
            problem("c", "easy", 1200.0),
            problem("d", "easy", 1500.0),
        ];
        sort_problems(&mut problems, &SortState::new(SortKey::Rating, SortDirection::Desc));
        assert_eq!(ids(&problems), vec!["a", "b", "d", "c"]);
    }

    #[test]
    fn test_difficulty_rank_order() {
        let mut problems = vec![
            problem("1", "hard", 0.0),
            problem("2", "weird", 0.0),
            problem("3", "easy", 0.0),
            problem("4", "medium", 0.0),
        ];
        sort_problems(&mut problems, &SortState::new(SortKey::Difficulty, SortDirection::Asc));
        assert_eq!(ids(&problems), vec!["2", "3", "4", "1"]);
    }

    #[test]
    fn test_ids_compare_numerically() {
        let mut problems = vec![problem("10", "easy", 0.0), problem("9", "easy", 0.0), problem("100", "easy", 0.0)];
        sort_problems(&mut problems, &SortState::new(SortKey::Id, SortDirection::Asc));
        assert_eq!(ids(&problems), vec!["9", "10", "100"]);
    }

    #[test]
    fn test_non_numeric_ids_sort_after_numeric_ones() {
        assert_eq!(compare_ids("5", "N/A"), Ordering::Less);
        assert_eq!(compare_ids("N/A", "5"), Ordering::Greater);
        assert_eq!(compare_ids("abc", "abd"), Ordering::Less);
        assert_eq!(compare_ids("007", "7"), Ordering::Equal);
    }

    #[test]
    fn test_unknown_key_keeps_order() {
        assert_eq!(SortKey::parse("title"), SortKey::Unsorted);
        assert_eq!(SortKey::parse(" Rating "), SortKey::Rating);

        let catalog = vec![problem("3", "hard", 1.0), problem("1", "easy", 3.0), problem("2", "easy", 2.0)];
        let mut indices = vec![0, 1, 2];
        sort_indices(&catalog, &mut indices, &SortState::new(SortKey::Unsorted, SortDirection::Desc));
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_sort_indices_matches_sort_problems() {
        let catalog = vec![problem("1", "easy", 1200.0), problem("2", "hard", 2500.0), problem("3", "medium", 1700.0)];
        let sort = SortState::new(SortKey::Rating, SortDirection::Desc);
        let mut indices = vec![0, 1, 2];
        sort_indices(&catalog, &mut indices, &sort);
        assert_eq!(indices, vec![1, 2, 0]);
    }

    #[test]
    fn test_toggled_flips_active_ascending_key() {
        let asc = SortState::new(SortKey::Id, SortDirection::Asc);
        assert_eq!(asc.toggled(SortKey::Id), SortState::new(SortKey::Id, SortDirection::Desc));
        assert_eq!(
            asc.toggled(SortKey::Id).toggled(SortKey::Id),
            SortState::new(SortKey::Id, SortDirection::Asc)
        );
        assert_eq!(asc.toggled(SortKey::Rating), SortState::new(SortKey::Rating, SortDirection::Asc));
    }

    #[test]
    fn test_sort_state_deserializes_unknown_key() {
        let sort: SortState = serde_json::from_str(r#"{"key":"popularity","direction":"asc"}"#).unwrap();
        assert_eq!(sort.key, SortKey::Unsorted);
        assert_eq!(sort.direction, SortDirection::Asc);
    }
}
