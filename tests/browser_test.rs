#[cfg(test)]
mod tests {
    use crate::analytics::Progress;
    use crate::completion::CompletionSet;
    use crate::config::AppConfig;
    use crate::error::{ErrorKind, GrindError};
    use crate::metrics::Metrics;
    use crate::problems::filter::FilterCriterion;
    use crate::problems::sort::{SortDirection, SortKey, SortState};
    use crate::state::browser::BrowserState;
    use crate::state::status::CatalogStatus;
    use serde_json::{json, Value};

    fn two_problem_payload() -> Value {
        json!([
            { "id": "1", "difficulty": "easy", "rating": 1200, "topics": ["Array"], "companies": ["Google"] },
            { "id": "2", "difficulty": "hard", "rating": 2500, "topics": ["DP"], "companies": [] }
        ])
    }

    fn numbered_payload(count: usize) -> Value {
        Value::Array(
            (1..=count)
                .map(|i| json!({ "id": i.to_string(), "title": format!("P{}", i), "difficulty": "medium", "rating": i * 10 }))
                .collect(),
        )
    }

    fn browser(page_size: usize, sort: SortState) -> BrowserState {
        BrowserState::new(page_size, sort, 8, Metrics::new())
    }

    fn page_ids(state: &mut BrowserState) -> Vec<String> {
        state.filtered_page().into_iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_end_to_end_example() {
        let mut state = browser(20, SortState::default());
        assert_eq!(state.apply_payload(Ok(two_problem_payload())).unwrap(), 2);
        assert!(state.status().is_ready());

        state.set_filter(FilterCriterion::Difficulty, "easy");
        let ids: Vec<String> = state.filtered().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["1"]);

        state.reset_filters();
        state.set_sort(SortKey::Rating, Some(SortDirection::Desc));
        let ids: Vec<String> = state.filtered().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["2", "1"]);

        state.set_sort(SortKey::Unsorted, Some(SortDirection::Asc));
        state.set_page_size(1);
        assert_eq!(state.set_page(2), 2);
        assert_eq!(page_ids(&mut state), vec!["2"]);

        let mut completed = CompletionSet::new();
        completed.toggle("1");
        let view = state.view(&completed);
        assert_eq!(view.stats.overall, Progress { completed: 1, total: 2 });
        assert_eq!(view.stats.per_difficulty.easy, Progress { completed: 1, total: 1 });
        assert_eq!(view.rows.len(), 1);
        assert!(!view.rows[0].completed);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = browser(10, SortState::new(SortKey::Id, SortDirection::Asc));
        state.apply_payload(Ok(numbered_payload(35))).unwrap();
        assert_eq!(state.set_page(3), 3);

        state.set_filter(FilterCriterion::Query, "P");
        assert_eq!(state.page(), 1);
        assert_eq!(page_ids(&mut state).first().map(String::as_str), Some("1"));
    }

    #[test]
    fn test_sort_change_resets_page() {
        let mut state = browser(10, SortState::default());
        state.apply_payload(Ok(numbered_payload(35))).unwrap();
        state.set_page(4);
        state.set_sort(SortKey::Id, None);
        assert_eq!(state.page(), 1);
        assert_eq!(state.sort(), SortState::new(SortKey::Id, SortDirection::Asc));
        state.set_sort(SortKey::Id, None);
        assert_eq!(state.sort().direction, SortDirection::Desc);
    }

    #[test]
    fn test_page_navigation_is_clamped() {
        let mut state = browser(10, SortState::new(SortKey::Id, SortDirection::Asc));
        state.apply_payload(Ok(numbered_payload(25))).unwrap();

        assert_eq!(state.prev_page(), 1);
        assert_eq!(state.next_page(), 2);
        assert_eq!(state.next_page(), 3);
        assert_eq!(state.next_page(), 3);
        assert_eq!(state.set_page(0), 1);
        assert_eq!(state.set_page(99), 3);
        assert_eq!(page_ids(&mut state), vec!["21", "22", "23", "24", "25"]);
    }

    #[test]
    fn test_viewport_width_switches_page_size() {
        let config = AppConfig::default();
        let mut state = BrowserState::from_config(&config, SortState::default(), Metrics::new());
        state.apply_payload(Ok(numbered_payload(45))).unwrap();
        assert_eq!(state.page_size(), 20);

        state.set_page(3);
        state.set_viewport_width(400, &config);
        assert_eq!(state.page_size(), 10);
        assert_eq!(state.page(), 3);

        state.set_page(5);
        state.set_viewport_width(1280, &config);
        assert_eq!(state.page_size(), 20);
        assert_eq!(state.page(), 3);
    }

    #[test]
    fn test_facets_ignore_active_filters() {
        let mut state = browser(20, SortState::default());
        state.apply_payload(Ok(two_problem_payload())).unwrap();
        state.set_filter(FilterCriterion::Company, "Google");

        let view = state.view(&CompletionSet::new());
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.facets.topics, vec!["Array", "DP"]);
        assert_eq!(view.facets.difficulties, vec!["easy", "hard"]);
    }

    #[test]
    fn test_repeat_views_hit_the_memo() {
        let metrics = Metrics::new();
        let mut state = BrowserState::new(20, SortState::default(), 8, metrics.clone());
        state.apply_payload(Ok(two_problem_payload())).unwrap();

        state.view(&CompletionSet::new());
        state.view(&CompletionSet::new());
        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.filter_cache_misses, 1);
        assert!(snapshot.filter_cache_hits >= 1);
        assert_eq!(snapshot.catalog_loads, 1);

        // Reloading invalidates the memo
        state.apply_payload(Ok(numbered_payload(3))).unwrap();
        assert_eq!(state.filtered_count(), 3);
        assert_eq!(metrics.snapshot().filter_cache_misses, 2);
    }

    #[test]
    fn test_failed_load_is_reported_in_view() {
        let mut state = browser(20, SortState::default());
        let err = state
            .apply_payload(Err(GrindError::new(ErrorKind::Network, "Failed to fetch problems")))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Network);

        let view = state.view(&CompletionSet::new());
        assert!(matches!(view.status, CatalogStatus::Failed(_)));
        assert!(view.status.error().map(GrindError::blocks_main_view).unwrap_or(false));
        assert!(view.rows.is_empty());
        assert_eq!(view.page_info.total, 1);
    }

    #[test]
    fn test_non_array_payload_fails_load() {
        let mut state = browser(20, SortState::default());
        let err = state.apply_payload(Ok(json!({ "error": "nope" }))).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidFormat);
        assert_eq!(state.status().error().map(|e| e.kind), Some(ErrorKind::InvalidFormat));
    }

    #[test]
    fn test_reset_filters_restores_defaults() {
        let mut state = browser(20, SortState::new(SortKey::Id, SortDirection::Asc));
        state.apply_payload(Ok(two_problem_payload())).unwrap();
        state.set_filter(FilterCriterion::Topic, "DP");
        state.set_filter(FilterCriterion::RatingMin, "2000");

        state.reset_filters();
        assert!(state.filters().is_empty());
        assert_eq!(state.sort(), SortState::default());
        assert_eq!(state.filtered_count(), 2);
    }

    #[test]
    fn test_view_serializes_status_tag() {
        let mut state = browser(20, SortState::default());
        state.apply_payload(Ok(two_problem_payload())).unwrap();
        let json = serde_json::to_value(state.view(&CompletionSet::from_ids([2]))).unwrap();
        assert_eq!(json["status"]["state"], "ready");
        assert_eq!(json["rows"][0]["id"], "2");
        assert_eq!(json["rows"][0]["completed"], true);
        assert_eq!(json["sort"]["key"], "rating");
    }
}
