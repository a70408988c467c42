#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::problems::normalize::{normalize_catalog, normalize_record, RawProblem};
    use serde_json::json;

    #[test]
    fn test_tags_used_when_topics_missing() {
        let p = normalize_record(&json!({ "id": "7", "tags": ["Array", "Hash Table"] }));
        assert_eq!(p.topics, vec!["Array", "Hash Table"]);
    }

    #[test]
    fn test_topics_preferred_over_tags() {
        let p = normalize_record(&json!({ "topics": ["Graph"], "tags": ["Tree"] }));
        assert_eq!(p.topics, vec!["Graph"]);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let p = normalize_record(&json!({}));
        assert_eq!(p.id, "N/A");
        assert_eq!(p.title, "Untitled");
        assert_eq!(p.difficulty, "unknown");
        assert_eq!(p.rating, 0.0);
        assert!(p.topics.is_empty());
        assert!(p.companies.is_empty());
        assert!(p.url.is_none());
    }

    #[test]
    fn test_strings_are_trimmed_and_difficulty_lowercased() {
        let p = normalize_record(&json!({
            "id": " 42 ",
            "title": "  Two Sum ",
            "difficulty": " MEDIUM ",
            "topics": [" Array "],
            "companies": [" Google", "Meta "],
        }));
        assert_eq!(p.id, "42");
        assert_eq!(p.title, "Two Sum");
        assert_eq!(p.difficulty, "medium");
        assert_eq!(p.topics, vec!["Array"]);
        assert_eq!(p.companies, vec!["Google", "Meta"]);
    }

    #[test]
    fn test_numeric_id_becomes_string() {
        let p = normalize_record(&json!({ "id": 1 }));
        assert_eq!(p.id, "1");
        assert_eq!(p.numeric_id(), Some(1));
    }

    #[test]
    fn test_non_numeric_rating_becomes_zero() {
        assert_eq!(normalize_record(&json!({ "rating": "abc" })).rating, 0.0);
        assert_eq!(normalize_record(&json!({ "rating": null })).rating, 0.0);
        assert_eq!(normalize_record(&json!({ "rating": 1834.5 })).rating, 1834.5);
    }

    #[test]
    fn test_non_array_companies_become_empty() {
        let p = normalize_record(&json!({ "companies": "Google" }));
        assert!(p.companies.is_empty());
    }

    #[test]
    fn test_raw_stage_keeps_untyped_values() {
        let raw = RawProblem::from_value(&json!({ "id": 3, "tags": ["DP"] }));
        assert_eq!(raw.id, json!(3));
        assert_eq!(raw.topics, json!(["DP"]));
        assert_eq!(raw.title, json!("Untitled"));
    }

    #[test]
    fn test_catalog_must_be_array() {
        let err = normalize_catalog(&json!({ "problems": [] })).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidFormat);
        assert!(err.blocks_main_view());
    }

    #[test]
    fn test_catalog_keeps_order_and_length() {
        let problems = normalize_catalog(&json!([{ "id": "2" }, 17, { "id": "1" }])).unwrap();
        let ids: Vec<&str> = problems.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "N/A", "1"]);
    }
}
