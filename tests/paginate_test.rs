#[cfg(test)]
mod tests {
    use crate::problems::paginate::{clamp_page, compressed_pages, page_slice, total_pages, PageEntry, PageInfo};

    fn pages(entries: &[PageEntry]) -> Vec<Option<usize>> {
        entries
            .iter()
            .map(|e| match e {
                PageEntry::Page(n) => Some(*n),
                PageEntry::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 20), 1);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(95, 10), 10);
    }

    #[test]
    fn test_pages_cover_items_without_overlap() {
        for count in [0usize, 1, 7, 10, 23] {
            for size in [1usize, 3, 10] {
                let items: Vec<usize> = (0..count).collect();
                let total = total_pages(count, size);
                let joined: Vec<usize> = (1..=total)
                    .flat_map(|page| page_slice(&items, page, size).iter().copied())
                    .collect();
                assert_eq!(joined, items, "count={} size={}", count, size);
            }
        }
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let items = [1, 2, 3];
        assert!(page_slice(&items, 3, 2).is_empty());
        assert_eq!(page_slice(&items, 2, 2), &[3]);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(9, 5), 5);
        assert_eq!(clamp_page(3, 0), 1);
    }

    #[test]
    fn test_few_pages_listed_in_full() {
        assert_eq!(pages(&compressed_pages(1, 1)), vec![Some(1)]);
        assert_eq!(
            pages(&compressed_pages(2, 5)),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
    }

    #[test]
    fn test_compressed_near_start() {
        assert_eq!(
            pages(&compressed_pages(2, 10)),
            vec![Some(1), Some(2), Some(3), Some(4), None, Some(10)]
        );
    }

    #[test]
    fn test_compressed_near_end() {
        assert_eq!(
            pages(&compressed_pages(9, 10)),
            vec![Some(1), None, Some(7), Some(8), Some(9), Some(10)]
        );
    }

    #[test]
    fn test_compressed_middle() {
        assert_eq!(
            pages(&compressed_pages(5, 10)),
            vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(10)]
        );
    }

    #[test]
    fn test_page_info_clamps_current() {
        let info = PageInfo::new(7, 10, 25);
        assert_eq!(info.total, 3);
        assert_eq!(info.current, 3);
        assert_eq!(info.total_items, 25);
        assert_eq!(info.entries.len(), 3);
    }

    #[test]
    fn test_page_entry_serialization() {
        let json = serde_json::to_value(compressed_pages(1, 6)).unwrap();
        assert_eq!(json[0], serde_json::json!({ "type": "page", "page": 1 }));
        assert_eq!(json[4], serde_json::json!({ "type": "ellipsis" }));
    }
}
