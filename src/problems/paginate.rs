use serde::Serialize;

/// Page lists longer than this are compressed with ellipses
pub const MAX_PAGES_SHOWN: usize = 5;

/// One slot in the navigation control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "page", rename_all = "lowercase")]
pub enum PageEntry {
    Page(usize),
    /// Non-interactive gap marker
    Ellipsis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub current: usize,
    pub total: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub entries: Vec<PageEntry>,
}

impl PageInfo {
    pub fn new(current: usize, page_size: usize, total_items: usize) -> Self {
        let total = total_pages(total_items, page_size);
        let current = clamp_page(current, total);
        PageInfo {
            current,
            total,
            page_size,
            total_items,
            entries: compressed_pages(current, total),
        }
    }
}

/// `ceil(count / size)`, never less than 1
pub fn total_pages(count: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    count.div_ceil(size).max(1)
}

pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// Items of 1-based `page`; empty when the page lies past the end
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

/// Navigation entries around `current`:
/// all pages when there are few, otherwise the first and last page with a
/// window around the current one and ellipses for the gaps.
pub fn compressed_pages(current: usize, total: usize) -> Vec<PageEntry> {
    let total = total.max(1);
    let current = clamp_page(current, total);

    if total <= MAX_PAGES_SHOWN {
        return (1..=total).map(PageEntry::Page).collect();
    }

    let mut entries = Vec::with_capacity(7);
    if current <= 3 {
        entries.extend((1..=4).map(PageEntry::Page));
        entries.push(PageEntry::Ellipsis);
        entries.push(PageEntry::Page(total));
    } else if current >= total - 2 {
        entries.push(PageEntry::Page(1));
        entries.push(PageEntry::Ellipsis);
        entries.extend((total - 3..=total).map(PageEntry::Page));
    } else {
        entries.push(PageEntry::Page(1));
        entries.push(PageEntry::Ellipsis);
        entries.extend((current - 1..=current + 1).map(PageEntry::Page));
        entries.push(PageEntry::Ellipsis);
        entries.push(PageEntry::Page(total));
    }
    entries
}
