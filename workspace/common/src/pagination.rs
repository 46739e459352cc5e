/// One slot of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(u64),
    Gap,
}

const MAX_VISIBLE_PAGES: u64 = 5;

pub fn page_count(total_items: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        return 0;
    }
    total_items.div_ceil(per_page)
}

/// Offset of the first item on the 1-based `page`.
pub fn offset_for_page(page: u64, per_page: u64) -> u64 {
    page.saturating_sub(1) * per_page
}

/// Pages to show around `current`: all of them when there are few,
/// otherwise first, last, current and its neighbours with gaps between.
pub fn page_window(current: u64, total_pages: u64) -> Vec<PageSlot> {
    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(PageSlot::Page).collect();
    }

    let current = current.clamp(1, total_pages);
    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total_pages - 1);

    let mut slots = vec![PageSlot::Page(1)];
    if start > 2 {
        slots.push(PageSlot::Gap);
    }
    slots.extend((start..=end).map(PageSlot::Page));
    if end < total_pages - 1 {
        slots.push(PageSlot::Gap);
    }
    slots.push(PageSlot::Page(total_pages));
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageSlot::{Gap, Page};

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn test_offset_for_page() {
        assert_eq!(offset_for_page(1, 10), 0);
        assert_eq!(offset_for_page(4, 25), 75);
        assert_eq!(offset_for_page(0, 10), 0);
    }

    #[test]
    fn test_small_window_lists_every_page() {
        assert_eq!(page_window(2, 3), vec![Page(1), Page(2), Page(3)]);
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn test_window_with_gaps() {
        assert_eq!(
            page_window(6, 12),
            vec![Page(1), Gap, Page(5), Page(6), Page(7), Gap, Page(12)]
        );
        assert_eq!(
            page_window(1, 12),
            vec![Page(1), Page(2), Gap, Page(12)]
        );
        assert_eq!(
            page_window(12, 12),
            vec![Page(1), Gap, Page(11), Page(12)]
        );
    }
}
