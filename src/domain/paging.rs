//! Page slicing over an already-filtered list.

/// Number of pages for `count` items. Never less than 1; `page_size` 0 counts as 1.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    count.div_ceil(size).max(1)
}

/// Items of page `page_index` (zero-based). Out-of-range pages are empty.
pub fn page<T: Clone>(items: &[T], page_size: usize, page_index: usize) -> Vec<T> {
    let size = page_size.max(1);
    let Some(start) = page_index.checked_mul(size) else {
        return Vec::new();
    };
    if start >= items.len() {
        return Vec::new();
    }
    let end = start.saturating_add(size).min(items.len());
    items[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 3), 1);
        assert_eq!(total_pages(3, 3), 1);
        assert_eq!(total_pages(4, 3), 2);
        assert_eq!(total_pages(7, 0), 7);
    }

    #[test]
    fn test_first_page() {
        let items = vec![1, 2, 3, 4, 5];
        assert_eq!(page(&items, 3, 0), vec![1, 2, 3]);
        assert_eq!(page(&items[..2], 3, 0), vec![1, 2]);
    }

    #[test]
    fn test_last_partial_page() {
        let items = vec![1, 2, 3, 4, 5];
        assert_eq!(page(&items, 3, 1), vec![4, 5]);
    }

    #[test]
    fn test_out_of_range_is_empty() {
        let items = vec![1, 2, 3, 4, 5];
        let pages = total_pages(items.len(), 3);
        assert!(page(&items, 3, pages).is_empty());
        assert!(page(&items, 3, usize::MAX).is_empty());
        assert!(page::<i32>(&[], 3, 0).is_empty());
    }
}
