//! Page windowing.

/// Records shown per page in report grids.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Number of pages needed for `len` records; `0` when there is nothing to show.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// The slice of `records` visible on 1-based `page`.
///
/// Out-of-range pages (including `0`) and a zero page size yield an empty
/// slice. Record order is never changed.
pub fn window_of<T>(records: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let Some(start) = (page - 1).checked_mul(page_size) else {
        return &[];
    };
    if start >= records.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(records.len());
    &records[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 25), 0);
        assert_eq!(total_pages(1, 25), 1);
        assert_eq!(total_pages(25, 25), 1);
        assert_eq!(total_pages(26, 25), 2);
        assert_eq!(total_pages(10, 0), 0);
    }

    #[test]
    fn test_window_clips_last_page() {
        let data: Vec<u32> = (1..=7).collect();
        assert_eq!(window_of(&data, 1, 3), &[1, 2, 3]);
        assert_eq!(window_of(&data, 2, 3), &[4, 5, 6]);
        assert_eq!(window_of(&data, 3, 3), &[7]);
    }

    #[test]
    fn test_window_out_of_range_is_empty() {
        let data: Vec<u32> = (1..=7).collect();
        assert!(window_of(&data, 4, 3).is_empty());
        assert!(window_of(&data, 0, 3).is_empty());
        assert!(window_of(&data, 1, 0).is_empty());
        assert!(window_of(&data, usize::MAX, usize::MAX).is_empty());
        let empty: Vec<u32> = Vec::new();
        assert!(window_of(&empty, 1, 25).is_empty());
    }

    #[test]
    fn test_windows_reconstruct_input() {
        let data: Vec<u32> = (0..103).collect();
        for page_size in [1, 2, 7, 25, 103, 200] {
            let pages = total_pages(data.len(), page_size);
            let rebuilt: Vec<u32> = (1..=pages)
                .flat_map(|p| window_of(&data, p, page_size).iter().copied())
                .collect();
            assert_eq!(rebuilt, data, "page_size {page_size}");
        }
    }
}
