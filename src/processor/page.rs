//! Page windowing.

/// The slice shown on `page`: `[page * size, (page + 1) * size)`.
///
/// Clamped to the available range. A page past the end is empty.
pub fn apply_page<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let Some(start) = page.checked_mul(page_size) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `count` items.
///
/// Zero items still make one (empty) page, so there is always a
/// valid current page.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}
