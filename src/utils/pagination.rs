// src/utils/pagination.rs

/// Fixed page size for every paginated question listing.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the 1-indexed `page` of `items`.
///
/// Out-of-range pages yield an empty slice rather than an error, and so do
/// page numbers `<= 0`.
pub fn paginate<T>(page: i64, items: &[T]) -> &[T] {
    if page <= 0 {
        return &[];
    }

    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
        .unwrap_or(usize::MAX);
    if start >= items.len() {
        return &[];
    }

    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}
