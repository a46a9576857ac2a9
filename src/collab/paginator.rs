/// A contiguous, non-owning slice of `page_size` (or fewer, for the last
/// page) elements. Grounded on the reference implementation's `Page`, which
/// wraps a `[begin, end)` iterator pair over the same idea.
#[derive(Debug, Clone, Copy)]
pub struct Page<'a, T> {
    items: &'a [T],
}

impl<'a, T> Page<'a, T> {
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Splits a slice into fixed-size, non-overlapping pages; the final page may
/// be shorter. `page_size` must be greater than zero.
pub struct Paginator<'a, T> {
    pages: Vec<Page<'a, T>>,
}

impl<'a, T> Paginator<'a, T> {
    pub fn new(items: &'a [T], page_size: usize) -> Self {
        assert!(page_size > 0, "page_size must be greater than zero");
        let pages = items.chunks(page_size).map(|items| Page { items }).collect();
        Paginator { pages }
    }

    pub fn pages(&self) -> &[Page<'a, T>] {
        &self.pages
    }
}

impl<'a, T> IntoIterator for Paginator<'a, T> {
    type Item = Page<'a, T>;
    type IntoIter = std::vec::IntoIter<Page<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.into_iter()
    }
}

/// Convenience entry point mirroring the reference implementation's free
/// `Paginate` function.
pub fn paginate<T>(items: &[T], page_size: usize) -> Paginator<'_, T> {
    Paginator::new(items, page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_fixed_size_pages_with_a_short_last_page() {
        let items = vec![1, 2, 3, 4, 5, 6, 7];
        let paginator = paginate(&items, 3);
        let pages: Vec<&[i32]> = paginator.pages().iter().map(|p| p.items()).collect();
        assert_eq!(pages, vec![&[1, 2, 3][..], &[4, 5, 6][..], &[7][..]]);
    }

    #[test]
    fn exact_multiple_has_no_short_page() {
        let items = vec![1, 2, 3, 4];
        let paginator = paginate(&items, 2);
        assert_eq!(paginator.pages().len(), 2);
    }

    #[test]
    fn empty_input_has_no_pages() {
        let items: Vec<i32> = Vec::new();
        let paginator = paginate(&items, 5);
        assert!(paginator.pages().is_empty());
    }
}
