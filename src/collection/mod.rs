// Collection view model - the one derivation every listing view shares
//
// Turns (full entity list, active predicates, page request) into the page the
// view renders. The derivation is pure and re-run synchronously on every
// filter or page change; the source list is never mutated or re-sorted.
//
// The page-reset contract lives with the caller: any setter that changes the
// search text or a facet must put the page back to 1, otherwise a narrower
// filter can leave the user stranded past the last page. Controllers in
// tui/views uphold this and the tests below pin the clamping half.

mod facet;
mod predicate;

pub use facet::{facet_key, Facet, FacetOption};
pub use predicate::Predicates;

/// One derived page of a filtered collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on the current page, in source order
    pub items: Vec<T>,
    /// How many items matched across all pages
    pub total_matching: usize,
    /// Always at least 1, even for an empty match set
    pub total_pages: usize,
    /// The page actually shown (requested page clamped into range)
    pub page: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.total_matching == 0
    }
}

/// Derive one page of `items` under `predicates`.
///
/// An out-of-range `page` is clamped, never an error: requesting page 7 of a
/// 2-page result shows page 2. A `page_size` of zero is a programmer error
/// and panics.
pub fn paginate<T: Clone + 'static>(
    items: &[T],
    predicates: &Predicates<T>,
    page_size: usize,
    page: usize,
) -> Page<T> {
    assert!(page_size > 0, "page_size must be positive");

    let matching: Vec<&T> = items.iter().filter(|x| predicates.matches(x)).collect();
    let total_matching = matching.len();
    let total_pages = total_matching.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * page_size;
    let items = matching
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    Page {
        items,
        total_matching,
        total_pages,
        page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn unfiltered_pages_split_in_order() {
        let items = numbers(8);
        let none = Predicates::new();

        let p1 = paginate(&items, &none, 4, 1);
        assert_eq!(p1.items, vec![1, 2, 3, 4]);
        assert_eq!(p1.total_matching, 8);
        assert_eq!(p1.total_pages, 2);

        let p2 = paginate(&items, &none, 4, 2);
        assert_eq!(p2.items, vec![5, 6, 7, 8]);
    }

    #[test]
    fn out_of_range_page_clamps_to_last() {
        let items = numbers(8);
        let none = Predicates::new();

        let p3 = paginate(&items, &none, 4, 3);
        assert_eq!(p3.page, 2);
        assert_eq!(p3.items, paginate(&items, &none, 4, 2).items);

        // Page 0 clamps up to 1
        let p0 = paginate(&items, &none, 4, 0);
        assert_eq!(p0.page, 1);
    }

    #[test]
    fn empty_match_set_still_has_one_page() {
        let items = numbers(5);
        let impossible = Predicates::new().push(|_: &usize| false);

        let page = paginate(&items, &impossible, 4, 1);
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn total_pages_matches_ceiling_division() {
        let none = Predicates::<usize>::new();
        for count in 0..20 {
            let items = numbers(count);
            for page_size in 1..6 {
                let page = paginate(&items, &none, page_size, 1);
                let expected = (count + page_size - 1) / page_size;
                assert_eq!(page.total_pages, expected.max(1), "count={count} size={page_size}");
                assert!(page.items.len() <= page_size);
            }
        }
    }

    #[test]
    fn filtered_page_preserves_source_order() {
        let items = numbers(20);
        let evens = Predicates::new().push(|n: &usize| n % 2 == 0);

        let p1 = paginate(&items, &evens, 4, 1);
        assert_eq!(p1.items, vec![2, 4, 6, 8]);
        let p2 = paginate(&items, &evens, 4, 2);
        assert_eq!(p2.items, vec![10, 12, 14, 16]);
        assert_eq!(p1.total_matching, 10);
        assert_eq!(p1.total_pages, 3);
    }

    #[test]
    fn derivation_is_idempotent_and_non_mutating() {
        let items = numbers(10);
        let snapshot = items.clone();
        let odds = Predicates::new().push(|n: &usize| n % 2 == 1);

        let first = paginate(&items, &odds, 3, 2);
        let second = paginate(&items, &odds, 3, 2);
        assert_eq!(first, second);
        assert_eq!(items, snapshot);
    }

    #[test]
    #[should_panic(expected = "page_size must be positive")]
    fn zero_page_size_is_a_programmer_error() {
        let items = numbers(3);
        paginate(&items, &Predicates::new(), 0, 1);
    }
}
