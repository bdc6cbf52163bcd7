// Predicate builder - turns filter state into the AND-set paginate consumes
//
// Inactive filters (empty search box, facet on "all") are omitted from the
// set entirely rather than evaluated as always-true, so a view with nothing
// active carries zero predicates and tests can assert exactly which filters
// are in play.

/// An ordered AND-set of predicates over `T`
pub struct Predicates<T> {
    preds: Vec<Box<dyn Fn(&T) -> bool>>,
}

impl<T: 'static> Predicates<T> {
    pub fn new() -> Self {
        Self { preds: Vec::new() }
    }

    /// Number of active predicates
    pub fn len(&self) -> usize {
        self.preds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.preds.is_empty()
    }

    /// Add an arbitrary predicate
    pub fn push(mut self, pred: impl Fn(&T) -> bool + 'static) -> Self {
        self.preds.push(Box::new(pred));
        self
    }

    /// Case-insensitive substring search across the given field accessors.
    /// Empty or whitespace-only queries add no predicate.
    pub fn search(self, query: &str, fields: Vec<fn(&T) -> &str>) -> Self {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return self;
        }
        let needle = trimmed.to_lowercase();
        self.push(move |item| {
            fields
                .iter()
                .any(|field| field(item).to_lowercase().contains(&needle))
        })
    }

    /// Exact match against a facet key. `None` means the "all" sentinel is
    /// selected and adds no predicate.
    pub fn facet(self, selected: Option<&str>, key_of: fn(&T) -> String) -> Self {
        match selected {
            None => self,
            Some(key) => {
                let key = key.to_string();
                self.push(move |item| key_of(item) == key)
            }
        }
    }

    /// True when every active predicate holds for `item`
    pub fn matches(&self, item: &T) -> bool {
        self.preds.iter().all(|pred| pred(item))
    }
}

impl<T: 'static> Default for Predicates<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        title: String,
        group: String,
    }

    fn rows() -> Vec<Row> {
        [
            ("Intro to Rust", "tech"),
            ("Watercolor Basics", "arts"),
            ("Advanced Rust Traits", "tech"),
        ]
        .iter()
        .map(|(t, g)| Row {
            title: t.to_string(),
            group: g.to_string(),
        })
        .collect()
    }

    #[test]
    fn blank_search_adds_no_predicate() {
        let preds = Predicates::<Row>::new().search("", vec![|r| &r.title]);
        assert!(preds.is_empty());

        let preds = Predicates::<Row>::new().search("   ", vec![|r| &r.title]);
        assert!(preds.is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let preds = Predicates::new().search("rUsT", vec![|r: &Row| &r.title]);
        assert_eq!(preds.len(), 1);
        let hits: Vec<_> = rows().into_iter().filter(|r| preds.matches(r)).collect();
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn search_spans_multiple_fields() {
        let preds = Predicates::new().search("arts", vec![|r: &Row| &r.title, |r: &Row| &r.group]);
        let hits: Vec<_> = rows().into_iter().filter(|r| preds.matches(r)).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Watercolor Basics");
    }

    #[test]
    fn all_sentinel_adds_no_facet_predicate() {
        let preds = Predicates::<Row>::new().facet(None, |r| r.group.clone());
        assert!(preds.is_empty());
    }

    #[test]
    fn facets_and_search_compose_with_and() {
        let preds = Predicates::new()
            .search("rust", vec![|r: &Row| &r.title])
            .facet(Some("tech"), |r: &Row| r.group.clone());
        assert_eq!(preds.len(), 2);

        let hits: Vec<_> = rows().into_iter().filter(|r| preds.matches(r)).collect();
        assert_eq!(hits.len(), 2);

        let preds = Predicates::new()
            .search("rust", vec![|r: &Row| &r.title])
            .facet(Some("arts"), |r: &Row| r.group.clone());
        assert!(!rows().iter().any(|r| preds.matches(r)));
    }
}
