// Facet keys and single-select facet state
//
// Facet options carry a normalized key ("computer-science") alongside their
// display label ("Computer Science"). Keys are produced by `facet_key`, which
// normalizes every whitespace run - the predecessor of this code replaced
// only the first space, which silently broke three-word department names.

/// Normalize a display label into a facet key: lowercase, every run of
/// whitespace collapsed to a single `-`.
pub fn facet_key(label: &str) -> String {
    let mut key = String::with_capacity(label.len());
    let mut in_gap = false;
    for c in label.trim().chars() {
        if c.is_whitespace() {
            in_gap = true;
            continue;
        }
        if in_gap && !key.is_empty() {
            key.push('-');
        }
        in_gap = false;
        for lower in c.to_lowercase() {
            key.push(lower);
        }
    }
    key
}

/// One selectable facet value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOption {
    pub key: String,
    pub label: String,
}

impl FacetOption {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    /// Build an option whose key is derived from the label
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            key: facet_key(&label),
            label,
        }
    }
}

/// A single-select categorical filter. Index 0 is always the "all" sentinel;
/// cycling wraps through the options.
#[derive(Debug, Clone)]
pub struct Facet {
    options: Vec<FacetOption>,
    selected: usize,
}

impl Facet {
    /// Build a facet from concrete options, prepending the "all" sentinel
    pub fn new(all_label: impl Into<String>, options: Vec<FacetOption>) -> Self {
        let mut opts = vec![FacetOption::new("all", all_label)];
        opts.extend(options);
        Self {
            options: opts,
            selected: 0,
        }
    }

    /// Key of the current selection, `None` when "all" is selected.
    /// This is exactly the shape `Predicates::facet` expects.
    pub fn selected_key(&self) -> Option<&str> {
        if self.selected == 0 {
            None
        } else {
            Some(&self.options[self.selected].key)
        }
    }

    pub fn selected_label(&self) -> &str {
        &self.options[self.selected].label
    }

    /// Advance to the next option, wrapping. Returns true if the selection
    /// changed (single-option facets never change).
    pub fn select_next(&mut self) -> bool {
        if self.options.len() < 2 {
            return false;
        }
        self.selected = (self.selected + 1) % self.options.len();
        true
    }

    /// Step back to the previous option, wrapping
    pub fn select_prev(&mut self) -> bool {
        if self.options.len() < 2 {
            return false;
        }
        self.selected = (self.selected + self.options.len() - 1) % self.options.len();
        true
    }

    /// Back to the "all" sentinel. Returns true if anything was active.
    pub fn clear(&mut self) -> bool {
        let was_active = self.selected != 0;
        self.selected = 0;
        was_active
    }

    pub fn is_active(&self) -> bool {
        self.selected != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facet_key_normalizes_single_word() {
        assert_eq!(facet_key("Electronics"), "electronics");
    }

    #[test]
    fn facet_key_normalizes_every_space() {
        assert_eq!(facet_key("Cultural Affairs"), "cultural-affairs");
        // The old first-space-only transform produced "environmental-science studies"
        assert_eq!(
            facet_key("Environmental Science Studies"),
            "environmental-science-studies"
        );
    }

    #[test]
    fn facet_key_collapses_runs_and_trims() {
        assert_eq!(facet_key("  Fine   Arts "), "fine-arts");
        assert_eq!(facet_key("Fine\tArts"), "fine-arts");
    }

    #[test]
    fn facet_starts_on_all_and_cycles() {
        let mut facet = Facet::new(
            "All Types",
            vec![FacetOption::new("tech", "Tech"), FacetOption::new("arts", "Arts")],
        );
        assert_eq!(facet.selected_key(), None);
        assert!(!facet.is_active());

        assert!(facet.select_next());
        assert_eq!(facet.selected_key(), Some("tech"));
        assert!(facet.is_active());

        assert!(facet.select_next());
        assert_eq!(facet.selected_key(), Some("arts"));

        // Wraps back to "all"
        assert!(facet.select_next());
        assert_eq!(facet.selected_key(), None);

        // And backwards from "all" lands on the last option
        assert!(facet.select_prev());
        assert_eq!(facet.selected_key(), Some("arts"));
    }

    #[test]
    fn clear_reports_whether_a_filter_was_dropped() {
        let mut facet = Facet::new("All", vec![FacetOption::new("tech", "Tech")]);
        assert!(!facet.clear());
        facet.select_next();
        assert!(facet.clear());
        assert_eq!(facet.selected_key(), None);
    }

    #[test]
    fn from_label_derives_key() {
        let opt = FacetOption::from_label("Computer Science");
        assert_eq!(opt.key, "computer-science");
        assert_eq!(opt.label, "Computer Science");
    }
}
