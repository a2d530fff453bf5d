//! Selection sets and the shared matching rule.

use std::collections::HashSet;

use super::FacetOption;

/// The option ids currently chosen within one facet.
///
/// Insertion order is kept for display ("Hokusai, Hiroshige" stays in the order
/// the user clicked). Membership uses a hash set, so matching does not depend
/// on that order and costs O(1) per item.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    order: Vec<String>,
    members: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` unless it is already selected. Returns `true` if it was added.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.members.contains(&id) {
            return false;
        }
        self.members.insert(id.clone());
        self.order.push(id);
        true
    }

    /// Removes `id`. Returns `true` if it was selected.
    pub fn remove(&mut self, id: &str) -> bool {
        if !self.members.remove(id) {
            return false;
        }
        self.order.retain(|s| s != id);
        true
    }

    /// Selects `id` if unselected, deselects it otherwise. Returns the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.remove(id) {
            false
        } else {
            self.insert(id)
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.members.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }

    /// Selected ids in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Drops selected ids that are not in `options`, returning what was dropped.
    ///
    /// Callers run this whenever the option list is rebuilt so a stale id never
    /// outlives the option it referred to.
    pub fn retain_known(&mut self, options: &[FacetOption]) -> Vec<String> {
        let known: HashSet<&str> = options.iter().map(|o| o.id.as_str()).collect();
        let (kept, dropped): (Vec<String>, Vec<String>) = self
            .order
            .drain(..)
            .partition(|id| known.contains(id.as_str()));
        for id in &dropped {
            self.members.remove(id);
        }
        self.order = kept;
        dropped
    }

    /// The matching rule every facet shares. See [`matches`].
    pub fn matches(&self, value: &str) -> bool {
        matches(value, self)
    }
}

/// Set equality: two selections are equal if they select the same ids,
/// whatever order they were picked in.
impl PartialEq for SelectionSet {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl Eq for SelectionSet {}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = SelectionSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

/// True if `selection` is empty, or `value` is one of the selected ids.
///
/// An empty selection means "no filter on this facet" and matches everything.
/// Comparison is exact and case-sensitive, on raw values, never on display
/// labels.
pub fn matches(value: &str, selection: &SelectionSet) -> bool {
    selection.is_empty() || selection.contains(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_matches_everything() {
        let empty = SelectionSet::new();
        for value in ["", "Hokusai", "  ", "1920"] {
            assert!(matches(value, &empty));
        }
    }

    #[test]
    fn membership_is_exact() {
        let sel: SelectionSet = ["Hokusai"].into_iter().collect();
        assert!(matches("Hokusai", &sel));
        assert!(!matches("hokusai", &sel));
        assert!(!matches("Hiroshige", &sel));
    }

    #[test]
    fn insertion_order_does_not_affect_matching() {
        let a: SelectionSet = ["A", "B", "C"].into_iter().collect();
        let b: SelectionSet = ["C", "A", "B"].into_iter().collect();
        for value in ["A", "B", "C", "D"] {
            assert_eq!(matches(value, &a), matches(value, &b));
        }
        assert_eq!(a, b);
    }

    #[test]
    fn no_duplicates_and_order_kept() {
        let mut sel = SelectionSet::new();
        assert!(sel.insert("B"));
        assert!(sel.insert("A"));
        assert!(!sel.insert("B"));
        assert_eq!(sel.iter().collect::<Vec<_>>(), vec!["B", "A"]);
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn toggle_and_remove() {
        let mut sel = SelectionSet::new();
        assert!(sel.toggle("A"));
        assert!(sel.contains("A"));
        assert!(!sel.toggle("A"));
        assert!(sel.is_empty());
        assert!(!sel.remove("A"));
    }

    #[test]
    fn retain_known_prunes_stale_ids() {
        let mut sel: SelectionSet = ["A", "gone", "B"].into_iter().collect();
        let options = vec![FacetOption::new("A"), FacetOption::new("B")];

        let dropped = sel.retain_known(&options);
        assert_eq!(dropped, vec!["gone"]);
        assert_eq!(sel.iter().collect::<Vec<_>>(), vec!["A", "B"]);
        assert!(!sel.contains("gone"));
    }
}
