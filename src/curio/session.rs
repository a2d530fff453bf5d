//! Filter session state.
//!
//! The search box and the facet checkboxes keep their state between renders.
//! That state lives in a [`FilterSession`] the caller constructs and owns, and
//! hands to the query as [`QueryCriteria`]. The core never looks it up on its
//! own, which keeps queries testable without any UI around them.

use crate::facets::{FacetOption, SelectionSet};
use crate::query::QueryCriteria;

#[derive(Debug, Clone, Default)]
pub struct FilterSession {
    search: String,
    search_fields: Option<Vec<String>>,
    facets: Vec<(String, SelectionSet)>,
}

impl FilterSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Restricts free-text search to `fields` instead of the default set.
    pub fn set_search_fields(&mut self, fields: Vec<String>) {
        self.search_fields = Some(fields);
    }

    /// The current selection for `attr`, if any value was ever selected there.
    pub fn selection(&self, attr: &str) -> Option<&SelectionSet> {
        self.facets
            .iter()
            .find(|(name, _)| name == attr)
            .map(|(_, sel)| sel)
    }

    fn selection_mut(&mut self, attr: &str) -> &mut SelectionSet {
        let pos = match self.facets.iter().position(|(name, _)| name == attr) {
            Some(pos) => pos,
            None => {
                self.facets.push((attr.to_string(), SelectionSet::new()));
                self.facets.len() - 1
            }
        };
        &mut self.facets[pos].1
    }

    pub fn select(&mut self, attr: &str, id: &str) -> bool {
        self.selection_mut(attr).insert(id)
    }

    pub fn deselect(&mut self, attr: &str, id: &str) -> bool {
        self.selection_mut(attr).remove(id)
    }

    /// Flips `id` in the facet for `attr`; returns whether it is now selected.
    pub fn toggle(&mut self, attr: &str, id: &str) -> bool {
        self.selection_mut(attr).toggle(id)
    }

    pub fn clear_facet(&mut self, attr: &str) {
        if let Some((_, sel)) = self.facets.iter_mut().find(|(name, _)| name == attr) {
            sel.clear();
        }
    }

    /// Clears the search term and every facet.
    pub fn clear_all(&mut self) {
        self.search.clear();
        for (_, sel) in &mut self.facets {
            sel.clear();
        }
    }

    /// Drops selections for `attr` that are no longer among `options`.
    ///
    /// Call after rebuilding a facet's option list. Returns the dropped ids.
    pub fn prune_stale(&mut self, attr: &str, options: &[FacetOption]) -> Vec<String> {
        match self.facets.iter_mut().find(|(name, _)| name == attr) {
            Some((_, sel)) => sel.retain_known(options),
            None => Vec::new(),
        }
    }

    /// Attributes with at least one selected value, in the order first used.
    pub fn active_attrs(&self) -> Vec<String> {
        self.facets
            .iter()
            .filter(|(_, sel)| !sel.is_empty())
            .map(|(attr, _)| attr.clone())
            .collect()
    }

    pub fn active_facet_count(&self) -> usize {
        self.facets.iter().filter(|(_, sel)| !sel.is_empty()).count()
    }

    /// The query criteria for the current state.
    pub fn criteria(&self) -> QueryCriteria {
        let mut criteria = QueryCriteria::new().with_search(self.search.clone());
        if let Some(fields) = &self.search_fields {
            criteria = criteria.with_search_fields(fields.iter().cloned());
        }
        for (attr, sel) in &self.facets {
            criteria = criteria.with_facet(attr, sel.clone());
        }
        criteria
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::item_by;
    use crate::query::query;

    #[test]
    fn fresh_session_is_unfiltered() {
        assert!(FilterSession::new().criteria().is_unfiltered());
    }

    #[test]
    fn selections_flow_into_criteria() {
        let mut session = FilterSession::new();
        session.set_search("lil");
        session.select("artist", "Monet");
        session.toggle("condition", "fair");

        let criteria = session.criteria();
        assert_eq!(criteria.search, "lil");
        assert_eq!(criteria.facets.len(), 2);
        assert_eq!(session.active_facet_count(), 2);
        assert_eq!(session.active_attrs(), vec!["artist", "condition"]);
    }

    #[test]
    fn toggle_twice_deactivates() {
        let mut session = FilterSession::new();
        assert!(session.toggle("artist", "Monet"));
        assert!(!session.toggle("artist", "Monet"));
        assert_eq!(session.active_facet_count(), 0);
        assert!(session.criteria().is_unfiltered());
    }

    #[test]
    fn prune_stale_removes_vanished_options() {
        let mut session = FilterSession::new();
        session.select("artist", "Monet");
        session.select("artist", "Degas");

        let dropped = session.prune_stale("artist", &[FacetOption::new("Monet")]);
        assert_eq!(dropped, vec!["Degas"]);
        assert!(session.prune_stale("year", &[]).is_empty());

        let items = vec![item_by("A", "Monet"), item_by("B", "Degas")];
        assert_eq!(query(&items, &session.criteria()).filtered.len(), 1);
    }

    #[test]
    fn clear_all_resets_everything() {
        let mut session = FilterSession::new();
        session.set_search("x");
        session.select("artist", "Monet");
        session.clear_all();
        assert_eq!(session.search(), "");
        assert!(session.criteria().is_unfiltered());
    }

    #[test]
    fn clear_facet_and_deselect() {
        let mut session = FilterSession::new();
        session.select("artist", "Monet");
        session.select("year", "1920");
        assert!(session.deselect("year", "1920"));
        session.clear_facet("artist");
        assert!(session.selection("artist").unwrap().is_empty());
        assert_eq!(session.active_facet_count(), 0);
    }

    #[test]
    fn custom_search_fields() {
        let mut session = FilterSession::new();
        session.set_search_fields(vec!["room".into()]);
        assert_eq!(session.criteria().search_fields, vec!["room"]);
    }
}
