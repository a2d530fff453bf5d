//! # Collection Query
//!
//! One pass over the collection produces two views:
//!
//! - **filtered**: items passing the free-text search AND every active facet
//! - **warnings**: items failing the validation spec, computed over the
//!   *unfiltered* collection so incomplete items are flagged whatever the
//!   current filters are
//!
//! Input order is preserved in both views. Sorting is a presentation concern.
//!
//! ## Search
//!
//! Case-insensitive substring match against the configured search fields
//! (default: title, description, artist). An empty or whitespace-only term
//! matches every item.
//!
//! ## Facets
//!
//! A facet is an attribute name plus a [`SelectionSet`]. The set of facets is
//! open-ended: any attribute known to `Item::get_attr` can be used. Values
//! selected within one facet are alternatives; facets must all hold.

use log::debug;
use serde::Serialize;

use crate::attributes::{default_search_attrs, get_spec};
use crate::error::{CurioError, Result};
use crate::facets::SelectionSet;
use crate::model::Item;
use crate::validation::{ValidationSpec, WarningItem};

/// One active (or inactive, if empty) facet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetFilter {
    pub attr: String,
    pub selection: SelectionSet,
}

impl FacetFilter {
    pub fn new(attr: impl Into<String>, selection: SelectionSet) -> Self {
        Self {
            attr: attr.into(),
            selection,
        }
    }

    /// Whether `item` passes this facet. Items lacking the attribute only pass
    /// when the selection is empty.
    pub fn matches(&self, item: &Item) -> bool {
        if self.selection.is_empty() {
            return true;
        }
        item.get_attr(&self.attr)
            .is_some_and(|value| self.selection.contains(&value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCriteria {
    pub search: String,
    pub search_fields: Vec<String>,
    pub facets: Vec<FacetFilter>,
}

impl Default for QueryCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            search_fields: default_search_attrs().map(String::from).collect(),
            facets: Vec::new(),
        }
    }
}

impl QueryCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn with_search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a facet. Selecting on an attribute that already has a facet widens
    /// that facet rather than adding a second, stricter one.
    pub fn with_facet(mut self, attr: &str, selection: SelectionSet) -> Self {
        match self.facets.iter_mut().find(|f| f.attr == attr) {
            Some(existing) => {
                for id in selection.iter() {
                    existing.selection.insert(id);
                }
            }
            None => self.facets.push(FacetFilter::new(attr, selection)),
        }
        self
    }

    /// Adds a single selected value to the facet for `attr`.
    pub fn select(self, attr: &str, value: impl Into<String>) -> Self {
        let value: String = value.into();
        let selection: SelectionSet = std::iter::once(value).collect();
        self.with_facet(attr, selection)
    }

    /// True when the criteria cannot exclude anything.
    pub fn is_unfiltered(&self) -> bool {
        self.search.trim().is_empty() && self.facets.iter().all(|f| f.selection.is_empty())
    }

    /// Whether `item` passes the search and every facet.
    pub fn matches(&self, item: &Item) -> bool {
        self.matches_search(item) && self.facets.iter().all(|facet| facet.matches(item))
    }

    fn matches_search(&self, item: &Item) -> bool {
        let term = self.search.trim();
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.search_fields.iter().any(|field| {
            item.get_attr(field)
                .is_some_and(|value| value.to_string().to_lowercase().contains(&term))
        })
    }
}

/// Parses an `attr=value` filter expression.
///
/// The attribute must be a known item attribute; the value is taken verbatim
/// (it may itself contain `=`).
pub fn parse_filter_expr(expr: &str) -> Result<(String, String)> {
    let Some((attr, value)) = expr.split_once('=') else {
        return Err(CurioError::InvalidFilter(format!(
            "expected ATTR=VALUE, got '{}'",
            expr
        )));
    };
    let attr = attr.trim();
    if get_spec(attr).is_none() {
        return Err(CurioError::InvalidFilter(format!(
            "unknown attribute '{}'",
            attr
        )));
    }
    Ok((attr.to_string(), value.to_string()))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryResult {
    pub filtered: Vec<Item>,
    pub warnings: Vec<WarningItem>,
}

/// Runs `criteria` over `items`, with warnings from the decor-item spec.
pub fn query(items: &[Item], criteria: &QueryCriteria) -> QueryResult {
    query_with_spec(items, criteria, &ValidationSpec::decor_item())
}

/// Runs `criteria` over `items`, with warnings from `spec`.
pub fn query_with_spec(items: &[Item], criteria: &QueryCriteria, spec: &ValidationSpec) -> QueryResult {
    let mut result = QueryResult::default();

    for item in items {
        if criteria.matches(item) {
            result.filtered.push(item.clone());
        }
        if let Some(warning) = WarningItem::check(item, spec) {
            result.warnings.push(warning);
        }
    }

    debug!(
        "query over {} items: {} matched, {} incomplete",
        items.len(),
        result.filtered.len(),
        result.warnings.len()
    );
    result
}
