//! Building option lists for multi-select facets.

use serde::Serialize;
use std::collections::HashSet;

use super::LabelStyle;
use crate::model::Item;

/// One selectable value in a facet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FacetOption {
    /// The raw value matched against items.
    pub id: String,
    /// What the user sees.
    pub display_name: String,
}

impl FacetOption {
    /// An option whose label is its id.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            display_name: id.clone(),
            id,
        }
    }

    pub fn with_label(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// Ordering of a derived option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionOrder {
    /// Keep the order values first appear in (artist, year, creator).
    #[default]
    FirstSeen,
    /// Sort by id (currency, condition).
    Alphabetical,
}

/// Deduplicates `values` (exact, case-sensitive) into options with raw labels.
///
/// Blank values are skipped: "no artist" is not something to filter for.
pub fn build_options<I, S>(values: I, order: OptionOrder) -> Vec<FacetOption>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    build_options_with(values, order, LabelStyle::Raw)
}

/// Like [`build_options`], deriving display names with `style`.
pub fn build_options_with<I, S>(values: I, order: OptionOrder, style: LabelStyle) -> Vec<FacetOption>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut ids: Vec<String> = Vec::new();

    for value in values {
        let value = value.as_ref();
        if value.trim().is_empty() || seen.contains(value) {
            continue;
        }
        seen.insert(value.to_string());
        ids.push(value.to_string());
    }

    if order == OptionOrder::Alphabetical {
        ids.sort();
    }

    ids.into_iter()
        .map(|id| {
            let label = style.apply(&id);
            FacetOption::with_label(id, label)
        })
        .collect()
}

/// Derives the options for one attribute from the values present in `items`.
///
/// Items lacking the attribute contribute nothing. Unknown attribute names
/// produce an empty list.
pub fn options_for_attr(
    items: &[Item],
    attr: &str,
    order: OptionOrder,
    style: LabelStyle,
) -> Vec<FacetOption> {
    let values = items
        .iter()
        .filter_map(|item| item.get_attr(attr))
        .map(|value| value.to_string());
    build_options_with(values, order, style)
}
