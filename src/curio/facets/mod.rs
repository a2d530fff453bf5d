//! # Multi-Select Facets
//!
//! Every filter in the collection view (artist, condition, creator, currency,
//! year) works the same way: a list of options derived from data or a catalog,
//! a set of selected option ids, and one matching rule.
//!
//! ## The Matching Rule
//!
//! [`matches`] is true if the selection is **empty** or contains the value.
//! An empty selection means the facet is inactive, not that nothing matches.
//! Within one facet selected values combine with OR; across facets the query
//! engine combines with AND.
//!
//! ## Options and Labels
//!
//! - [`build_options`] / [`build_options_with`]: dedup values into [`FacetOption`]s,
//!   first-seen or alphabetical
//! - [`LabelStyle`]: presentation-only transform of the label; matching keeps
//!   using the raw id
//! - [`OptionCache`]: options memoized per source version

mod cache;
mod label;
mod options;
mod selection;

pub use cache::OptionCache;
pub use label::{title_case, LabelStyle};
pub use options::{build_options, build_options_with, options_for_attr, FacetOption, OptionOrder};
pub use selection::{matches, SelectionSet};
