//! Attribute specifications and registry.
//!
//! This module defines the schema for item attributes: what kind of value they
//! hold, whether free-text search looks at them, and whether they can be used
//! as a facet.

/// The kind of value an attribute holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// Free text (e.g., `title`, `artist`)
    Text,

    /// Non-negative number (e.g., `quantity`)
    Number,

    /// Date stored as text (e.g., `acquisition_date`). Not format-checked.
    Date,
}

/// Specification for a single attribute.
#[derive(Debug, Clone)]
pub struct AttributeSpec {
    /// The attribute name used in filters and on the command line
    pub name: &'static str,

    /// The kind of value this attribute holds
    pub kind: AttributeKind,

    /// Whether the free-text search considers this attribute by default
    pub searchable: bool,

    /// Whether this attribute can be used as a multi-select facet
    pub filterable: bool,
}

impl AttributeSpec {
    const fn new(name: &'static str, kind: AttributeKind) -> Self {
        Self {
            name,
            kind,
            searchable: false,
            filterable: false,
        }
    }

    const fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    const fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }
}

/// Registry of all item attributes.
///
/// Adding a new field to [`Item`](crate::model::Item) means adding an entry here
/// and a match arm in `Item::get_attr`.
pub const ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("title", AttributeKind::Text).searchable(),
    AttributeSpec::new("description", AttributeKind::Text).searchable(),
    AttributeSpec::new("artist", AttributeKind::Text)
        .searchable()
        .filterable(),
    AttributeSpec::new("creator", AttributeKind::Text).filterable(),
    AttributeSpec::new("condition", AttributeKind::Text).filterable(),
    AttributeSpec::new("category", AttributeKind::Text).filterable(),
    AttributeSpec::new("subcategory", AttributeKind::Text).filterable(),
    AttributeSpec::new("house", AttributeKind::Text).filterable(),
    AttributeSpec::new("room", AttributeKind::Text).filterable(),
    AttributeSpec::new("year", AttributeKind::Text).filterable(),
    AttributeSpec::new("acquisition_date", AttributeKind::Date),
    AttributeSpec::new("currency", AttributeKind::Text).filterable(),
    AttributeSpec::new("price", AttributeKind::Text),
    AttributeSpec::new("quantity", AttributeKind::Number),
];

/// Look up an attribute spec by name.
pub fn get_spec(name: &str) -> Option<&'static AttributeSpec> {
    ATTRIBUTES.iter().find(|spec| spec.name == name)
}

/// Names of attributes usable as facets.
pub fn filterable_attrs() -> impl Iterator<Item = &'static str> {
    ATTRIBUTES
        .iter()
        .filter(|spec| spec.filterable)
        .map(|spec| spec.name)
}

/// Names of attributes searched when no explicit search fields are given.
pub fn default_search_attrs() -> impl Iterator<Item = &'static str> {
    ATTRIBUTES
        .iter()
        .filter(|spec| spec.searchable)
        .map(|spec| spec.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_names_are_unique() {
        for (i, a) in ATTRIBUTES.iter().enumerate() {
            for b in &ATTRIBUTES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn default_search_fields() {
        let attrs: Vec<_> = default_search_attrs().collect();
        assert_eq!(attrs, vec!["title", "description", "artist"]);
    }

    #[test]
    fn facets_include_the_filter_bar() {
        let attrs: Vec<_> = filterable_attrs().collect();
        for name in ["artist", "condition", "creator", "currency", "year"] {
            assert!(attrs.contains(&name), "{} should be filterable", name);
        }
        assert!(!attrs.contains(&"quantity"));
    }

    #[test]
    fn lookup_kinds() {
        assert_eq!(get_spec("quantity").unwrap().kind, AttributeKind::Number);
        assert_eq!(
            get_spec("acquisition_date").unwrap().kind,
            AttributeKind::Date
        );
        assert!(get_spec("nope").is_none());
    }
}
