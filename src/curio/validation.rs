//! Required-field validation for decor items.
//!
//! A [`ValidationSpec`] is an ordered list of rules, each pairing a display label
//! with an item attribute and a rule kind. Running a spec over an item yields the
//! labels of the rules that fail, always in declaration order so UI messages are
//! stable.
//!
//! Missing fields are data, not errors: nothing in this module returns `Result`.
//!
//! ## Rule Kinds
//!
//! - [`RuleKind::Text`]: fails if absent or empty after trimming
//! - [`RuleKind::Number`]: fails if absent, zero, negative or not a number
//! - [`RuleKind::Date`]: fails if absent or empty after trimming (the format is
//!   not checked)

use serde::Serialize;

use crate::attributes::AttrValue;
use crate::model::Item;
use crate::normalize::parse_number;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Text,
    Number,
    Date,
}

/// One required field: the label shown to users, the attribute it reads and how
/// presence is decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub label: String,
    pub attr: String,
    pub kind: RuleKind,
}

impl FieldRule {
    pub fn new(label: impl Into<String>, attr: impl Into<String>, kind: RuleKind) -> Self {
        Self {
            label: label.into(),
            attr: attr.into(),
            kind,
        }
    }

    /// Whether `item` satisfies this rule.
    pub fn passes(&self, item: &Item) -> bool {
        let Some(value) = item.get_attr(&self.attr) else {
            return false;
        };

        match self.kind {
            RuleKind::Text | RuleKind::Date => value.is_present(),
            RuleKind::Number => match value {
                AttrValue::Number(n) => n > 0.0,
                AttrValue::Text(s) => parse_number(&s).is_some_and(|n| n > 0.0),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationSpec {
    rules: Vec<FieldRule>,
}

impl ValidationSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, label: &str, attr: &str, kind: RuleKind) -> Self {
        self.rules.push(FieldRule::new(label, attr, kind));
        self
    }

    /// The fixed spec the collection warnings are computed with.
    pub fn decor_item() -> Self {
        Self::new()
            .rule("Title", "title", RuleKind::Text)
            .rule("Artist", "artist", RuleKind::Text)
            .rule("Category", "category", RuleKind::Text)
            .rule("Subcategory", "subcategory", RuleKind::Text)
            .rule("House", "house", RuleKind::Text)
            .rule("Room", "room", RuleKind::Text)
            .rule("Year", "year", RuleKind::Text)
            .rule("Date", "acquisition_date", RuleKind::Date)
            .rule("Quantity", "quantity", RuleKind::Number)
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Labels of the rules `item` fails, in the order `spec` declares them.
pub fn find_missing(item: &Item, spec: &ValidationSpec) -> Vec<String> {
    let mut missing: Vec<String> = Vec::new();
    for rule in spec.rules() {
        // A spec may list a label twice; report it once.
        if !rule.passes(item) && !missing.contains(&rule.label) {
            missing.push(rule.label.clone());
        }
    }
    missing
}

/// True if `item` fails at least one rule. Does not allocate labels.
pub fn is_incomplete(item: &Item, spec: &ValidationSpec) -> bool {
    spec.rules().iter().any(|rule| !rule.passes(item))
}

/// An item that failed validation, with the labels of what is missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarningItem {
    pub item: Item,
    pub missing_fields: Vec<String>,
}

impl WarningItem {
    /// Validates `item` and returns a warning if anything is missing.
    pub fn check(item: &Item, spec: &ValidationSpec) -> Option<Self> {
        let missing_fields = find_missing(item, spec);
        if missing_fields.is_empty() {
            None
        } else {
            Some(Self {
                item: item.clone(),
                missing_fields,
            })
        }
    }

    /// Human-readable summary, e.g. `Missing: Artist, Quantity`.
    pub fn message(&self) -> String {
        format!("Missing: {}", self.missing_fields.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::complete_item;
    use crate::model::YearPeriod;

    #[test]
    fn complete_item_has_nothing_missing() {
        let item = complete_item("Vase");
        let spec = ValidationSpec::decor_item();
        assert!(find_missing(&item, &spec).is_empty());
        assert!(!is_incomplete(&item, &spec));
    }

    #[test]
    fn missing_title_and_zero_quantity_in_declared_order() {
        let mut item = complete_item("");
        item.quantity = Some(0.0);

        let missing = find_missing(&item, &ValidationSpec::decor_item());
        assert_eq!(missing, vec!["Title", "Quantity"]);
    }

    #[test]
    fn order_follows_declaration_not_field_layout() {
        let mut item = complete_item("Vase");
        item.quantity = None;
        item.room = String::new();
        item.artist = "  ".into();

        let missing = find_missing(&item, &ValidationSpec::decor_item());
        assert_eq!(missing, vec!["Artist", "Room", "Quantity"]);
    }

    #[test]
    fn negative_quantity_fails() {
        let mut item = complete_item("Vase");
        item.quantity = Some(-2.0);
        assert_eq!(
            find_missing(&item, &ValidationSpec::decor_item()),
            vec!["Quantity"]
        );
    }

    #[test]
    fn numeric_year_counts_as_present() {
        let mut item = complete_item("Vase");
        item.year_period = Some(YearPeriod::Number(1920.0));
        assert!(!is_incomplete(&item, &ValidationSpec::decor_item()));

        item.year_period = Some(YearPeriod::Text("   ".into()));
        assert_eq!(
            find_missing(&item, &ValidationSpec::decor_item()),
            vec!["Year"]
        );
    }

    #[test]
    fn date_is_not_format_checked() {
        let mut item = complete_item("Vase");
        item.acquisition_date = "sometime last spring".into();
        assert!(!is_incomplete(&item, &ValidationSpec::decor_item()));
    }

    #[test]
    fn number_rule_parses_text_values() {
        let spec = ValidationSpec::new().rule("Price", "price", RuleKind::Number);
        let mut item = Item::new("A");
        assert_eq!(find_missing(&item, &spec), vec!["Price"]);
        item.price = "12.50".into();
        assert!(find_missing(&item, &spec).is_empty());
    }

    #[test]
    fn negative_text_fails_number_rule() {
        let spec = ValidationSpec::new().rule("Year", "year", RuleKind::Number);
        let mut item = complete_item("Vase");
        item.year_period = Some(YearPeriod::Text("-5".into()));
        assert_eq!(find_missing(&item, &spec), vec!["Year"]);

        item.year_period = Some(YearPeriod::Text("5".into()));
        assert!(find_missing(&item, &spec).is_empty());
    }

    #[test]
    fn unknown_attribute_always_fails() {
        let spec = ValidationSpec::new().rule("Colour", "colour", RuleKind::Text);
        assert_eq!(find_missing(&complete_item("A"), &spec), vec!["Colour"]);
    }

    #[test]
    fn duplicate_labels_are_reported_once() {
        let spec = ValidationSpec::new()
            .rule("Title", "title", RuleKind::Text)
            .rule("Title", "title", RuleKind::Text);
        assert_eq!(find_missing(&Item::new(""), &spec), vec!["Title"]);
    }

    #[test]
    fn validation_does_not_mutate_item() {
        let item = Item::new(" ");
        let before = item.clone();
        let _ = find_missing(&item, &ValidationSpec::decor_item());
        assert_eq!(item, before);
    }

    #[test]
    fn warning_message() {
        let mut item = complete_item("Vase");
        item.artist.clear();
        let warning = WarningItem::check(&item, &ValidationSpec::decor_item()).unwrap();
        assert_eq!(warning.missing_fields, vec!["Artist"]);
        assert_eq!(warning.message(), "Missing: Artist");
        assert!(WarningItem::check(&complete_item("B"), &ValidationSpec::decor_item()).is_none());
    }
}
