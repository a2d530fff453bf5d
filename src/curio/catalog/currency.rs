//! ISO 4217 currency reference table.
//!
//! The currency facet offers every code in this table, not only the ones that
//! occur in the collection, so a buyer can pre-select a currency before any item
//! uses it.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::facets::{build_options, FacetOption, OptionOrder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

const fn currency(code: &'static str, symbol: &'static str, name: &'static str) -> Currency {
    Currency { code, symbol, name }
}

pub const CURRENCIES: &[Currency] = &[
    currency("USD", "$", "US Dollar"),
    currency("EUR", "€", "Euro"),
    currency("GBP", "£", "Pound Sterling"),
    currency("JPY", "¥", "Yen"),
    currency("CHF", "CHF", "Swiss Franc"),
    currency("CAD", "CA$", "Canadian Dollar"),
    currency("AUD", "A$", "Australian Dollar"),
    currency("NZD", "NZ$", "New Zealand Dollar"),
    currency("CNY", "CN¥", "Yuan Renminbi"),
    currency("HKD", "HK$", "Hong Kong Dollar"),
    currency("SGD", "S$", "Singapore Dollar"),
    currency("INR", "₹", "Indian Rupee"),
    currency("KRW", "₩", "Won"),
    currency("SEK", "kr", "Swedish Krona"),
    currency("NOK", "kr", "Norwegian Krone"),
    currency("DKK", "kr", "Danish Krone"),
    currency("PLN", "zł", "Zloty"),
    currency("CZK", "Kč", "Czech Koruna"),
    currency("HUF", "Ft", "Forint"),
    currency("RUB", "₽", "Russian Ruble"),
    currency("TRY", "₺", "Turkish Lira"),
    currency("ILS", "₪", "New Israeli Sheqel"),
    currency("AED", "AED", "UAE Dirham"),
    currency("ZAR", "R", "Rand"),
    currency("BRL", "R$", "Brazilian Real"),
    currency("MXN", "MX$", "Mexican Peso"),
    currency("ARS", "AR$", "Argentine Peso"),
    currency("THB", "฿", "Baht"),
];

static BY_CODE: Lazy<HashMap<&'static str, &'static Currency>> =
    Lazy::new(|| CURRENCIES.iter().map(|c| (c.code, c)).collect());

/// Looks up a currency by its ISO code (exact, upper-case).
pub fn lookup(code: &str) -> Option<&'static Currency> {
    BY_CODE.get(code).copied()
}

/// The display symbol for `code`, or `None` for codes outside the table.
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    lookup(code).map(|c| c.symbol)
}

/// Options for the currency facet: every code, alphabetical, labelled
/// `"EUR (€)"`.
pub fn currency_options() -> Vec<FacetOption> {
    build_options(CURRENCIES.iter().map(|c| c.code), OptionOrder::Alphabetical)
        .into_iter()
        .map(|option| {
            let label = match currency_symbol(&option.id) {
                Some(symbol) if symbol != option.id => format!("{} ({})", option.id, symbol),
                _ => option.id.clone(),
            };
            FacetOption::with_label(option.id, label)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique_iso_shaped() {
        assert_eq!(BY_CODE.len(), CURRENCIES.len());
        for c in CURRENCIES {
            assert_eq!(c.code.len(), 3);
            assert!(c.code.chars().all(|ch| ch.is_ascii_uppercase()));
        }
    }

    #[test]
    fn symbol_lookup() {
        assert_eq!(currency_symbol("EUR"), Some("€"));
        assert_eq!(currency_symbol("eur"), None);
        assert_eq!(currency_symbol("XYZ"), None);
    }

    #[test]
    fn options_are_sorted_and_labelled() {
        let options = currency_options();
        assert_eq!(options.len(), CURRENCIES.len());
        let ids: Vec<_> = options.iter().map(|o| o.id.as_str()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);

        let eur = options.iter().find(|o| o.id == "EUR").unwrap();
        assert_eq!(eur.display_name, "EUR (€)");
        let chf = options.iter().find(|o| o.id == "CHF").unwrap();
        assert_eq!(chf.display_name, "CHF");
    }
}
