//! # Domain Model: Decor Items
//!
//! This module defines [`Item`], the record behind every row of the collection,
//! and [`YearPeriod`], the one field the API delivers either as text or as a
//! number.
//!
//! ## Field Presence
//!
//! The collection API is loose about absent fields. Missing or `null` text
//! fields deserialize as empty strings, missing `year_period` and `quantity` as
//! `None`. A quantity sent as text that holds no number is `None` as well, so a
//! sloppy record is reported as incomplete rather than failing the whole load.
//! Whether a field counts as "filled in" is decided by the validation rules in
//! [`crate::validation`], not here.
//!
//! ## Price Normalization
//!
//! `price` is typed by hand in forms (`"1.200,50"`, `"€ 40"`). It passes through
//! [`normalize`](crate::normalize::normalize) whenever it is deserialized or set,
//! so stored prices are always a canonical decimal string.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::attributes::AttrValue;
use crate::normalize::{normalize, parse_number};

/// The year or period an item dates from.
///
/// Older records store a plain year number; newer ones allow free text such as
/// `"circa 1920"` or `"Art Deco"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearPeriod {
    Number(f64),
    Text(String),
}

impl fmt::Display for YearPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearPeriod::Number(n) => write!(f, "{}", n),
            YearPeriod::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default = "Uuid::new_v4", deserialize_with = "deserialize_id")]
    pub id: Uuid,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub artist: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub creator: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub condition: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub subcategory: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub house: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub room: String,
    #[serde(default, alias = "yearPeriod")]
    pub year_period: Option<YearPeriod>,
    #[serde(default, alias = "acquisitionDate", deserialize_with = "deserialize_text")]
    pub acquisition_date: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub currency: String,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: String,
    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub quantity: Option<f64>,
}

/// A field the API sends as a JSON number on some records and as text on others.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Number(f64),
    Text(String),
}

impl RawScalar {
    fn into_text(self) -> String {
        match self {
            RawScalar::Number(n) => n.to_string(),
            RawScalar::Text(s) => s,
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Uuid>::deserialize(deserializer)?.unwrap_or_else(Uuid::new_v4))
}

/// `null` reads as empty; numbers keep their display form.
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawScalar>::deserialize(deserializer)?
        .map(RawScalar::into_text)
        .unwrap_or_default())
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawScalar>::deserialize(deserializer)?
        .map(|raw| normalize(&raw.into_text()))
        .unwrap_or_default())
}

/// Text quantities are parsed with their sign; text with no number in it reads
/// as absent, so the item shows up as incomplete instead of failing the load.
fn deserialize_quantity<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawScalar>::deserialize(deserializer)? {
        Some(RawScalar::Number(n)) => Some(n),
        Some(RawScalar::Text(s)) => parse_number(&s),
        None => None,
    })
}

impl Item {
    /// Creates an item with only a title; every other field is empty.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            artist: String::new(),
            creator: String::new(),
            condition: String::new(),
            category: String::new(),
            subcategory: String::new(),
            house: String::new(),
            room: String::new(),
            year_period: None,
            acquisition_date: String::new(),
            currency: String::new(),
            price: String::new(),
            quantity: None,
        }
    }

    /// Get an attribute value by name.
    ///
    /// Returns `None` for unknown names and for absent optional fields
    /// (`year`, `quantity`). Text fields are always returned, possibly empty.
    ///
    /// | Name | Type |
    /// |------|------|
    /// | `"title"`, `"description"`, `"artist"`, `"creator"`, `"condition"` | `Text` |
    /// | `"category"`, `"subcategory"`, `"house"`, `"room"` | `Text` |
    /// | `"year"` | `Text` or `Number` |
    /// | `"acquisition_date"`, `"currency"`, `"price"` | `Text` |
    /// | `"quantity"` | `Number` |
    pub fn get_attr(&self, name: &str) -> Option<AttrValue> {
        let text = |s: &String| Some(AttrValue::Text(s.clone()));
        match name {
            "title" => text(&self.title),
            "description" => text(&self.description),
            "artist" => text(&self.artist),
            "creator" => text(&self.creator),
            "condition" => text(&self.condition),
            "category" => text(&self.category),
            "subcategory" => text(&self.subcategory),
            "house" => text(&self.house),
            "room" => text(&self.room),
            "year" => self.year_period.as_ref().map(|y| match y {
                YearPeriod::Number(n) => AttrValue::Number(*n),
                YearPeriod::Text(s) => AttrValue::Text(s.clone()),
            }),
            "acquisition_date" => text(&self.acquisition_date),
            "currency" => text(&self.currency),
            "price" => text(&self.price),
            "quantity" => self.quantity.map(AttrValue::Number),
            _ => None,
        }
    }

    /// Set an attribute value by name.
    ///
    /// Numbers given for text fields are stored in their display form; text given
    /// for `quantity` is parsed with its sign kept. Returns `false` when the name
    /// is unknown or the value cannot be stored.
    pub fn set_attr(&mut self, name: &str, value: AttrValue) -> bool {
        let as_string = value.to_string();
        let slot = match name {
            "title" => &mut self.title,
            "description" => &mut self.description,
            "artist" => &mut self.artist,
            "creator" => &mut self.creator,
            "condition" => &mut self.condition,
            "category" => &mut self.category,
            "subcategory" => &mut self.subcategory,
            "house" => &mut self.house,
            "room" => &mut self.room,
            "acquisition_date" => &mut self.acquisition_date,
            "currency" => &mut self.currency,
            "price" => {
                self.price = normalize(&as_string);
                return true;
            }
            "year" => {
                self.year_period = Some(match value {
                    AttrValue::Number(n) => YearPeriod::Number(n),
                    AttrValue::Text(s) => YearPeriod::Text(s),
                });
                return true;
            }
            "quantity" => {
                let parsed = match value {
                    AttrValue::Number(n) => Some(n),
                    AttrValue::Text(s) => parse_number(&s),
                };
                return match parsed {
                    Some(n) => {
                        self.quantity = Some(n);
                        true
                    }
                    None => false,
                };
            }
            _ => return false,
        };
        *slot = as_string;
        true
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// An item with every validated field filled in.
    pub fn complete_item(title: &str) -> Item {
        let mut item = Item::new(title);
        item.artist = "Unknown Workshop".into();
        item.category = "Ceramic".into();
        item.subcategory = "Vessel".into();
        item.house = "Main House".into();
        item.room = "Hall".into();
        item.year_period = Some(YearPeriod::Number(1920.0));
        item.acquisition_date = "2019-05-04".into();
        item.quantity = Some(1.0);
        item
    }

    /// A complete item with the given artist.
    pub fn item_by(title: &str, artist: &str) -> Item {
        let mut item = complete_item(title);
        item.artist = artist.into();
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_sparse_record() {
        let item: Item = serde_json::from_str(r#"{"title": "Vase"}"#).unwrap();
        assert_eq!(item.title, "Vase");
        assert_eq!(item.artist, "");
        assert_eq!(item.year_period, None);
        assert_eq!(item.quantity, None);
    }

    #[test]
    fn year_accepts_number_or_text() {
        let a: Item = serde_json::from_str(r#"{"year_period": 1920}"#).unwrap();
        let b: Item = serde_json::from_str(r#"{"yearPeriod": "circa 1920"}"#).unwrap();
        assert_eq!(a.year_period, Some(YearPeriod::Number(1920.0)));
        assert_eq!(b.year_period, Some(YearPeriod::Text("circa 1920".into())));
        assert_eq!(a.get_attr("year").unwrap().to_string(), "1920");
    }

    #[test]
    fn price_is_normalized_on_deserialize() {
        let item: Item = serde_json::from_str(r#"{"price": "€ 1,5"}"#).unwrap();
        assert_eq!(item.price, "1.5");
        let item: Item = serde_json::from_str(r#"{"price": 40}"#).unwrap();
        assert_eq!(item.price, "40");
    }

    #[test]
    fn get_attr_unknown_is_none() {
        assert!(Item::new("A").get_attr("colour").is_none());
        assert!(Item::new("A").get_attr("quantity").is_none());
    }

    #[test]
    fn set_attr_round_trips_through_get_attr() {
        let mut item = Item::new("A");
        assert!(item.set_attr("artist", "Hokusai".into()));
        assert!(item.set_attr("quantity", "2,0".into()));
        assert!(item.set_attr("year", AttrValue::Number(1830.0)));
        assert_eq!(item.get_attr("artist"), Some(AttrValue::from("Hokusai")));
        assert_eq!(item.quantity, Some(2.0));
        assert_eq!(item.year_period, Some(YearPeriod::Number(1830.0)));
    }

    #[test]
    fn set_attr_keeps_quantity_sign() {
        use crate::validation::{find_missing, ValidationSpec};

        let mut item = fixtures::complete_item("Vase");
        assert!(item.set_attr("quantity", "-2".into()));
        assert_eq!(item.quantity, Some(-2.0));
        assert_eq!(
            find_missing(&item, &ValidationSpec::decor_item()),
            vec!["Quantity"]
        );
    }

    #[test]
    fn null_text_fields_read_as_empty() {
        let item: Item =
            serde_json::from_str(r#"{"title": "Vase", "artist": null, "room": null, "id": null}"#)
                .unwrap();
        assert_eq!(item.artist, "");
        assert_eq!(item.room, "");
    }

    #[test]
    fn numbers_in_text_fields_keep_display_form() {
        let item: Item = serde_json::from_str(r#"{"title": 1984, "house": 2}"#).unwrap();
        assert_eq!(item.title, "1984");
        assert_eq!(item.house, "2");
    }

    #[test]
    fn quantity_accepts_text() {
        let item: Item = serde_json::from_str(r#"{"quantity": "2"}"#).unwrap();
        assert_eq!(item.quantity, Some(2.0));
        let item: Item = serde_json::from_str(r#"{"quantity": "-1"}"#).unwrap();
        assert_eq!(item.quantity, Some(-1.0));
        let item: Item = serde_json::from_str(r#"{"quantity": "a few"}"#).unwrap();
        assert_eq!(item.quantity, None);
        let item: Item = serde_json::from_str(r#"{"quantity": null}"#).unwrap();
        assert_eq!(item.quantity, None);
    }

    #[test]
    fn set_attr_rejects_unknown_and_bad_quantity() {
        let mut item = Item::new("A");
        assert!(!item.set_attr("colour", "red".into()));
        assert!(!item.set_attr("quantity", "lots".into()));
        assert_eq!(item.quantity, None);
    }
}
