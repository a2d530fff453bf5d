//! # Reference Catalogs
//!
//! Option lists that do not come from the items themselves:
//!
//! - [`currency`]: the fixed ISO currency table behind the currency facet
//! - [`rooms`]: room types from an outside source, empty when unavailable

pub mod currency;
pub mod rooms;

pub use currency::{currency_options, currency_symbol, Currency, CURRENCIES};
pub use rooms::{room_types_or_empty, JsonRoomTypeSource, RoomType, RoomTypeSource, StaticRoomTypes};
