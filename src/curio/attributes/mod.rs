//! # Attribute System
//!
//! Search fields, facets and validation rules all refer to item fields by name.
//! This module is the shared vocabulary for that:
//!
//! - **Values**: [`AttrValue`], the text-or-number view of a field
//! - **Specifications**: [`ATTRIBUTES`], which fields exist, which are searchable,
//!   which can be used as facets
//! - **Access**: `Item::get_attr(name)` in [`crate::model`]
//!
//! ## Attribute Kinds
//!
//! | Kind | Examples | Description |
//! |------|----------|-------------|
//! | `Text` | `title`, `artist`, `year` | Free text, trimmed for presence checks |
//! | `Number` | `quantity` | Must be positive to count as present |
//! | `Date` | `acquisition_date` | Text, no format validation |
//!
//! ## Usage
//!
//! ```ignore
//! let value = item.get_attr("artist");
//! let facets: Vec<_> = filterable_attrs().collect();
//! ```

mod spec;
mod value;

pub use spec::{
    default_search_attrs, filterable_attrs, get_spec, AttributeKind, AttributeSpec, ATTRIBUTES,
};
pub use value::AttrValue;
