use crate::attributes::get_spec;
use crate::catalog::currency_options;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CurioError, Result};
use crate::facets::{options_for_attr, FacetOption, LabelStyle, OptionCache, OptionOrder};
use crate::model::Item;
use crate::store::ItemSource;

/// How each facet orders and labels its options.
///
/// Catalog-like facets sort; facets derived from free text keep the order the
/// values appear in the collection.
pub fn facet_layout(attr: &str) -> (OptionOrder, LabelStyle) {
    match attr {
        "condition" => (OptionOrder::Alphabetical, LabelStyle::TitleCase),
        "currency" => (OptionOrder::Alphabetical, LabelStyle::Raw),
        _ => (OptionOrder::FirstSeen, LabelStyle::Raw),
    }
}

/// Whether `attr` can be offered as a facet.
pub fn is_facet(attr: &str) -> bool {
    get_spec(attr).is_some_and(|spec| spec.filterable)
}

pub fn run<S: ItemSource>(source: &S, cache: &mut OptionCache, attr: &str) -> Result<CmdResult> {
    if !is_facet(attr) {
        return Err(CurioError::InvalidFilter(format!("'{}' is not a facet", attr)));
    }

    let options = if attr == "currency" {
        currency_options()
    } else {
        let (order, style) = facet_layout(attr);
        cache
            .try_get_or_build(source.version(), attr, || {
                let items = source.items()?;
                Ok::<_, CurioError>(options_for_attr(&items, attr, order, style))
            })?
            .to_vec()
    };

    let mut result = CmdResult::default();
    if options.is_empty() {
        result.add_message(CmdMessage::info(format!("No values for {} yet.", attr)));
    }
    Ok(result.with_options(options))
}

/// Options for `attr` when the items are already loaded.
pub(crate) fn options_from_items(
    items: &[Item],
    version: u64,
    cache: &mut OptionCache,
    attr: &str,
) -> Vec<FacetOption> {
    if attr == "currency" {
        return currency_options();
    }
    let (order, style) = facet_layout(attr);
    cache
        .get_or_build(version, attr, || options_for_attr(items, attr, order, style))
        .to_vec()
}
