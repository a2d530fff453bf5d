use crate::commands::options::{is_facet, options_from_items};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::facets::OptionCache;
use crate::model::Item;
use crate::query::{query, QueryCriteria};
use crate::session::FilterSession;
use crate::store::ItemSource;

pub fn run<S: ItemSource>(source: &S, criteria: &QueryCriteria) -> Result<CmdResult> {
    let items = source.items()?;
    Ok(list(&items, criteria, CmdResult::default()))
}

/// Lists the items matching `session`, first dropping selected values that no
/// longer appear among their facet's options. Each dropped value is reported.
pub fn run_session<S: ItemSource>(
    source: &S,
    cache: &mut OptionCache,
    session: &mut FilterSession,
) -> Result<CmdResult> {
    let items = source.items()?;
    let version = source.version();
    let mut cmd = CmdResult::default();

    for attr in session.active_attrs() {
        if !is_facet(&attr) {
            continue;
        }
        let options = options_from_items(&items, version, cache, &attr);
        for id in session.prune_stale(&attr, &options) {
            cmd.add_message(CmdMessage::warning(format!(
                "Ignoring {} '{}': no item has that value",
                attr, id
            )));
        }
    }

    Ok(list(&items, &session.criteria(), cmd))
}

fn list(items: &[Item], criteria: &QueryCriteria, mut cmd: CmdResult) -> CmdResult {
    let result = query(items, criteria);

    if !criteria.is_unfiltered() {
        cmd.add_message(CmdMessage::info(format!(
            "{} of {} items match",
            result.filtered.len(),
            items.len()
        )));
    }
    if !result.warnings.is_empty() {
        cmd.add_message(CmdMessage::warning(format!(
            "{} incomplete {} in the collection (see `curio warnings`)",
            result.warnings.len(),
            if result.warnings.len() == 1 { "item" } else { "items" }
        )));
    }

    cmd.collection_size = items.len();
    cmd.with_listed_items(result.filtered)
        .with_warnings(result.warnings)
}
