use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ItemSource;
use crate::validation::{ValidationSpec, WarningItem};

pub fn run<S: ItemSource>(source: &S) -> Result<CmdResult> {
    let spec = ValidationSpec::decor_item();
    let warnings: Vec<WarningItem> = source
        .items()?
        .iter()
        .filter_map(|item| WarningItem::check(item, &spec))
        .collect();

    let mut result = CmdResult::default();
    if warnings.is_empty() {
        result.add_message(CmdMessage::success("All items are complete."));
    }
    Ok(result.with_warnings(warnings))
}
