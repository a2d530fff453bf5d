use crate::catalog::{room_types_or_empty, RoomTypeSource};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Lists room types. An unreachable catalog yields an empty list, not an error.
pub fn run(source: &dyn RoomTypeSource) -> Result<CmdResult> {
    let rooms = room_types_or_empty(source);
    let mut result = CmdResult::default();
    if rooms.is_empty() {
        result.add_message(CmdMessage::info("No room types available."));
    }
    Ok(result.with_room_types(rooms))
}
