use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::repo;
use crate::store::KvStore;

/// Wipe the invoice history. Confirmation is the caller's job; the command
/// itself is unconditional.
pub fn run<S: KvStore>(store: &mut S) -> Result<CmdResult> {
    let count = repo::list(store).len();
    let mut result = CmdResult::default();

    if let Err(e) = repo::clear(store) {
        result.add_message(CmdMessage::error(format!("Could not clear history: {}", e)));
        return Ok(result);
    }

    result.add_message(CmdMessage::success(format!(
        "Cleared {} invoice(s) from history",
        count
    )));
    Ok(result)
}
