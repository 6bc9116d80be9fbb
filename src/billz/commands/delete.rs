use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::repo;
use crate::store::KvStore;

pub fn run<S: KvStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if repo::remove(store, id)? {
        result.add_message(CmdMessage::success(format!("Deleted invoice {}", id)));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "No invoice with id {} in history",
            id
        )));
    }
    Ok(result)
}
