use chrono::NaiveDate;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::numbering;
use crate::repo;
use crate::store::KvStore;

/// Preview the id the next saved invoice would get for the given date.
pub fn run<S: KvStore>(store: &S, reference: NaiveDate) -> Result<CmdResult> {
    let next = numbering::next_id(&repo::list(store), reference);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Next invoice id: {}", next)));
    Ok(result.with_next_id(next))
}
