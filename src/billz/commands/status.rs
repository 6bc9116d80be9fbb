use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Status;
use crate::repo;
use crate::store::KvStore;

/// Set an invoice's status, or flip it when no explicit status is given.
/// An unset status counts as pending, so toggling an unset record marks it
/// paid.
pub fn run<S: KvStore>(store: &mut S, id: &str, status: Option<Status>) -> Result<CmdResult> {
    let new_status = match status {
        Some(s) => s,
        None => {
            let current = repo::find_by_id(store, id)
                .map(|inv| inv.display_status())
                .unwrap_or(Status::Pending);
            current.toggled()
        }
    };

    let updated = repo::set_status(store, id, new_status)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Invoice {} marked {}",
        updated.id, new_status
    )));
    Ok(result.with_affected_invoices(vec![updated]))
}
