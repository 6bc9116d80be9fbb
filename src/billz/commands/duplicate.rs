use chrono::{NaiveDate, Utc};

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BillzError, Result};
use crate::model::Draft;
use crate::numbering;
use crate::repo;
use crate::store::KvStore;

/// Clone an existing invoice as a new record: today's date, a freshly
/// generated id, everything else carried over. The clone stays local; it is
/// synced like any other invoice the next time it is explicitly saved.
pub fn run<S: KvStore>(store: &mut S, id: &str, today: NaiveDate) -> Result<CmdResult> {
    let source = repo::find_by_id(store, id)
        .ok_or_else(|| BillzError::InvoiceNotFound(id.to_string()))?;

    let mut draft = Draft::from(source);
    draft.date = today;

    let new_id = numbering::next_id(&repo::list(store), today);
    let clone = draft.into_invoice(new_id, Utc::now());

    let mut result = CmdResult::default();
    if let Err(e) = repo::upsert(store, clone.clone()) {
        result.add_message(CmdMessage::error(format!(
            "Could not save duplicate: {}",
            e
        )));
        return Ok(result);
    }

    result.add_message(CmdMessage::success(format!(
        "Duplicated {} as {}",
        id, clone.id
    )));
    Ok(result.with_affected_invoices(vec![clone]))
}
