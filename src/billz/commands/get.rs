use crate::commands::CmdResult;
use crate::error::{BillzError, Result};
use crate::repo;
use crate::store::KvStore;

pub fn run<S: KvStore>(store: &S, id: &str) -> Result<CmdResult> {
    let invoice = repo::find_by_id(store, id)
        .ok_or_else(|| BillzError::InvoiceNotFound(id.to_string()))?;
    Ok(CmdResult::default().with_affected_invoices(vec![invoice]))
}
