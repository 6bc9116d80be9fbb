use crate::commands::CmdResult;
use crate::error::Result;
use crate::repo;
use crate::store::KvStore;

/// List stored invoices, newest first, optionally filtered by a
/// case-insensitive match on id or client name.
pub fn run<S: KvStore>(store: &S, filter: Option<&str>) -> Result<CmdResult> {
    let mut invoices = repo::list(store);
    invoices.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));

    if let Some(term) = filter {
        let term = term.to_lowercase();
        invoices.retain(|inv| {
            inv.id.to_lowercase().contains(&term)
                || inv.client_name.to_lowercase().contains(&term)
        });
    }

    Ok(CmdResult::default().with_listed_invoices(invoices))
}
