//! CRUD over the stored invoice collection.
//!
//! The backing store holds the whole collection as one JSON array under a
//! single key, rewritten wholesale on every mutation. There is no partial
//! update in the backing store, so every writer goes read-modify-write.

use crate::error::{BillzError, Result};
use crate::model::{Invoice, Status};
use crate::store::{keys, KvStore};

/// All stored invoices, in stored order.
///
/// Missing, unreadable or corrupt storage yields an empty collection; the
/// repository never propagates a read failure.
pub fn list<S: KvStore>(store: &S) -> Vec<Invoice> {
    let raw = match store.get(keys::INVOICES) {
        Ok(Some(raw)) => raw,
        _ => return Vec::new(),
    };
    serde_json::from_str(&raw).unwrap_or_default()
}

pub fn find_by_id<S: KvStore>(store: &S, id: &str) -> Option<Invoice> {
    list(store).into_iter().find(|inv| inv.id == id)
}

/// Replace the record with a matching id in place, or append.
pub fn upsert<S: KvStore>(store: &mut S, invoice: Invoice) -> Result<()> {
    let mut invoices = list(store);
    match invoices.iter_mut().find(|inv| inv.id == invoice.id) {
        Some(existing) => *existing = invoice,
        None => invoices.push(invoice),
    }
    write_all(store, &invoices)
}

/// Remove the record with the given id. Returns whether anything matched.
pub fn remove<S: KvStore>(store: &mut S, id: &str) -> Result<bool> {
    let invoices = list(store);
    let before = invoices.len();
    let remaining: Vec<Invoice> = invoices.into_iter().filter(|inv| inv.id != id).collect();
    if remaining.len() == before {
        return Ok(false);
    }
    write_all(store, &remaining)?;
    Ok(true)
}

pub fn clear<S: KvStore>(store: &mut S) -> Result<()> {
    write_all(store, &[])
}

/// Set the status of one record, returning the updated record.
pub fn set_status<S: KvStore>(store: &mut S, id: &str, status: Status) -> Result<Invoice> {
    let mut invoices = list(store);
    let target = invoices
        .iter_mut()
        .find(|inv| inv.id == id)
        .ok_or_else(|| BillzError::InvoiceNotFound(id.to_string()))?;
    target.status = Some(status);
    let updated = target.clone();
    write_all(store, &invoices)?;
    Ok(updated)
}

fn write_all<S: KvStore>(store: &mut S, invoices: &[Invoice]) -> Result<()> {
    let raw = serde_json::to_string(invoices)?;
    store.set(keys::INVOICES, &raw)
}
