use super::KvStore;
use crate::error::{BillzError, Result};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail, simulating a denied or full backend.
    pub fn deny_writes(&mut self) {
        self.fail_writes = true;
    }
}

impl KvStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(BillzError::Store("Storage access denied".to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.fail_writes {
            return Err(BillzError::Store("Storage access denied".to_string()));
        }
        self.values.remove(key);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Draft, Invoice, LineItem, Status};
    use crate::repo;
    use chrono::{NaiveDate, Utc};

    pub fn invoice(id: &str, date: NaiveDate, items: Vec<LineItem>) -> Invoice {
        let mut draft = Draft::new(date);
        draft.items = items;
        draft.into_invoice(id.to_string(), Utc::now())
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_invoice(mut self, id: &str, date: NaiveDate, amount: f64) -> Self {
            let inv = invoice(id, date, vec![LineItem::new("Work", amount, 1.0)]);
            repo::upsert(&mut self.store, inv).unwrap();
            self
        }

        pub fn with_paid_invoice(mut self, id: &str, date: NaiveDate, amount: f64) -> Self {
            let mut inv = invoice(id, date, vec![LineItem::new("Work", amount, 1.0)]);
            inv.status = Some(Status::Paid);
            repo::upsert(&mut self.store, inv).unwrap();
            self
        }
    }
}
