//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as
//! the single entry point for all billz operations, regardless of the UI
//! being used.
//!
//! The facade dispatches to command functions and returns structured
//! `Result<CmdResult>` values; business logic lives in `commands/*.rs` and
//! presentation stays in the UI. `BillzApi<S: KvStore>` is generic over the
//! storage backend (production `FileStore`, `InMemoryStore` in tests), and
//! the sync notifier is injected so tests never touch the network.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::commands;
use crate::error::Result;
use crate::model::{Draft, Status};
use crate::store::KvStore;
use crate::sync::{Notifier, SheetNotifier};

pub struct BillzApi<S: KvStore> {
    store: S,
    notifier: Box<dyn Notifier>,
}

impl<S: KvStore> BillzApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            notifier: Box::new(SheetNotifier::new()),
        }
    }

    pub fn with_notifier(store: S, notifier: Box<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    pub fn save_invoice(&mut self, draft: Draft, id: Option<String>) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, self.notifier.as_ref(), draft, id)
    }

    pub fn list_invoices(&self, filter: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn get_invoice(&self, id: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, id)
    }

    pub fn duplicate_invoice(&mut self, id: &str, today: NaiveDate) -> Result<commands::CmdResult> {
        commands::duplicate::run(&mut self.store, id, today)
    }

    pub fn delete_invoice(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn clear_history(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store)
    }

    pub fn set_status(&mut self, id: &str, status: Option<Status>) -> Result<commands::CmdResult> {
        commands::status::run(&mut self.store, id, status)
    }

    pub fn next_invoice_id(&self, reference: NaiveDate) -> Result<commands::CmdResult> {
        commands::new::run(&self.store, reference)
    }

    pub fn dashboard(&self, reference: NaiveDate) -> Result<commands::CmdResult> {
        commands::dashboard::run(&self.store, reference)
    }

    pub fn export_csv(&self, out: Option<PathBuf>, today: NaiveDate) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, out, today)
    }

    pub fn backup(&self, out: Option<PathBuf>, today: NaiveDate) -> Result<commands::CmdResult> {
        commands::backup::export(&self.store, out, today)
    }

    pub fn restore(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::backup::import(&mut self.store, path)
    }

    pub fn config(&mut self, action: commands::settings::SettingsAction) -> Result<commands::CmdResult> {
        commands::settings::run(&mut self.store, action)
    }
}

pub use crate::commands::settings::SettingsAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result as BillzResult;
    use crate::model::LineItem;
    use crate::store::memory::InMemoryStore;
    use crate::sync::SyncSummary;

    struct NullNotifier;

    impl Notifier for NullNotifier {
        fn notify(&self, _endpoint: &str, _summary: &SyncSummary) -> BillzResult<()> {
            Ok(())
        }
    }

    fn api() -> BillzApi<InMemoryStore> {
        BillzApi::with_notifier(InMemoryStore::new(), Box::new(NullNotifier))
    }

    fn draft() -> Draft {
        let mut d = Draft::new(NaiveDate::from_ymd_opt(2025, 6, 5).unwrap());
        d.items = vec![LineItem::new("Design", 500.0, 1.0)];
        d
    }

    #[test]
    fn save_then_list_then_delete_flow() {
        let mut api = api();

        let saved = api.save_invoice(draft(), None).unwrap();
        let id = saved.affected_invoices[0].id.clone();

        let listed = api.list_invoices(None).unwrap();
        assert_eq!(listed.listed_invoices.len(), 1);

        api.delete_invoice(&id).unwrap();
        assert!(api.list_invoices(None).unwrap().listed_invoices.is_empty());
    }

    #[test]
    fn status_and_dashboard_dispatch() {
        let mut api = api();
        let saved = api.save_invoice(draft(), None).unwrap();
        let id = saved.affected_invoices[0].id.clone();

        let toggled = api.set_status(&id, None).unwrap();
        assert_eq!(toggled.affected_invoices[0].status, Some(Status::Paid));

        let reference = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let revenue = api.dashboard(reference).unwrap().revenue.unwrap();
        assert_eq!(revenue.monthly, 500.0);
    }
}
