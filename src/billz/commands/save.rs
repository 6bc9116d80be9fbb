use chrono::Utc;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BillzError, Result};
use crate::model::Draft;
use crate::numbering;
use crate::repo;
use crate::settings::Settings;
use crate::store::KvStore;
use crate::sync::{Notifier, SyncSummary};

/// Persist an invoice assembled from the given editor state.
///
/// When `id` is omitted the next monthly-scoped id is generated. A storage
/// write failure is reported as an error-level message, not a hard error:
/// the in-memory state is intact and the user decides what to do next. The
/// spreadsheet sync afterwards is best-effort and can only ever add warnings.
pub fn run<S: KvStore>(
    store: &mut S,
    notifier: &dyn Notifier,
    draft: Draft,
    id: Option<String>,
) -> Result<CmdResult> {
    let id = match id {
        Some(id) => {
            if id.trim().is_empty() {
                return Err(BillzError::Api("Invoice ID cannot be empty".into()));
            }
            id
        }
        None => numbering::next_id(&repo::list(store), draft.date),
    };

    let invoice = draft.into_invoice(id, Utc::now());

    let mut result = CmdResult::default();
    if let Err(e) = repo::upsert(store, invoice.clone()) {
        result.add_message(CmdMessage::error(format!(
            "Could not save invoice {}: {}",
            invoice.id, e
        )));
        return Ok(result);
    }

    result.add_message(CmdMessage::success(format!("Saved invoice {}", invoice.id)));

    // Local persistence has succeeded; nothing below may undo it.
    match Settings::load(store).sheet_url {
        Some(url) if !url.trim().is_empty() => {
            let summary = SyncSummary::from_invoice(&invoice);
            match notifier.notify(&url, &summary) {
                Ok(()) => result.add_message(CmdMessage::info("Synced to spreadsheet endpoint.")),
                Err(e) => result.add_message(CmdMessage::warning(format!(
                    "Sync failed ({}). Invoice is saved locally.",
                    e
                ))),
            }
        }
        _ => result.add_message(CmdMessage::info(
            "Sync skipped: no spreadsheet endpoint configured.",
        )),
    }

    Ok(result.with_affected_invoices(vec![invoice]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::LineItem;
    use crate::store::memory::InMemoryStore;
    use crate::store::keys;
    use chrono::NaiveDate;
    use std::cell::RefCell;

    struct RecordingNotifier {
        calls: RefCell<Vec<(String, SyncSummary)>>,
        fail: bool,
    }

    impl RecordingNotifier {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail: true,
            }
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, endpoint: &str, summary: &SyncSummary) -> crate::error::Result<()> {
            self.calls
                .borrow_mut()
                .push((endpoint.to_string(), summary.clone()));
            if self.fail {
                return Err(BillzError::Sync("connection refused".into()));
            }
            Ok(())
        }
    }

    fn draft() -> Draft {
        let mut d = Draft::new(NaiveDate::from_ymd_opt(2025, 6, 5).unwrap());
        d.client_name = "Acme".into();
        d.items = vec![LineItem::new("Design", 500.0, 1.0)];
        d
    }

    #[test]
    fn save_without_id_generates_the_next_one() {
        let mut store = InMemoryStore::new();
        let notifier = RecordingNotifier::new();

        let result = run(&mut store, &notifier, draft(), None).unwrap();
        assert_eq!(result.affected_invoices[0].id, "BL-25-06-01");

        let result = run(&mut store, &notifier, draft(), None).unwrap();
        assert_eq!(result.affected_invoices[0].id, "BL-25-06-02");
    }

    #[test]
    fn save_with_existing_id_replaces_the_record() {
        let mut store = InMemoryStore::new();
        let notifier = RecordingNotifier::new();

        run(&mut store, &notifier, draft(), Some("BL-25-06-07".into())).unwrap();
        let mut updated = draft();
        updated.client_name = "Globex".into();
        run(&mut store, &notifier, updated, Some("BL-25-06-07".into())).unwrap();

        let invoices = repo::list(&store);
        assert_eq!(invoices.len(), 1);
        assert_eq!(invoices[0].client_name, "Globex");
    }

    #[test]
    fn blank_id_is_rejected() {
        let mut store = InMemoryStore::new();
        let notifier = RecordingNotifier::new();
        let err = run(&mut store, &notifier, draft(), Some("  ".into())).unwrap_err();
        assert!(matches!(err, BillzError::Api(_)));
    }

    #[test]
    fn sync_is_skipped_with_a_notice_when_no_endpoint() {
        let mut store = InMemoryStore::new();
        let notifier = RecordingNotifier::new();

        let result = run(&mut store, &notifier, draft(), None).unwrap();
        assert!(notifier.calls.borrow().is_empty());
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("Sync skipped")));
    }

    #[test]
    fn sync_posts_summary_to_configured_endpoint() {
        let mut store = InMemoryStore::new();
        store
            .set(keys::SHEET_URL, "https://example.com/sheet")
            .unwrap();
        let notifier = RecordingNotifier::new();

        run(&mut store, &notifier, draft(), None).unwrap();

        let calls = notifier.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "https://example.com/sheet");
        assert_eq!(calls[0].1.amount, 500.0);
    }

    #[test]
    fn sync_failure_is_a_warning_and_the_save_stands() {
        let mut store = InMemoryStore::new();
        store
            .set(keys::SHEET_URL, "https://example.com/sheet")
            .unwrap();
        let notifier = RecordingNotifier::failing();

        let result = run(&mut store, &notifier, draft(), None).unwrap();
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning));
        assert_eq!(repo::list(&store).len(), 1);
    }

    #[test]
    fn storage_failure_is_an_error_message_not_a_panic() {
        let mut store = InMemoryStore::new();
        store.deny_writes();
        let notifier = RecordingNotifier::new();

        let result = run(&mut store, &notifier, draft(), None).unwrap();
        assert!(result.has_errors());
        assert!(result.affected_invoices.is_empty());
    }
}
