//! Best-effort mirror of saved invoices to an external spreadsheet endpoint.
//!
//! The transport is one-way by contract: the summary is POSTed form-encoded
//! and the response body is never read. There is no retry or backoff. A
//! failure here is surfaced to the user as a warning and never affects the
//! local persistence outcome, which has already completed by the time the
//! notifier runs.

use serde::Serialize;
use std::time::Duration;

use crate::error::{BillzError, Result};
use crate::model::{Invoice, Status};

/// Flattened one-row view of an invoice, shaped for the spreadsheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncSummary {
    pub id: String,
    pub date: String,
    #[serde(rename = "clientName")]
    pub client_name: String,
    pub amount: f64,
    pub status: Status,
    pub items: String,
}

impl SyncSummary {
    pub fn from_invoice(invoice: &Invoice) -> Self {
        let amount = invoice.grand_total.unwrap_or_else(|| invoice.items_total());
        let items = invoice
            .items
            .iter()
            .map(|i| format!("{} ({})", i.name, i.quantity))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            id: invoice.id.clone(),
            date: invoice.date.to_string(),
            client_name: invoice.client_name.clone(),
            amount,
            status: invoice.display_status(),
            items,
        }
    }
}

/// One-way notification channel. There is no return payload by design.
pub trait Notifier {
    fn notify(&self, endpoint: &str, summary: &SyncSummary) -> Result<()>;
}

/// Production notifier: blocking form-encoded POST, response ignored.
pub struct SheetNotifier {
    client: reqwest::blocking::Client,
}

impl SheetNotifier {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();
        Self { client }
    }
}

impl Default for SheetNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for SheetNotifier {
    fn notify(&self, endpoint: &str, summary: &SyncSummary) -> Result<()> {
        self.client
            .post(endpoint)
            .form(summary)
            .send()
            .map_err(|e| BillzError::Sync(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Draft, LineItem};
    use chrono::{NaiveDate, Utc};

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    #[test]
    fn summary_prefers_persisted_grand_total() {
        let mut draft = Draft::new(june(5));
        draft.client_name = "Acme".into();
        draft.items = vec![LineItem::new("Design", 1000.0, 1.0)];
        draft.tax_rate_percent = 10.0;
        let inv = draft.into_invoice("BL-25-06-01".into(), Utc::now());

        let summary = SyncSummary::from_invoice(&inv);
        assert_eq!(summary.amount, 1100.0);
        assert_eq!(summary.date, "2025-06-05");
        assert_eq!(summary.client_name, "Acme");
    }

    #[test]
    fn summary_falls_back_to_item_sum_without_snapshot() {
        let mut inv = Draft::new(june(5)).into_invoice("BL-25-06-01".into(), Utc::now());
        inv.items = vec![LineItem::new("Design", 400.0, 2.0)];
        inv.grand_total = None;

        let summary = SyncSummary::from_invoice(&inv);
        assert_eq!(summary.amount, 800.0);
    }

    #[test]
    fn summary_defaults_unset_status_to_pending() {
        let inv = Draft::new(june(1)).into_invoice("BL-25-06-01".into(), Utc::now());
        assert_eq!(inv.status, None);
        assert_eq!(SyncSummary::from_invoice(&inv).status, Status::Pending);
    }

    #[test]
    fn summary_lists_items_as_name_and_quantity() {
        let mut draft = Draft::new(june(1));
        draft.items = vec![
            LineItem::new("Design", 500.0, 1.0),
            LineItem::new("Hosting", 100.0, 3.0),
        ];
        let inv = draft.into_invoice("BL-25-06-01".into(), Utc::now());

        let summary = SyncSummary::from_invoice(&inv);
        assert_eq!(summary.items, "Design (1), Hosting (3)");
    }
}
