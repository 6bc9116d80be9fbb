use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BillzError, Result};
use crate::model::Invoice;
use crate::repo;
use crate::store::KvStore;

/// Export the invoice history as CSV, one row per invoice.
pub fn run<S: KvStore>(store: &S, out: Option<PathBuf>, today: NaiveDate) -> Result<CmdResult> {
    let invoices = repo::list(store);

    if invoices.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("No invoices to export."));
        return Ok(res);
    }

    let path = out.unwrap_or_else(|| PathBuf::from(format!("invoices_export_{}.csv", today)));
    let csv = build_csv(&invoices);
    fs::write(&path, csv).map_err(BillzError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} invoice(s) to {}",
        invoices.len(),
        path.display()
    )));
    Ok(result.with_export_path(path))
}

const CSV_HEADERS: [&str; 8] = [
    "Invoice ID",
    "Date",
    "Client Name",
    "Client Address",
    "Items",
    "Total Amount",
    "Status",
    "Created At",
];

fn build_csv(invoices: &[Invoice]) -> String {
    let mut lines = vec![CSV_HEADERS.join(",")];

    for inv in invoices {
        let item_summary = inv
            .items
            .iter()
            .map(|i| format!("{} ({}x{})", i.name, i.quantity, i.unit_price))
            .collect::<Vec<_>>()
            .join("; ");

        // The total column recomputes from items, matching the dashboard
        // rather than the saved snapshot.
        let row = [
            quote_field(&inv.id),
            inv.date.to_string(),
            quote_field(&inv.client_name),
            quote_field(&inv.client_address),
            quote_field(&item_summary),
            format!("{:.2}", inv.items_total()),
            inv.display_status().to_string(),
            inv.saved_at.to_rfc3339(),
        ];
        lines.push(row.join(","));
    }

    lines.join("\n")
}

/// Quote a field when it contains a separator, a quote or a line break,
/// doubling any inner quotes.
fn quote_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
