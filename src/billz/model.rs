use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::totals::compute_totals;

/// One billable entry within an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default = "default_quantity")]
    pub quantity: f64,
}

fn default_quantity() -> f64 {
    1.0
}

impl Default for LineItem {
    fn default() -> Self {
        Self {
            name: String::new(),
            unit_price: 0.0,
            quantity: 1.0,
        }
    }
}

impl LineItem {
    pub fn new(name: impl Into<String>, unit_price: f64, quantity: f64) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pending,
    Paid,
}

impl Status {
    pub fn toggled(self) -> Self {
        match self {
            Status::Pending => Status::Paid,
            Status::Paid => Status::Pending,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pending => write!(f, "PENDING"),
            Status::Paid => write!(f, "PAID"),
        }
    }
}

/// A persisted invoice record.
///
/// The money fields (`subtotal`, `tax_amount`, `grand_total`) are snapshots
/// taken at save time so history stays stable even if the calculation rules
/// change later. They are optional on read: records restored from older
/// backups may not carry them, in which case consumers fall back to the
/// recomputed item sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub client_address: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default)]
    pub tax_rate_percent: f64,
    #[serde(default)]
    pub discount_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grand_total: Option<f64>,
    pub saved_at: DateTime<Utc>,
}

impl Invoice {
    /// Sum of raw line totals, independent of the persisted snapshot.
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(|i| i.line_total()).sum()
    }

    /// Status for display purposes; unset records count as pending.
    pub fn display_status(&self) -> Status {
        self.status.unwrap_or(Status::Pending)
    }
}

/// Editor state for an invoice that has not been stamped with an id yet.
///
/// The UI layer owns one of these and hands it to the save command, which
/// assigns the id, takes the totals snapshot and produces an [`Invoice`].
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub date: NaiveDate,
    pub client_name: String,
    pub client_address: String,
    pub items: Vec<LineItem>,
    pub status: Option<Status>,
    pub tax_rate_percent: f64,
    pub discount_amount: f64,
}

impl Draft {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            client_name: String::new(),
            client_address: String::new(),
            items: Vec::new(),
            status: None,
            tax_rate_percent: 0.0,
            discount_amount: 0.0,
        }
    }

    pub fn into_invoice(self, id: String, saved_at: DateTime<Utc>) -> Invoice {
        let totals = compute_totals(&self.items, self.tax_rate_percent, self.discount_amount);
        Invoice {
            id,
            date: self.date,
            client_name: self.client_name,
            client_address: self.client_address,
            items: self.items,
            status: self.status,
            tax_rate_percent: self.tax_rate_percent,
            discount_amount: self.discount_amount,
            subtotal: Some(totals.subtotal),
            tax_amount: Some(totals.tax_amount),
            grand_total: Some(totals.grand_total),
            saved_at,
        }
    }
}

impl From<Invoice> for Draft {
    fn from(inv: Invoice) -> Self {
        Self {
            date: inv.date,
            client_name: inv.client_name,
            client_address: inv.client_address,
            items: inv.items,
            status: inv.status,
            tax_rate_percent: inv.tax_rate_percent,
            discount_amount: inv.discount_amount,
        }
    }
}
