use chrono::{Datelike, NaiveDate};

use crate::model::Invoice;

/// Revenue figures shown on the history dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Revenue {
    pub total: f64,
    pub monthly: f64,
}

/// Aggregate revenue across all invoices.
///
/// Both figures use the raw item sums, not the persisted `grand_total`
/// snapshot, so the dashboard ignores tax and discount while the saved
/// record and exports reflect them. That inconsistency is inherited from the
/// original behavior on purpose; see DESIGN.md before changing it.
pub fn aggregate(invoices: &[Invoice], reference: NaiveDate) -> Revenue {
    let mut revenue = Revenue::default();

    for inv in invoices {
        let items_total = inv.items_total();
        revenue.total += items_total;
        if inv.date.month() == reference.month() && inv.date.year() == reference.year() {
            revenue.monthly += items_total;
        }
    }

    revenue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Draft, LineItem};
    use chrono::Utc;

    fn invoice(id: &str, date: NaiveDate, amount: f64) -> Invoice {
        let mut draft = Draft::new(date);
        draft.items = vec![LineItem::new("Work", amount, 1.0)];
        draft.into_invoice(id.to_string(), Utc::now())
    }

    #[test]
    fn monthly_revenue_is_scoped_to_reference_month() {
        let june = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        let may = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();
        let invoices = vec![invoice("BL-25-06-01", june, 500.0), invoice("BL-25-05-01", may, 300.0)];

        let rev = aggregate(&invoices, NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());
        assert_eq!(rev.total, 800.0);
        assert_eq!(rev.monthly, 500.0);
    }

    #[test]
    fn same_month_of_other_year_is_excluded() {
        let june_24 = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        let invoices = vec![invoice("BL-24-06-01", june_24, 400.0)];

        let rev = aggregate(&invoices, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(rev.total, 400.0);
        assert_eq!(rev.monthly, 0.0);
    }

    #[test]
    fn revenue_ignores_tax_and_discount_snapshot() {
        let june = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        let mut draft = Draft::new(june);
        draft.items = vec![LineItem::new("Work", 1000.0, 1.0)];
        draft.tax_rate_percent = 18.0;
        draft.discount_amount = 500.0;
        let inv = draft.into_invoice("BL-25-06-01".into(), Utc::now());
        assert_eq!(inv.grand_total, Some(680.0));

        let rev = aggregate(&[inv], june);
        assert_eq!(rev.total, 1000.0);
    }

    #[test]
    fn empty_history_aggregates_to_zero() {
        let rev = aggregate(&[], NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(rev, Revenue::default());
    }
}
