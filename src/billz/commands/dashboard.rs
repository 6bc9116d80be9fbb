use chrono::NaiveDate;

use crate::commands::CmdResult;
use crate::dashboard;
use crate::error::Result;
use crate::repo;
use crate::store::KvStore;

pub fn run<S: KvStore>(store: &S, reference: NaiveDate) -> Result<CmdResult> {
    let invoices = repo::list(store);
    let revenue = dashboard::aggregate(&invoices, reference);
    Ok(CmdResult::default().with_revenue(revenue))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn reports_total_and_monthly_revenue() {
        let june = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        let may = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();
        let fixture = StoreFixture::new()
            .with_invoice("BL-25-06-01", june, 500.0)
            .with_invoice("BL-25-05-01", may, 300.0);

        let result = run(&fixture.store, june).unwrap();
        let revenue = result.revenue.unwrap();
        assert_eq!(revenue.total, 800.0);
        assert_eq!(revenue.monthly, 500.0);
    }
}
