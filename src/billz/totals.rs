use crate::model::LineItem;

/// Computed money figures for one invoice.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub subtotal: f64,
    pub tax_amount: f64,
    pub grand_total: f64,
}

/// Compute subtotal, tax and grand total for a set of line items.
///
/// Every item contributes to the subtotal regardless of whether its name or
/// price is empty; filtering blank rows is a display concern. Non-finite
/// numeric inputs are treated as zero. The grand total never goes below zero,
/// even when the discount exceeds subtotal plus tax.
pub fn compute_totals(items: &[LineItem], tax_rate_percent: f64, discount_amount: f64) -> Totals {
    let subtotal: f64 = items
        .iter()
        .map(|i| or_zero(i.unit_price) * or_zero(i.quantity))
        .sum();
    let tax_amount = subtotal * or_zero(tax_rate_percent) / 100.0;
    let grand_total = (subtotal + tax_amount - or_zero(discount_amount)).max(0.0);

    Totals {
        subtotal,
        tax_amount,
        grand_total,
    }
}

fn or_zero(n: f64) -> f64 {
    if n.is_finite() {
        n
    } else {
        0.0
    }
}
