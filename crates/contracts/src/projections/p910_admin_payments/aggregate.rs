use super::dto::PaymentRecord;
use serde::{Deserialize, Serialize};

/// Header figures of the payments page, folded over the full fetched set
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentTotals {
    /// Sum of every payment amount regardless of status
    pub total_received: f64,
    /// Sum over approved, cancel-requested and denied-request payments
    pub total_sales: f64,
}

impl PaymentTotals {
    /// Amounts that are not numbers contribute nothing.
    pub fn from_records(records: &[PaymentRecord]) -> Self {
        records.iter().fold(Self::default(), |mut totals, record| {
            if let Some(amount) = record.amount() {
                totals.total_received += amount;
                if record.order_status.counts_as_sale() {
                    totals.total_sales += amount;
                }
            }
            totals
        })
    }
}
