//! Column model of the payments table: one static entry per displayed field.

use crate::shared::components::table::{format_currency, zero_pad};
use crate::shared::date_utils::{parse_canonical_date, parse_date_like, parse_payment_timestamp};
use crate::shared::table_engine::{CellContent, CellValue, ColumnDef, ColumnFilter};
use contracts::enums::order_status::OrderStatus;
use contracts::projections::p910_admin_payments::dto::PaymentRecord;
use std::cmp::Ordering;

pub const COL_TRANSACTION_ID: &str = "transaction_id";
pub const COL_ROOM_ID: &str = "room_id";
pub const COL_PAYMENT_AMOUNT: &str = "payment_amount";
pub const COL_LOCATION_NAME: &str = "location_name";
pub const COL_CUSTOMER_NAME: &str = "customer_name";
pub const COL_PAYMENT_DATE: &str = "payment_date";

/// Fixed prefix of displayed transaction ids
pub const TRANSACTION_PREFIX: &str = "ALO";

/// Digits of displayed transaction and booking ids
pub const ID_WIDTH: usize = 6;

pub static PAYMENT_COLUMNS: [ColumnDef<PaymentRecord>; 6] = [
    ColumnDef {
        id: COL_TRANSACTION_ID,
        label: "TRANSACTION ID",
        accessor: transaction_id_value,
        render: render_transaction_id,
        sort: None,
        filter: ColumnFilter::None,
    },
    ColumnDef {
        id: COL_ROOM_ID,
        label: "BOOKING ID",
        accessor: room_id_value,
        render: render_booking_id,
        sort: None,
        filter: ColumnFilter::None,
    },
    ColumnDef {
        id: COL_PAYMENT_AMOUNT,
        label: "PAYMENT AMOUNT",
        accessor: payment_amount_value,
        render: render_payment_amount,
        sort: None,
        filter: ColumnFilter::None,
    },
    ColumnDef {
        id: COL_LOCATION_NAME,
        label: "Location",
        accessor: location_name_value,
        render: render_location_name,
        sort: None,
        filter: ColumnFilter::IncludesString,
    },
    ColumnDef {
        id: COL_CUSTOMER_NAME,
        label: "Customer",
        accessor: customer_name_value,
        render: render_customer_name,
        sort: None,
        filter: ColumnFilter::None,
    },
    ColumnDef {
        id: COL_PAYMENT_DATE,
        label: "Payment Date",
        accessor: payment_date_value,
        render: render_payment_date,
        sort: Some(compare_payment_dates),
        filter: ColumnFilter::Custom(payment_date_matches),
    },
];

fn transaction_id_value(r: &PaymentRecord) -> CellValue {
    CellValue::Number(r.transaction_id as f64)
}

fn room_id_value(r: &PaymentRecord) -> CellValue {
    CellValue::Number(r.room_id as f64)
}

fn payment_amount_value(r: &PaymentRecord) -> CellValue {
    CellValue::Number(r.payment_amount)
}

fn location_name_value(r: &PaymentRecord) -> CellValue {
    CellValue::Text(r.location_name.clone())
}

fn customer_name_value(r: &PaymentRecord) -> CellValue {
    CellValue::Text(r.customer_name.clone())
}

fn payment_date_value(r: &PaymentRecord) -> CellValue {
    CellValue::Text(r.payment_date.clone())
}

fn render_transaction_id(r: &PaymentRecord) -> CellContent {
    CellContent::plain(format!(
        "{}{}",
        TRANSACTION_PREFIX,
        zero_pad(r.transaction_id, ID_WIDTH)
    ))
}

fn render_booking_id(r: &PaymentRecord) -> CellContent {
    CellContent::plain(format!("{}{}", r.initial, zero_pad(r.room_id, ID_WIDTH)))
}

/// Amounts of cancelled and approval-requested orders are shown struck through.
/// Display only: totals are computed from the records, not from cells.
pub fn is_struck_amount(status: &OrderStatus) -> bool {
    matches!(status, OrderStatus::Cancelled | OrderStatus::ApprovalRequested)
}

fn render_payment_amount(r: &PaymentRecord) -> CellContent {
    let formatted = format_currency(r.amount());
    if is_struck_amount(&r.order_status) {
        CellContent::struck(formatted)
    } else {
        CellContent::plain(formatted)
    }
}

fn render_location_name(r: &PaymentRecord) -> CellContent {
    CellContent::plain(r.location_name.clone())
}

fn render_customer_name(r: &PaymentRecord) -> CellContent {
    CellContent::plain(r.customer_name.clone())
}

fn render_payment_date(r: &PaymentRecord) -> CellContent {
    CellContent::plain(r.payment_date.clone())
}

/// Same-day filter: `filter_value` is `YYYY-MM-DD`; rows whose timestamp is not
/// exactly `MM-dd-yyyy hh:mm AM|PM` never match
pub fn payment_date_matches(r: &PaymentRecord, filter_value: &str) -> bool {
    match (
        parse_canonical_date(filter_value),
        parse_payment_timestamp(&r.payment_date),
    ) {
        (Some(day), Some(paid_at)) => paid_at.date() == day,
        _ => false,
    }
}

/// Chronological order; unparsable dates are greater than any valid date
pub fn compare_payment_dates(a: &PaymentRecord, b: &PaymentRecord) -> Ordering {
    match (parse_date_like(&a.payment_date), parse_date_like(&b.payment_date)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}
