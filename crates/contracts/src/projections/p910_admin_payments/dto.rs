use crate::enums::order_status::OrderStatus;
use serde::{Deserialize, Deserializer, Serialize};

/// DTO for one row of `GET /wp-json/v2/admin-payments/{user_id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub transaction_id: i64,

    /// Booking (room) id, displayed with `initial` as prefix
    #[serde(deserialize_with = "deserialize_id")]
    pub room_id: i64,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub initial: String,

    /// NaN when the endpoint sent something that is not a number
    #[serde(default = "missing_amount", deserialize_with = "deserialize_amount")]
    pub payment_amount: f64,
    #[serde(default, deserialize_with = "deserialize_status")]
    pub order_status: OrderStatus,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub location_name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub customer_name: String,

    /// `MM-dd-yyyy hh:mm AM/PM`, kept as sent
    #[serde(default, deserialize_with = "deserialize_text")]
    pub payment_date: String,
}

impl PaymentRecord {
    /// Amount if it is a usable number
    pub fn amount(&self) -> Option<f64> {
        self.payment_amount.is_finite().then_some(self.payment_amount)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Int(i64),
    Float(f64),
}

fn missing_amount() -> f64 {
    f64::NAN
}

/// Id from a string or a number, the endpoint sends both
fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de;

    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s.trim().parse::<i64>().map_err(de::Error::custom),
        StringOrNumber::Int(n) => Ok(n),
        StringOrNumber::Float(f) if f.fract() == 0.0 => Ok(f as i64),
        StringOrNumber::Float(f) => Err(de::Error::custom(format!("id is not an integer: {f}"))),
    }
}

/// Text field; `null` reads as empty
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Status code; `null` reads as an unknown (empty) status
fn deserialize_status<'de, D>(deserializer: D) -> Result<OrderStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map(OrderStatus::from)
        .unwrap_or_default())
}

/// Amount from a string or a number; anything unparsable becomes NaN
fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrNumber>::deserialize(deserializer)? {
        Some(StringOrNumber::String(s)) => Ok(s.trim().parse::<f64>().unwrap_or(f64::NAN)),
        Some(StringOrNumber::Int(n)) => Ok(n as f64),
        Some(StringOrNumber::Float(f)) => Ok(f),
        None => Ok(f64::NAN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_numeric_fields() {
        let record: PaymentRecord = serde_json::from_value(json!({
            "transaction_id": 42,
            "room_id": 7,
            "initial": "MR",
            "payment_amount": 1500.5,
            "order_status": "ayala_approved",
            "location_name": "Makati",
            "customer_name": "Juan Dela Cruz",
            "payment_date": "03-15-2024 10:30 AM"
        }))
        .unwrap();

        assert_eq!(record.transaction_id, 42);
        assert_eq!(record.room_id, 7);
        assert_eq!(record.payment_amount, 1500.5);
        assert_eq!(record.order_status, OrderStatus::Approved);
        assert_eq!(record.payment_date, "03-15-2024 10:30 AM");
    }

    #[test]
    fn test_deserialize_string_fields() {
        let record: PaymentRecord = serde_json::from_value(json!({
            "transaction_id": "42",
            "room_id": " 7 ",
            "payment_amount": "250.75",
            "order_status": "something_new"
        }))
        .unwrap();

        assert_eq!(record.transaction_id, 42);
        assert_eq!(record.room_id, 7);
        assert_eq!(record.amount(), Some(250.75));
        assert_eq!(record.order_status, OrderStatus::Other("something_new".into()));
        assert_eq!(record.location_name, "");
    }

    #[test]
    fn test_bad_amount_is_nan() {
        let record: PaymentRecord = serde_json::from_value(json!({
            "transaction_id": 1,
            "room_id": 1,
            "payment_amount": "n/a"
        }))
        .unwrap();
        assert!(record.payment_amount.is_nan());
        assert_eq!(record.amount(), None);

        let missing: PaymentRecord =
            serde_json::from_value(json!({ "transaction_id": 1, "room_id": 1 })).unwrap();
        assert_eq!(missing.amount(), None);
    }

    #[test]
    fn test_null_text_fields_read_as_empty() {
        let records: Vec<PaymentRecord> = serde_json::from_value(json!([
            {
                "transaction_id": 1, "room_id": 1, "initial": "MR", "payment_amount": "100.00",
                "order_status": "ayala_approved", "location_name": "Makati",
                "customer_name": "Juan", "payment_date": "03-15-2024 10:30 AM"
            },
            {
                "transaction_id": 2, "room_id": 2, "initial": null, "payment_amount": "50.00",
                "order_status": null, "location_name": null,
                "customer_name": null, "payment_date": null
            }
        ]))
        .unwrap();

        assert_eq!(records.len(), 2);
        let second = &records[1];
        assert_eq!(second.initial, "");
        assert_eq!(second.order_status, OrderStatus::Other(String::new()));
        assert_eq!(second.location_name, "");
        assert_eq!(second.customer_name, "");
        assert_eq!(second.payment_date, "");
        assert_eq!(second.amount(), Some(50.0));
    }

    #[test]
    fn test_bad_id_is_rejected() {
        let result = serde_json::from_value::<PaymentRecord>(json!({
            "transaction_id": "abc",
            "room_id": 1
        }));
        assert!(result.is_err());
    }
}
