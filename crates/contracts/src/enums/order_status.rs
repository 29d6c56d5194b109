use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status of a paid booking as reported by the admin-payments endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Approved,
    Cancelled,
    Denied,
    CancelRequested,
    ApprovalRequested,
    DeniedRequest,
    /// Any status the widget does not know about, kept verbatim
    Other(String),
}

impl OrderStatus {
    /// Wire code of the status
    pub fn code(&self) -> &str {
        match self {
            OrderStatus::Approved => "ayala_approved",
            OrderStatus::Cancelled => "ayala_cancelled",
            OrderStatus::Denied => "ayala_denied",
            OrderStatus::CancelRequested => "cancel_request",
            OrderStatus::ApprovalRequested => "approved_request",
            OrderStatus::DeniedRequest => "denied_request",
            OrderStatus::Other(code) => code,
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "ayala_approved" => OrderStatus::Approved,
            "ayala_cancelled" => OrderStatus::Cancelled,
            "ayala_denied" => OrderStatus::Denied,
            "cancel_request" => OrderStatus::CancelRequested,
            "approved_request" => OrderStatus::ApprovalRequested,
            "denied_request" => OrderStatus::DeniedRequest,
            other => OrderStatus::Other(other.to_string()),
        }
    }

    /// Statuses whose amount counts towards total sales
    pub fn counts_as_sale(&self) -> bool {
        matches!(
            self,
            OrderStatus::Approved | OrderStatus::CancelRequested | OrderStatus::DeniedRequest
        )
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Other(String::new())
    }
}

impl From<String> for OrderStatus {
    fn from(code: String) -> Self {
        OrderStatus::from_code(&code)
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.code().to_string()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
