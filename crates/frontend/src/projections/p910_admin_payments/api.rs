use crate::shared::api_utils::{ConfigError, WidgetConfig};
use contracts::projections::p910_admin_payments::dto::PaymentRecord;
use gloo_net::http::Request;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaymentsApiError {
    #[error("widget is not configured: {0}")]
    Config(#[from] ConfigError),
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server returned HTTP {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetches every payment of the configured user
pub async fn fetch_payments(config: &WidgetConfig) -> Result<Vec<PaymentRecord>, PaymentsApiError> {
    let url = config.payments_url();
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await?;

    if !response.ok() {
        return Err(PaymentsApiError::Status(response.status()));
    }

    let text = response.text().await?;
    Ok(parse_payments(&text)?)
}

/// Body of the admin-payments endpoint: a JSON array of records
pub fn parse_payments(body: &str) -> Result<Vec<PaymentRecord>, serde_json::Error> {
    serde_json::from_str(body)
}
