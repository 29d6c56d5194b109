//! Widget configuration and API URL helpers
//!
//! The host page embeds two elements the widget reads once at mount:
//! `<input id="site_url" value="https://example.com">` and
//! `<input id="current_user_id" value="42">`.

use thiserror::Error;
use wasm_bindgen::JsCast;

/// DOM id of the element holding the site base URL
pub const SITE_URL_ELEMENT_ID: &str = "site_url";

/// DOM id of the element holding the current user id
pub const USER_ID_ELEMENT_ID: &str = "current_user_id";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("host page has no #{0} element")]
    MissingElement(&'static str),
    #[error("host page element #{0} is empty")]
    EmptyValue(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Base URL without a trailing slash
    pub site_url: String,
    pub user_id: String,
}

impl WidgetConfig {
    pub fn new(site_url: &str, user_id: &str) -> Self {
        Self {
            site_url: site_url.trim().trim_end_matches('/').to_string(),
            user_id: user_id.trim().to_string(),
        }
    }

    /// Reads both values from the host page
    pub fn from_document() -> Result<Self, ConfigError> {
        let site_url = element_value(SITE_URL_ELEMENT_ID)?;
        let user_id = element_value(USER_ID_ELEMENT_ID)?;
        Ok(Self::new(&site_url, &user_id))
    }

    /// `GET {site_url}/wp-json/v2/admin-payments/{user_id}`
    pub fn payments_url(&self) -> String {
        format!(
            "{}/wp-json/v2/admin-payments/{}",
            self.site_url,
            urlencoding::encode(&self.user_id)
        )
    }
}

/// Value of an `<input>`, or the `value` attribute / text of any other element
fn element_value(id: &'static str) -> Result<String, ConfigError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ConfigError::NoWindow)?;
    let element = document
        .get_element_by_id(id)
        .ok_or(ConfigError::MissingElement(id))?;

    let value = match element.dyn_ref::<web_sys::HtmlInputElement>() {
        Some(input) => input.value(),
        None => element
            .get_attribute("value")
            .or_else(|| element.text_content())
            .unwrap_or_default(),
    };

    if value.trim().is_empty() {
        return Err(ConfigError::EmptyValue(id));
    }
    Ok(value)
}
