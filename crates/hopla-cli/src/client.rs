//! HTTP client for the Habitica API.
//!
//! Every response is wrapped in an envelope:
//!
//! ```text
//! {"success": true,  "data": {...}, "message": "..."}
//! {"success": false, "error": "NotFound", "message": "..."}
//! ```
//!
//! [`HabiticaClient`] unwraps `data` on success and turns everything else
//! into [`CliError::Api`] carrying the server's message. Calls are made one
//! at a time and never retried.

use hopla_types::HabiticaUser;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::config::AuthConfig;
use crate::error::CliError;

/// Authenticated client for one Habitica account.
#[derive(Debug, Clone)]
pub struct HabiticaClient {
    http: reqwest::Client,
    base_url: String,
}

impl HabiticaClient {
    /// Create a client that sends `auth` with every request.
    pub fn new(auth: &AuthConfig, base_url: impl Into<String>) -> Result<Self, CliError> {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-user", header_value(&auth.user_id.to_string())?);
        headers.insert("x-api-key", header_value(&auth.api_token.to_string())?);
        headers.insert(
            "x-client",
            header_value(&format!("{}-hopla", auth.user_id))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// `GET /user`.
    pub async fn get_user(&self) -> Result<HabiticaUser, CliError> {
        let data = self.send(self.http.get(self.url("/user"))).await?;
        Ok(HabiticaUser::new(data))
    }

    /// `POST /user/feed/{pet}/{food}?amount={amount}`.
    pub async fn feed(&self, pet: &str, food: &str, amount: u32) -> Result<Value, CliError> {
        let url = self.url(&format!("/user/feed/{pet}/{food}"));
        self.send(self.http.post(url).query(&[("amount", amount)]))
            .await
    }

    /// `POST /user/hatch/{egg}/{potion}`.
    pub async fn hatch(&self, egg: &str, potion: &str) -> Result<Value, CliError> {
        let url = self.url(&format!("/user/hatch/{egg}/{potion}"));
        self.send(self.http.post(url)).await
    }

    /// `POST /user/class/cast/{spell}`.
    pub async fn cast(&self, spell: &str) -> Result<Value, CliError> {
        let url = self.url(&format!("/user/class/cast/{spell}"));
        self.send(self.http.post(url)).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value, CliError> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(url = %response.url(), %status, "response received");

        let body = response.text().await?;
        let json: Value = serde_json::from_str(&body).map_err(|e| {
            CliError::Api(format!("server returned {status} with a non-JSON body ({e})"))
        })?;
        extract_data(&json, status.is_success())
    }
}

fn header_value(value: &str) -> Result<HeaderValue, CliError> {
    HeaderValue::from_str(value)
        .map_err(|e| CliError::Config(format!("credential is not a valid header value: {e}")))
}

/// Unwrap the `data` field of a response envelope.
fn extract_data(json: &Value, status_ok: bool) -> Result<Value, CliError> {
    let success = json.get("success").and_then(Value::as_bool).unwrap_or(false);
    if status_ok && success {
        return Ok(json.get("data").cloned().unwrap_or(Value::Null));
    }

    let message = json
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("no message from server");
    let message = match json.get("error").and_then(Value::as_str) {
        Some(error) => format!("{error}: {message}"),
        None => message.to_owned(),
    };
    Err(CliError::Api(message))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn extract_data_on_success() {
        let json = json!({"success": true, "data": {"mp": 12}, "message": "ok"});
        let data = extract_data(&json, true).ok();
        assert_eq!(data, Some(json!({"mp": 12})));
    }

    #[test]
    fn extract_data_without_data_is_null() {
        let json = json!({"success": true});
        assert_eq!(extract_data(&json, true).ok(), Some(Value::Null));
    }

    #[test]
    fn extract_data_surfaces_server_message() {
        let json = json!({
            "success": false,
            "error": "NotAuthorized",
            "message": "You can't feed this pet."
        });
        let message = extract_data(&json, false).err().map(|e| e.to_string());
        assert_eq!(
            message.as_deref(),
            Some("Habitica API error: NotAuthorized: You can't feed this pet.")
        );
    }

    #[test]
    fn extract_data_rejects_error_status_even_if_success() {
        let json = json!({"success": true, "data": {}});
        assert!(matches!(extract_data(&json, false), Err(CliError::Api(_))));
    }

    #[test]
    fn client_builds_with_valid_credentials() {
        let auth = AuthConfig::parse(
            "a8b5c0f2-6b0e-4f1d-9a3c-2d7e8f9a0b1c",
            "0f0e0d0c-0b0a-4908-8706-050403020100",
        );
        let client = auth.and_then(|a| HabiticaClient::new(&a, "http://localhost"));
        assert_eq!(
            client.map(|c| c.url("/user")).ok().as_deref(),
            Some("http://localhost/user")
        );
    }
}
