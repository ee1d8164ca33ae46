//! TFE HTTP client for API interactions

use log::debug;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::traits::ApiResponse;
use crate::session::Session;
use crate::ui::ConfirmPolicy;

/// TFE API client bound to one session
pub struct TfeClient {
    client: Client,
    session: Session,
    /// Custom root URL override (for testing with mock servers)
    base_url_override: Option<String>,
    page_size: u32,
    confirm: ConfirmPolicy,
}

impl TfeClient {
    /// Create a new TFE client for the given session
    pub fn new(session: Session) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            session,
            base_url_override: None,
            page_size: api::DEFAULT_PAGE_SIZE,
            confirm: ConfirmPolicy::Prompt,
        }
    }

    /// Create a client that sends every request to `base_url` instead of
    /// `https://<server>` (mock servers, local proxies)
    pub fn with_base_url(session: Session, base_url: &str) -> Self {
        let mut client = Self::new(session);
        client.base_url_override = Some(base_url.trim_end_matches('/').to_string());
        client
    }

    /// Set the pagination page size (clamped to 1..=MAX_PAGE_SIZE)
    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = page_size.clamp(1, api::MAX_PAGE_SIZE);
    }

    /// Pagination page size
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Set how mutating operations are confirmed
    pub fn set_confirm_policy(&mut self, policy: ConfirmPolicy) {
        self.confirm = policy;
    }

    /// Current session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Organization from the session, or a configuration error
    pub fn org(&self) -> Result<&str> {
        self.session.require_org()
    }

    /// Root URL of the server
    fn root_url(&self) -> Result<String> {
        if let Some(ref url) = self.base_url_override {
            return Ok(url.clone());
        }
        let (server, _) = self.session.require_credentials()?;
        Ok(format!("https://{}", server))
    }

    /// Build a URL under the v2 API (`path` starts with '/')
    pub(crate) fn api_url(&self, path: &str) -> Result<String> {
        Ok(format!("{}{}{}", self.root_url()?, api::BASE_PATH, path))
    }

    /// Build a URL under the private registry v1 API
    pub(crate) fn registry_url(&self, path: &str) -> Result<String> {
        Ok(format!("{}{}{}", self.root_url()?, api::REGISTRY_PATH, path))
    }

    /// Gate a mutating operation behind the confirmation policy
    pub(crate) fn confirm(&self, action: &str) -> Result<()> {
        if self.confirm.allows(action)? {
            Ok(())
        } else {
            Err(TfeError::Aborted(action.to_string()))
        }
    }

    /// Send one request with the standard headers.
    ///
    /// Returns the parsed JSON body, or `None` for an empty success body.
    /// Non-success statuses become `TfeError::Api` carrying the API's
    /// error details.
    pub(crate) async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Option<serde_json::Value>> {
        let (_, token) = self.session.require_credentials()?;

        debug!("{} {}", method, url);

        let mut builder = self
            .client
            .request(method.clone(), url)
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", api::CONTENT_TYPE);
        if let Some(body) = body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(TfeError::Api {
                status: status.as_u16(),
                message: format!("{} {} failed: {}", method, url, error_detail(&text)),
            });
        }

        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&text)?))
    }

    /// GET a document and deserialize it
    pub(crate) async fn get_json<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let value = self
            .send(Method::GET, url, None)
            .await?
            .ok_or_else(|| TfeError::Json(format!("Empty response from {}", url)))?;
        Ok(serde_json::from_value(value)?)
    }

    /// Fetch the `data` member of a single-resource document.
    ///
    /// Returns `None` for 404.
    pub(crate) async fn fetch_resource<T>(&self, url: &str, resource_label: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        match self.send(Method::GET, url, None).await {
            Ok(Some(raw)) => ApiResponse::decode(raw, resource_label).map(Some),
            Ok(None) => Ok(None),
            Err(TfeError::Api { status: 404, .. }) => {
                debug!("{} not found", resource_label);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Send a write request and deserialize the `data` member of the response
    pub(crate) async fn write_resource<T>(
        &self,
        method: Method,
        url: &str,
        body: &serde_json::Value,
        resource_label: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let raw = self
            .send(method, url, Some(body))
            .await?
            .ok_or_else(|| TfeError::Json(format!("Empty response for {}", resource_label)))?;
        ApiResponse::decode(raw, resource_label)
    }

    /// Send a request whose response body is ignored (deletes, actions)
    pub(crate) async fn send_action(
        &self,
        method: Method,
        url: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<()> {
        self.send(method, url, body).await.map(|_| ())
    }
}

/// Pull `errors[].detail` (or title) out of a JSON:API error body
fn error_detail(body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    let details: Vec<String> = parsed
        .as_ref()
        .and_then(|v| v["errors"].as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| {
                    e["detail"]
                        .as_str()
                        .or_else(|| e["title"].as_str())
                        .or_else(|| e.as_str())
                        .map(|s| s.to_string())
                })
                .collect()
        })
        .unwrap_or_default();

    if !details.is_empty() {
        details.join("; ")
    } else if body.trim().is_empty() {
        "no response body".to_string()
    } else {
        body.trim().to_string()
    }
}

#[cfg(test)]
impl TfeClient {
    /// Create a test client with mock base URL, pre-authorized mutations and org "my-org"
    pub fn test_client(base_url: &str) -> Self {
        let mut client = Self::with_base_url(
            Session::new("mock.terraform.io", "test-token", Some("my-org")),
            base_url,
        );
        client.set_confirm_policy(ConfirmPolicy::PreAuthorized);
        client
    }
}
