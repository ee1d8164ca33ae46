//! Traits and document wrappers shared by every resource type

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{Result, TfeError};

/// A named TFE resource
pub trait TfeResource {
    /// Server-assigned id (`ws-...`, `run-...`)
    fn id(&self) -> &str;

    /// Name shown to users; resources without one fall back to their id
    fn name(&self) -> &str;

    /// True when `input` is this resource's id or exact name
    fn matches(&self, input: &str) -> bool {
        self.id() == input || self.name() == input
    }
}

/// One page of a list endpoint, whatever its envelope
pub trait PaginatedResponse<T> {
    fn into_data(self) -> Vec<T>;
}

/// JSON:API list document (`{"data": [...], "meta": ...}`)
#[derive(Deserialize, Debug)]
pub struct ApiListResponse<T> {
    pub data: Vec<T>,
}

impl<T> PaginatedResponse<T> for ApiListResponse<T> {
    fn into_data(self) -> Vec<T> {
        self.data
    }
}

/// JSON:API single-resource document (`{"data": {...}}`)
#[derive(Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decode the `data` member of a response body
    pub fn decode(raw: serde_json::Value, label: &str) -> Result<T> {
        serde_json::from_value::<Self>(raw)
            .map(|doc| doc.data)
            .map_err(|e| TfeError::Json(format!("Failed to parse {}: {}", label, e)))
    }
}
