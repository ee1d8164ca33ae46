//! State version data models

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TfeError};
use crate::hcp::models::{related_id, RelationshipData};
use crate::hcp::traits::TfeResource;

/// State version data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct StateVersion {
    pub id: String,
    pub attributes: StateVersionAttributes,
    pub relationships: Option<StateVersionRelationships>,
}

/// State version attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct StateVersionAttributes {
    pub serial: u64,

    pub lineage: Option<String>,

    pub status: Option<String>,

    pub size: Option<u64>,

    #[serde(rename = "created-at")]
    pub created_at: Option<String>,

    #[serde(rename = "terraform-version")]
    pub terraform_version: Option<String>,

    #[serde(rename = "hosted-state-download-url")]
    pub hosted_state_download_url: Option<String>,

    #[serde(rename = "resources-processed")]
    pub resources_processed: Option<bool>,
}

/// State version relationships from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct StateVersionRelationships {
    pub run: Option<RelationshipData>,
}

impl TfeResource for StateVersion {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.id
    }
}

impl StateVersion {
    pub fn serial(&self) -> u64 {
        self.attributes.serial
    }

    pub fn run_id(&self) -> Option<&str> {
        related_id(self.relationships.as_ref().and_then(|r| r.run.as_ref()))
    }

    pub fn download_url(&self) -> Option<&str> {
        self.attributes.hosted_state_download_url.as_deref()
    }
}

/// The header fields of a Terraform state file needed for upload
#[derive(Deserialize, Debug)]
struct StateFileHeader {
    serial: u64,
    lineage: String,
}

/// Attributes of a state version upload
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StateUpload {
    pub serial: u64,
    pub md5: String,
    pub lineage: String,
    /// Base64 of the raw state file
    pub state: String,
}

impl StateUpload {
    /// Build an upload from the raw bytes of a state file
    pub fn from_state_bytes(raw: &[u8]) -> Result<Self> {
        let header: StateFileHeader = serde_json::from_slice(raw)
            .map_err(|e| TfeError::Json(format!("Invalid state file: {}", e)))?;

        Ok(Self {
            serial: header.serial,
            md5: md5_hex(raw),
            lineage: header.lineage,
            state: BASE64.encode(raw),
        })
    }
}

/// Lowercase hex MD5 digest
fn md5_hex(data: &[u8]) -> String {
    let digest = Md5::digest(data);
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}
