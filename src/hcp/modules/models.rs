//! Private registry module data models

use serde::{Deserialize, Serialize};

use crate::hcp::traits::{PaginatedResponse, TfeResource};

/// Registry module from the v2 API
#[derive(Deserialize, Debug, Clone)]
pub struct RegistryModule {
    pub id: String,
    pub attributes: RegistryModuleAttributes,
}

/// Registry module attributes from the v2 API
#[derive(Deserialize, Debug, Clone)]
pub struct RegistryModuleAttributes {
    pub name: String,
    pub provider: String,
    pub namespace: Option<String>,
    #[serde(rename = "registry-name")]
    pub registry_name: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "version-statuses", default)]
    pub version_statuses: Vec<VersionStatus>,
    #[serde(rename = "vcs-repo")]
    pub vcs_repo: Option<VcsRepo>,
    #[serde(rename = "publishing-mechanism")]
    pub publishing_mechanism: Option<String>,
    #[serde(rename = "created-at")]
    pub created_at: Option<String>,
    #[serde(rename = "updated-at")]
    pub updated_at: Option<String>,
}

/// Status of one published version
#[derive(Deserialize, Debug, Clone)]
pub struct VersionStatus {
    pub version: String,
    pub status: String,
}

/// VCS repository a module publishes from
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct VcsRepo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_token_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<bool>,
}

impl TfeResource for RegistryModule {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.name
    }
}

impl RegistryModule {
    pub fn provider(&self) -> &str {
        &self.attributes.provider
    }

    /// Most recently listed version, if any was published
    pub fn latest_version(&self) -> Option<&str> {
        self.attributes
            .version_statuses
            .first()
            .map(|v| v.version.as_str())
    }

    pub fn source(&self) -> &str {
        self.attributes
            .vcs_repo
            .as_ref()
            .and_then(|r| r.identifier.as_deref())
            .unwrap_or("")
    }
}

/// Module summary from the registry v1 listing
#[derive(Deserialize, Debug, Clone)]
pub struct ModuleSummary {
    /// `<namespace>/<name>/<provider>/<version>`
    pub id: String,
    pub namespace: String,
    pub name: String,
    pub provider: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub downloads: u64,
}

/// One page of the registry v1 module listing
#[derive(Deserialize, Debug)]
pub struct ModuleListPage {
    pub modules: Vec<ModuleSummary>,
}

impl PaginatedResponse<ModuleSummary> for ModuleListPage {
    fn into_data(self) -> Vec<ModuleSummary> {
        self.modules
    }
}

/// Where a new module's versions come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleSource {
    /// Published from a VCS repository (tags, or a branch)
    Vcs {
        identifier: String,
        oauth_token_id: String,
        branch: Option<String>,
    },
    /// No VCS connection; versions are uploaded through the API
    Standalone { name: String, provider: String },
}

/// How a VCS-backed module publishes new versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishingMode {
    Branch(String),
    Tags,
}

impl PublishingMode {
    pub fn to_vcs_repo(&self) -> VcsRepo {
        match self {
            PublishingMode::Branch(branch) => VcsRepo {
                branch: Some(branch.clone()),
                tags: Some(false),
                ..Default::default()
            },
            PublishingMode::Tags => VcsRepo {
                branch: Some(String::new()),
                tags: Some(true),
                ..Default::default()
            },
        }
    }
}
