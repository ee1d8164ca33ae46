//! Credential profile and session output rows

use serde::Serialize;

use super::{cell, Tabular};
use crate::session::{mask_token, Session};

/// One stored server profile
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProfileRow {
    pub server: String,
    pub org: String,
    pub token: String,
    pub protection: String,
}

impl ProfileRow {
    /// `token` is already masked or revealed by the caller
    pub fn new(server: &str, org: Option<&str>, token: String, protected: bool) -> Self {
        Self {
            server: server.to_string(),
            org: cell(org),
            token,
            protection: if protected { "protected" } else { "plain" }.to_string(),
        }
    }
}

impl Tabular for ProfileRow {
    fn headers() -> Vec<&'static str> {
        vec!["Server", "Org", "Token", "Protection"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.server.clone(),
            self.org.clone(),
            self.token.clone(),
            self.protection.clone(),
        ]
    }
}

/// The session in effect for this invocation (token masked)
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SessionRow {
    pub server: String,
    pub org: String,
    pub token: String,
}

impl From<&Session> for SessionRow {
    fn from(session: &Session) -> Self {
        Self {
            server: session.server().unwrap_or("<not set>").to_string(),
            org: session.org().unwrap_or("<not set>").to_string(),
            token: mask_token(session.token()),
        }
    }
}

impl Tabular for SessionRow {
    fn headers() -> Vec<&'static str> {
        vec!["Server", "Org", "Token"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.server.clone(), self.org.clone(), self.token.clone()]
    }
}
