//! Response envelope used by every backend endpoint:
//! `{ "status": "success" | "error", "message": "...", "data": <sparql results> }`.

use crate::error::{ConsoleError, Result};
use crate::sparql::SparqlResults;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Logged-in user as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub uri: String,
    pub role: String,
    #[serde(default)]
    pub sous_role: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub nom: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SparqlResults>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl ApiEnvelope {
    pub fn success(data: SparqlResults) -> Self {
        Self { status: Status::Success, message: None, data: Some(data), user: None, user_id: None }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { status: Status::Error, message: Some(message.into()), data: None, user: None, user_id: None }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// Turns an error envelope into [`ConsoleError::Backend`] carrying `http_status`.
    pub fn check(self, http_status: u16) -> Result<Self> {
        match self.status {
            Status::Success => Ok(self),
            Status::Error => Err(ConsoleError::backend(
                http_status,
                self.message.unwrap_or_else(|| "Aucune donnée disponible".to_string()),
            )),
        }
    }

    /// The query results, empty when the backend sent none.
    pub fn into_results(self) -> Result<SparqlResults> {
        Ok(self.check(200)?.data.unwrap_or_default())
    }

    /// The confirmation message of a write operation.
    pub fn into_message(self) -> Result<String> {
        Ok(self.check(200)?.message.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_becomes_backend_error() {
        let envelope: ApiEnvelope =
            serde_json::from_str(r#"{ "status": "error", "message": "Identifiants incorrects" }"#).unwrap();
        let err = envelope.check(401).unwrap_err();
        assert!(matches!(err, ConsoleError::Backend { status: 401, .. }));
        assert_eq!(err.user_message(), "Identifiants incorrects");
    }

    #[test]
    fn test_success_without_data_is_empty() {
        let envelope: ApiEnvelope = serde_json::from_str(r#"{ "status": "success" }"#).unwrap();
        assert!(envelope.into_results().unwrap().is_empty());
    }
}
