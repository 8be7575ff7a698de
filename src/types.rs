//! Core types for submission and sharing

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier the backend assigns to a submitted snippet.
///
/// The backend is free to use either a string or an integer; whichever form
/// it sends is echoed back unchanged when sharing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CodeId {
    /// Numeric identifier
    Number(u64),
    /// String identifier
    Text(String),
}

impl fmt::Display for CodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for CodeId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<u64> for CodeId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

/// Body of `POST /code`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRequest {
    /// Source code to optimize
    pub code: String,
    /// Country whose energy mix the backend uses
    pub country: String,
}

impl SubmissionRequest {
    /// Request for `code` as run in `country`
    pub fn new(code: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            country: country.into(),
        }
    }
}

/// Response of `POST /code`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubmissionResult {
    /// Identifier to reference the result when sharing
    pub code_id: CodeId,
    /// Rewritten, more efficient code
    #[serde(rename = "after_code")]
    pub rewritten_code: String,
    /// Estimated emissions of the submitted code
    #[serde(rename = "before_carbon")]
    pub before_emission: f64,
    /// Estimated emissions of the rewritten code
    #[serde(rename = "after_carbon")]
    pub after_emission: f64,
}

/// What the user decided about publishing a result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishDecision {
    /// Keep the result private
    Skip,
    /// Publish, attributed to a verified identity or anonymously.
    ///
    /// `anonymous` is true exactly when `identity` is `None`; use
    /// [`PublishDecision::anonymous`] and [`PublishDecision::attributed`]
    /// to build values that hold this.
    Publish {
        /// Verified identity, `None` when anonymous
        identity: Option<String>,
        /// Publish without attribution
        anonymous: bool,
    },
}

impl PublishDecision {
    /// Publish without attribution
    pub const fn anonymous() -> Self {
        Self::Publish {
            identity: None,
            anonymous: true,
        }
    }

    /// Publish attributed to an identity that already passed verification
    pub fn attributed(identity: impl Into<String>) -> Self {
        Self::Publish {
            identity: Some(identity.into()),
            anonymous: false,
        }
    }

    /// Whether the result should be published
    pub const fn is_publish(&self) -> bool {
        matches!(self, Self::Publish { .. })
    }

    /// Build the sharing request for this decision, if it is a publish
    pub fn sharing_request(&self, code_id: &CodeId) -> Option<SharingRequest> {
        match self {
            Self::Skip => None,
            Self::Publish {
                identity,
                anonymous,
            } => Some(SharingRequest {
                code_id: code_id.clone(),
                anonymous: *anonymous,
                identity: identity.clone(),
            }),
        }
    }
}

/// Body of `POST /sharing`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharingRequest {
    /// Result being published
    pub code_id: CodeId,
    /// Post without attribution
    pub anonymous: bool,
    /// Identity to attribute the post to
    #[serde(rename = "github_id")]
    pub identity: Option<String>,
}

/// Value of the `success` field the sharing backend sends when it accepted
/// the post
pub const SHARING_SUCCESS: i64 = 200;

/// Response of `POST /sharing`
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SharingResponse {
    /// Status indicator; only [`SHARING_SUCCESS`] means accepted
    #[serde(default)]
    pub success: Option<i64>,
}

impl SharingResponse {
    /// Whether the backend accepted the post
    pub fn is_success(&self) -> bool {
        self.success == Some(SHARING_SUCCESS)
    }
}

/// Result of a publish attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharingOutcome {
    /// The backend accepted the post
    Published,
    /// The post was not accepted
    Failed,
}
