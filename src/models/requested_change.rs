use serde::{Deserialize, Serialize};
use std::fmt;

/// An asynchronous quota increase request and its current state.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RequestedServiceQuotaChange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RequestStatus>,
    /// Epoch seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<f64>,
    /// Epoch seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requester: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_quota: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Lifecycle state of a quota increase request.
///
/// Unrecognized values are kept verbatim in [`RequestStatus::Other`] so they
/// round-trip through persisted state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequestStatus {
    Pending,
    CaseOpened,
    Approved,
    Denied,
    CaseClosed,
    NotApproved,
    InvalidRequest,
    Other(String),
}

impl RequestStatus {
    pub fn as_str(&self) -> &str {
        match self {
            RequestStatus::Pending => "PENDING",
            RequestStatus::CaseOpened => "CASE_OPENED",
            RequestStatus::Approved => "APPROVED",
            RequestStatus::Denied => "DENIED",
            RequestStatus::CaseClosed => "CASE_CLOSED",
            RequestStatus::NotApproved => "NOT_APPROVED",
            RequestStatus::InvalidRequest => "INVALID_REQUEST",
            RequestStatus::Other(value) => value,
        }
    }

    /// The request is resolved and no longer needs tracking.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RequestStatus::Approved
                | RequestStatus::Denied
                | RequestStatus::CaseClosed
                | RequestStatus::NotApproved
                | RequestStatus::InvalidRequest
        )
    }

    /// The request is still in flight.
    pub fn is_open(&self) -> bool {
        matches!(self, RequestStatus::Pending | RequestStatus::CaseOpened)
    }
}

impl From<String> for RequestStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PENDING" => RequestStatus::Pending,
            "CASE_OPENED" => RequestStatus::CaseOpened,
            "APPROVED" => RequestStatus::Approved,
            "DENIED" => RequestStatus::Denied,
            "CASE_CLOSED" => RequestStatus::CaseClosed,
            "NOT_APPROVED" => RequestStatus::NotApproved,
            "INVALID_REQUEST" => RequestStatus::InvalidRequest,
            _ => RequestStatus::Other(value),
        }
    }
}

impl From<&str> for RequestStatus {
    fn from(value: &str) -> Self {
        RequestStatus::from(value.to_string())
    }
}

impl From<RequestStatus> for String {
    fn from(value: RequestStatus) -> Self {
        match value {
            RequestStatus::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
