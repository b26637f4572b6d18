use crate::models::RequestStatus;
use serde::{Deserialize, Serialize};

/// Persisted state of a quota binding, owned by the host orchestrator.
///
/// `value` holds the configured value before create/update and the observed
/// value afterwards. While an increase request is open, the observed value is
/// the requested one rather than the currently applied one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceQuotaState {
    pub id: String,
    pub service_code: String,
    pub quota_code: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_status: Option<RequestStatus>,
}

impl ServiceQuotaState {
    /// State for a binding that has not been created yet.
    pub fn new(service_code: impl Into<String>, quota_code: impl Into<String>, value: f64) -> Self {
        Self {
            service_code: service_code.into(),
            quota_code: quota_code.into(),
            value,
            ..Self::default()
        }
    }

    /// Open request id, treating an empty string as none.
    pub fn tracked_request_id(&self) -> Option<&str> {
        self.request_id.as_deref().filter(|id| !id.is_empty())
    }

    pub(crate) fn clear_request(&mut self) {
        self.request_id = None;
        self.request_status = None;
    }
}
