use serde::{Deserialize, Serialize};

use super::{RequestedServiceQuotaChange, ServiceQuota};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct GetServiceQuotaInput {
    pub service_code: String,
    pub quota_code: String,
}

impl GetServiceQuotaInput {
    pub fn new(service_code: impl Into<String>, quota_code: impl Into<String>) -> Self {
        Self {
            service_code: service_code.into(),
            quota_code: quota_code.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct GetServiceQuotaOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota: Option<ServiceQuota>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RequestServiceQuotaIncreaseInput {
    pub service_code: String,
    pub quota_code: String,
    pub desired_value: f64,
}

impl RequestServiceQuotaIncreaseInput {
    pub fn new(
        service_code: impl Into<String>,
        quota_code: impl Into<String>,
        desired_value: f64,
    ) -> Self {
        Self {
            service_code: service_code.into(),
            quota_code: quota_code.into(),
            desired_value,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RequestServiceQuotaIncreaseOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_quota: Option<RequestedServiceQuotaChange>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct GetRequestedServiceQuotaChangeInput {
    pub request_id: String,
}

impl GetRequestedServiceQuotaChangeInput {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct GetRequestedServiceQuotaChangeOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_quota: Option<RequestedServiceQuotaChange>,
}
