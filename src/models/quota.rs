use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A quota as reported by `GetServiceQuota`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceQuota {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjustable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_quota: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_metric: Option<MetricInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<QuotaPeriod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_reason: Option<ErrorReason>,
}

/// CloudWatch metric used to track usage of a quota.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct MetricInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metric_dimensions: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_statistic_recommendation: Option<String>,
}

/// Time window a rate-based quota applies to.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct QuotaPeriod {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_unit: Option<String>,
}

/// Reason a quota value could not be retrieved.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorReason {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
