use std::time::Duration;

pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

/// Signing name and endpoint prefix of the Service Quotas API.
pub(crate) const SERVICE_NAME: &str = "servicequotas";
/// `X-Amz-Target` prefix for API version 2019-06-24.
pub(crate) const TARGET_PREFIX: &str = "ServiceQuotasV20190624";
pub(crate) const AMZ_JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Region assumed for signing when only an endpoint override is configured.
pub(crate) const FALLBACK_SIGNING_REGION: &str = "us-east-1";

pub(crate) const ENV_REGION: &str = "AWS_REGION";
pub(crate) const ENV_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";
pub(crate) const ENV_ENDPOINT_SERVICE: &str = "AWS_ENDPOINT_URL_SERVICE_QUOTAS";
pub(crate) const ENV_ENDPOINT: &str = "AWS_ENDPOINT_URL";

/// Public endpoint for the given region.
pub(crate) fn endpoint_for_region(region: &str) -> String {
    let suffix = if region.starts_with("cn-") {
        "amazonaws.com.cn"
    } else {
        "amazonaws.com"
    };
    format!("https://{SERVICE_NAME}.{region}.{suffix}")
}
