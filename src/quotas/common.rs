use crate::client_defaults::{
    endpoint_for_region, AMZ_JSON_CONTENT_TYPE, ENV_DEFAULT_REGION, ENV_ENDPOINT,
    ENV_ENDPOINT_SERVICE, ENV_REGION, FALLBACK_SIGNING_REGION, TARGET_PREFIX,
};
use crate::error::{fallback_message, ApiError, Error};
use crate::sigv4::{Credentials, SigV4Signer, SigningRequest};
use reqwest::blocking::RequestBuilder as BlockingRequestBuilder;
use reqwest::header::HeaderMap;
use reqwest::RequestBuilder as AsyncRequestBuilder;
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

pub(crate) const TARGET_HEADER: &str = "X-Amz-Target";
pub(crate) const ERROR_TYPE_HEADER: &str = "x-amzn-ErrorType";
pub(crate) const REQUEST_ID_HEADER: &str = "x-amzn-RequestId";

pub(crate) enum AuthProvider {
    StaticHeader { header: String, value: String },
    SigV4(SigV4Signer),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Operation {
    GetServiceQuota,
    RequestServiceQuotaIncrease,
    GetRequestedServiceQuotaChange,
}

impl Operation {
    fn name(self) -> &'static str {
        match self {
            Operation::GetServiceQuota => "GetServiceQuota",
            Operation::RequestServiceQuotaIncrease => "RequestServiceQuotaIncrease",
            Operation::GetRequestedServiceQuotaChange => "GetRequestedServiceQuotaChange",
        }
    }

    pub(crate) fn target(self) -> String {
        format!("{TARGET_PREFIX}.{}", self.name())
    }
}

/// Returns the auth headers for a request with the given target and body.
pub(crate) fn auth_headers(
    auth: &Option<AuthProvider>,
    endpoint: &Url,
    target: &str,
    body: &[u8],
) -> Result<Vec<(String, String)>, Error> {
    let Some(auth) = auth else {
        return Ok(Vec::new());
    };
    match auth {
        AuthProvider::StaticHeader { header, value } => Ok(vec![(header.clone(), value.clone())]),
        AuthProvider::SigV4(signer) => {
            let request = SigningRequest {
                method: "POST",
                url: endpoint,
                content_type: AMZ_JSON_CONTENT_TYPE,
                target,
                body,
            };
            Ok(signer
                .sign(&request)?
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect())
        }
    }
}

pub(crate) trait RequestBuilderExt: Sized {
    fn with_header(self, name: &str, value: &str) -> Self;
}

impl RequestBuilderExt for BlockingRequestBuilder {
    fn with_header(self, name: &str, value: &str) -> Self {
        self.header(name, value)
    }
}

impl RequestBuilderExt for AsyncRequestBuilder {
    fn with_header(self, name: &str, value: &str) -> Self {
        self.header(name, value)
    }
}

/// Adds the protocol headers shared by every Service Quotas call.
pub(crate) fn apply_protocol_headers<B: RequestBuilderExt>(req: B, target: &str) -> B {
    req.with_header(reqwest::header::CONTENT_TYPE.as_str(), AMZ_JSON_CONTENT_TYPE)
        .with_header(TARGET_HEADER, target)
}

pub(crate) fn apply_headers<B: RequestBuilderExt>(mut req: B, headers: &[(String, String)]) -> B {
    for (name, value) in headers {
        req = req.with_header(name, value);
    }
    req
}

/// Drops any query or fragment from an endpoint and checks that it can carry a path.
pub(crate) fn normalize_endpoint(endpoint: &str) -> Result<Url, Error> {
    let mut url = Url::parse(endpoint)?;
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(Error::InvalidBaseUrl(endpoint.to_string()));
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

/// Endpoint and signing settings resolved from environment variables.
#[derive(Debug)]
pub(crate) struct EnvSettings {
    pub endpoint: String,
    pub region: String,
    pub credentials: Option<Credentials>,
}

impl EnvSettings {
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let region = non_empty(ENV_REGION).or_else(|| non_empty(ENV_DEFAULT_REGION));
        let endpoint_override = non_empty(ENV_ENDPOINT_SERVICE).or_else(|| non_empty(ENV_ENDPOINT));

        let (endpoint, region) = match (endpoint_override, region) {
            (Some(endpoint), Some(region)) => (endpoint, region),
            (Some(endpoint), None) => (endpoint, FALLBACK_SIGNING_REGION.to_string()),
            (None, Some(region)) => (endpoint_for_region(&region), region),
            (None, None) => {
                return Err(Error::Config(format!(
                    "config error: neither {ENV_REGION} nor {ENV_DEFAULT_REGION} is set"
                )))
            }
        };
        let credentials = Credentials::from_lookup(&lookup)?;
        Ok(Self {
            endpoint,
            region,
            credentials,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default, rename = "__type")]
    error_type: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default, rename = "Message")]
    capitalized_message: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.message
            .filter(|message| !message.is_empty())
            .or(self.capitalized_message)
            .filter(|message| !message.is_empty())
    }
}

/// Strips the `namespace#` prefix and `:detail` suffix from an AWS error type.
pub(crate) fn normalize_error_code(raw: &str) -> String {
    let code = raw.rsplit('#').next().unwrap_or(raw);
    let code = code.split(':').next().unwrap_or(code);
    code.trim().to_string()
}

pub(crate) fn parse_error_from_body(status: StatusCode, headers: &HeaderMap, body: &[u8]) -> Error {
    let mut parsed = serde_json::from_slice::<ErrorBody>(body).unwrap_or_default();
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };
    let code = parsed
        .error_type
        .take()
        .or_else(|| header_value(ERROR_TYPE_HEADER))
        .map(|raw| normalize_error_code(&raw))
        .unwrap_or_default();
    let message = parsed
        .into_message()
        .unwrap_or_else(|| fallback_message(status, body));
    Error::Api(ApiError {
        status: status.as_u16(),
        code,
        message,
        request_id: header_value(REQUEST_ID_HEADER),
    })
}
