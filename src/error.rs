use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;

pub(crate) const MAX_ERROR_BODY_BYTES: usize = 64 * 1024;
pub(crate) const CONFIG_ERROR_REDIRECT_WITH_AUTH: &str =
    "config error: request signing requires redirects to be disabled";

/// Error code returned when a requested resource (quota or change request) does not exist.
pub const NO_SUCH_RESOURCE: &str = "NoSuchResourceException";

/// Error payload decoded from a non-success Service Quotas response.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ApiError {
    pub status: u16,
    pub code: String,
    pub message: String,
    pub request_id: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = if self.code.is_empty() {
            self.status.to_string()
        } else {
            self.code.clone()
        };
        if self.message.is_empty() {
            write!(f, "status={}, code={}", self.status, code)
        } else {
            write!(
                f,
                "status={}, code={}, message={}",
                self.status, code, self.message
            )
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid endpoint url: {0}")]
    InvalidBaseUrl(String),
    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Config(String),
    #[error("signing error: {0}")]
    Signing(String),
    #[error("unexpected format of ID ({0}), expected SERVICE-CODE/QUOTA-CODE")]
    InvalidId(String),
    #[error("{context}: empty result")]
    EmptyResult { context: String },
    #[error("{context}: {source}")]
    Operation {
        context: String,
        #[source]
        source: Box<Error>,
    },
    #[error("service quotas api error: {0}")]
    Api(ApiError),
}

impl Error {
    pub(crate) fn context(context: impl Into<String>, source: Error) -> Self {
        Error::Operation {
            context: context.into(),
            source: Box::new(source),
        }
    }

    /// Returns the upstream API error, looking through contextual wrappers.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            Error::Operation { source, .. } => source.api_error(),
            _ => None,
        }
    }

    /// True when the upstream API reported `NoSuchResourceException`.
    pub fn is_not_found(&self) -> bool {
        self.api_error()
            .map(|err| err.code == NO_SUCH_RESOURCE)
            .unwrap_or(false)
    }
}

pub(crate) fn read_body_with_limit(
    resp: &mut reqwest::blocking::Response,
    limit: usize,
) -> Result<Vec<u8>, Error> {
    let mut body = Vec::new();
    resp.take(limit as u64).read_to_end(&mut body)?;
    Ok(body)
}

#[cfg(feature = "async-client")]
pub(crate) async fn read_body_with_limit_async(
    resp: &mut reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, Error> {
    let mut body = Vec::new();
    while let Some(chunk) = resp.chunk().await? {
        let remaining = limit.saturating_sub(body.len());
        if remaining == 0 {
            break;
        }
        let take = chunk.len().min(remaining);
        body.extend_from_slice(&chunk[..take]);
    }
    Ok(body)
}

pub(crate) fn fallback_message(status: reqwest::StatusCode, body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body).trim().to_string();
    if !text.is_empty() {
        return text;
    }
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("http status {}", status.as_u16()))
}
