use crate::client_defaults::SERVICE_NAME;
use crate::error::Error;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use time::OffsetDateTime;
use url::Url;

use super::Credentials;

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";
const TERMINATOR: &str = "aws4_request";

/// Signs Service Quotas requests with AWS Signature Version 4.
#[derive(Debug, Clone)]
pub struct SigV4Signer {
    credentials: Credentials,
    region: String,
    service: String,
}

/// The parts of an outgoing request covered by the signature.
pub(crate) struct SigningRequest<'a> {
    pub method: &'a str,
    pub url: &'a Url,
    pub content_type: &'a str,
    pub target: &'a str,
    pub body: &'a [u8],
}

impl SigV4Signer {
    pub fn new(credentials: Credentials, region: impl Into<String>) -> Self {
        Self {
            credentials,
            region: region.into(),
            service: SERVICE_NAME.to_string(),
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Returns the headers to attach to `request`, signed at the current time.
    pub(crate) fn sign(
        &self,
        request: &SigningRequest<'_>,
    ) -> Result<Vec<(&'static str, String)>, Error> {
        self.sign_at(request, OffsetDateTime::now_utc())
    }

    pub(crate) fn sign_at(
        &self,
        request: &SigningRequest<'_>,
        now: OffsetDateTime,
    ) -> Result<Vec<(&'static str, String)>, Error> {
        let (date, amz_date) = format_timestamps(now);
        let host = host_header(request.url)?;

        let mut canonical_headers = vec![
            ("content-type", request.content_type.to_string()),
            ("host", host),
            ("x-amz-date", amz_date.clone()),
        ];
        if let Some(token) = self.credentials.session_token() {
            canonical_headers.push(("x-amz-security-token", token.to_string()));
        }
        canonical_headers.push(("x-amz-target", request.target.to_string()));

        let signed_headers = canonical_headers
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(";");
        let header_block: String = canonical_headers
            .iter()
            .map(|(name, value)| format!("{name}:{}\n", value.trim()))
            .collect();
        let canonical_request = format!(
            "{}\n{}\n{}\n{}\n{}\n{}",
            request.method,
            canonical_uri(request.url),
            request.url.query().unwrap_or(""),
            header_block,
            signed_headers,
            hex::encode(Sha256::digest(request.body)),
        );

        let scope = format!("{date}/{}/{}/{TERMINATOR}", self.region, self.service);
        let string_to_sign = format!(
            "{ALGORITHM}\n{amz_date}\n{scope}\n{}",
            hex::encode(Sha256::digest(canonical_request.as_bytes()))
        );

        let key = signing_key(
            self.credentials.secret_access_key(),
            &date,
            &self.region,
            &self.service,
        )?;
        let signature = hex::encode(hmac_sha256(&key, string_to_sign.as_bytes())?);

        let authorization = format!(
            "{ALGORITHM} Credential={}/{scope}, SignedHeaders={signed_headers}, Signature={signature}",
            self.credentials.access_key_id()
        );

        let mut headers = vec![("Authorization", authorization), ("X-Amz-Date", amz_date)];
        if let Some(token) = self.credentials.session_token() {
            headers.push(("X-Amz-Security-Token", token.to_string()));
        }
        Ok(headers)
    }
}

fn format_timestamps(now: OffsetDateTime) -> (String, String) {
    let date = format!(
        "{:04}{:02}{:02}",
        now.year(),
        u8::from(now.month()),
        now.day()
    );
    let amz_date = format!(
        "{date}T{:02}{:02}{:02}Z",
        now.hour(),
        now.minute(),
        now.second()
    );
    (date, amz_date)
}

/// Encodes every path segment of the already-encoded URL path once more,
/// as SigV4 requires for every service except S3.
fn canonical_uri(url: &Url) -> String {
    let path = url.path();
    if path.is_empty() {
        return "/".to_string();
    }
    path.split('/')
        .map(uri_encode)
        .collect::<Vec<_>>()
        .join("/")
}

fn uri_encode(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(char::from(byte))
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

fn host_header(url: &Url) -> Result<String, Error> {
    let host = url
        .host_str()
        .ok_or_else(|| Error::Signing(format!("endpoint has no host: {url}")))?;
    Ok(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>, Error> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|e| Error::Signing(e.to_string()))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

fn signing_key(secret: &str, date: &str, region: &str, service: &str) -> Result<Vec<u8>, Error> {
    let k_date = hmac_sha256(format!("AWS4{secret}").as_bytes(), date.as_bytes())?;
    let k_region = hmac_sha256(&k_date, region.as_bytes())?;
    let k_service = hmac_sha256(&k_region, service.as_bytes())?;
    hmac_sha256(&k_service, TERMINATOR.as_bytes())
}
