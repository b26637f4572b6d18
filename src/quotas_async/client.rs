use crate::client_defaults::{endpoint_for_region, DEFAULT_TIMEOUT};
use crate::error::{
    read_body_with_limit_async, Error, CONFIG_ERROR_REDIRECT_WITH_AUTH, MAX_ERROR_BODY_BYTES,
};
use crate::quotas::common;
use crate::sigv4::SigV4Signer;
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Certificate, Client as HttpClient, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::env;
use std::time::Duration;
use url::Url;

mod quota;
mod requests;

/// Builder for [`ServiceQuotasAsyncClient`].
///
/// Available when the `async-client` feature is enabled. Accepts the same
/// endpoint and auth settings as the blocking builder.
pub struct ServiceQuotasAsyncClientBuilder {
    endpoint: Url,
    timeout: Option<Duration>,
    disable_redirect: bool,
    ca_certs: Vec<Certificate>,
    auth: Option<common::AuthProvider>,
}

impl ServiceQuotasAsyncClientBuilder {
    /// Creates a builder for the given endpoint URL.
    pub fn new(endpoint: impl AsRef<str>) -> Result<Self, Error> {
        Ok(Self {
            endpoint: common::normalize_endpoint(endpoint.as_ref())?,
            timeout: Some(DEFAULT_TIMEOUT),
            disable_redirect: true,
            ca_certs: Vec::new(),
            auth: None,
        })
    }

    /// Uses the public Service Quotas endpoint of `region`.
    pub fn for_region(region: &str) -> Result<Self, Error> {
        Self::new(endpoint_for_region(region))
    }

    /// Configures endpoint, region and credentials from `AWS_*` environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let settings = common::EnvSettings::from_lookup(lookup)?;
        let mut builder = Self::new(&settings.endpoint)?;
        if let Some(credentials) = settings.credentials {
            builder = builder.sigv4(SigV4Signer::new(credentials, settings.region));
        }
        Ok(builder)
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enables or disables HTTP redirects.
    pub fn disable_redirect(mut self, disable: bool) -> Self {
        self.disable_redirect = disable;
        self
    }

    /// Adds a PEM-encoded CA certificate to the trust store.
    pub fn add_ca_cert_pem(mut self, ca_pem: &[u8]) -> Result<Self, Error> {
        self.ca_certs.push(Certificate::from_pem(ca_pem)?);
        Ok(self)
    }

    /// Signs every request with AWS Signature Version 4.
    pub fn sigv4(mut self, signer: SigV4Signer) -> Self {
        self.auth = Some(common::AuthProvider::SigV4(signer));
        self
    }

    /// Sends a fixed header on every request.
    pub fn static_auth_header(
        mut self,
        header: impl AsRef<str>,
        value: impl Into<String>,
    ) -> Result<Self, Error> {
        let header = header.as_ref().to_string();
        HeaderName::from_bytes(header.as_bytes())
            .map_err(|e| Error::Config(format!("config error: invalid header name: {e}")))?;
        self.auth = Some(common::AuthProvider::StaticHeader {
            header,
            value: value.into(),
        });
        Ok(self)
    }

    /// Builds the async client from the configured options.
    pub fn build(self) -> Result<ServiceQuotasAsyncClient, Error> {
        if self.auth.is_some() && !self.disable_redirect {
            return Err(Error::Config(CONFIG_ERROR_REDIRECT_WITH_AUTH.to_string()));
        }
        let mut builder = HttpClient::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if self.disable_redirect {
            builder = builder.redirect(reqwest::redirect::Policy::none());
        }
        for cert in self.ca_certs {
            builder = builder.add_root_certificate(cert);
        }
        let http = builder.build()?;
        Ok(ServiceQuotasAsyncClient {
            endpoint: self.endpoint,
            http,
            auth: self.auth,
        })
    }
}

/// Async Service Quotas client (requires the `async-client` feature).
pub struct ServiceQuotasAsyncClient {
    endpoint: Url,
    http: HttpClient,
    auth: Option<common::AuthProvider>,
}

impl ServiceQuotasAsyncClient {
    /// Returns a builder for an async client.
    pub fn builder(endpoint: impl AsRef<str>) -> Result<ServiceQuotasAsyncClientBuilder, Error> {
        ServiceQuotasAsyncClientBuilder::new(endpoint)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn call<I, O>(&self, operation: common::Operation, input: &I) -> Result<O, Error>
    where
        I: Serialize,
        O: DeserializeOwned,
    {
        let target = operation.target();
        let body = serde_json::to_vec(input)?;
        let mut req = self.http.post(self.endpoint.clone());
        req = common::apply_protocol_headers(req, &target);
        req = self.apply_auth(req, &target, &body)?;
        let resp = req.body(body).send().await?;
        self.expect_ok_json(resp).await
    }

    fn apply_auth(
        &self,
        mut req: RequestBuilder,
        target: &str,
        body: &[u8],
    ) -> Result<RequestBuilder, Error> {
        for (name, value) in common::auth_headers(&self.auth, &self.endpoint, target, body)? {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::Config(format!("config error: invalid header name: {e}")))?;
            let header_value = HeaderValue::from_str(&value)
                .map_err(|e| Error::Signing(format!("invalid auth header value: {e}")))?;
            req = req.header(header_name, header_value);
        }
        Ok(req)
    }

    async fn expect_ok_json<T: DeserializeOwned>(&self, resp: Response) -> Result<T, Error> {
        if resp.status() == StatusCode::OK {
            resp.json::<T>().await.map_err(Error::from)
        } else {
            self.parse_error(resp).await
        }
    }

    async fn parse_error<T>(&self, mut resp: Response) -> Result<T, Error> {
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = read_body_with_limit_async(&mut resp, MAX_ERROR_BODY_BYTES).await?;
        Err(common::parse_error_from_body(status, &headers, &body))
    }
}
