use crate::client_defaults::{endpoint_for_region, DEFAULT_TIMEOUT};
use crate::error::{
    read_body_with_limit, Error, CONFIG_ERROR_REDIRECT_WITH_AUTH, MAX_ERROR_BODY_BYTES,
};
use crate::sigv4::SigV4Signer;
use reqwest::blocking::{Client as HttpClient, RequestBuilder, Response};
use reqwest::{Certificate, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::env;
use std::time::Duration;
use url::Url;

use super::common;

mod quota;
mod requests;
#[cfg(test)]
mod tests;

/// Builder for [`ServiceQuotasClient`].
///
/// Redirects are disabled by default; enabling them is rejected at build time
/// when an auth provider is configured.
pub struct ServiceQuotasClientBuilder {
    endpoint: Url,
    timeout: Option<Duration>,
    disable_redirect: bool,
    ca_certs: Vec<Certificate>,
    auth: Option<common::AuthProvider>,
}

impl ServiceQuotasClientBuilder {
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
    ///
    /// Requests are signed only when `AWS_ACCESS_KEY_ID` and
    /// `AWS_SECRET_ACCESS_KEY` are both set.
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

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn disable_redirect(mut self, disable: bool) -> Self {
        self.disable_redirect = disable;
        self
    }

    pub fn add_ca_cert_pem(mut self, ca_pem: &[u8]) -> Result<Self, Error> {
        self.ca_certs.push(Certificate::from_pem(ca_pem)?);
        Ok(self)
    }

    pub fn sigv4(mut self, signer: SigV4Signer) -> Self {
        self.auth = Some(common::AuthProvider::SigV4(signer));
        self
    }

    /// Sends a fixed header on every request, e.g. for a signing proxy.
    pub fn static_auth_header(mut self, header: impl Into<String>, value: impl Into<String>) -> Self {
        self.auth = Some(common::AuthProvider::StaticHeader {
            header: header.into(),
            value: value.into(),
        });
        self
    }

    pub fn build(self) -> Result<ServiceQuotasClient, Error> {
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
        Ok(ServiceQuotasClient {
            endpoint: self.endpoint,
            http,
            auth: self.auth,
        })
    }
}

/// Blocking client for the Service Quotas JSON API.
pub struct ServiceQuotasClient {
    endpoint: Url,
    http: HttpClient,
    auth: Option<common::AuthProvider>,
}

impl ServiceQuotasClient {
    pub fn builder(endpoint: impl AsRef<str>) -> Result<ServiceQuotasClientBuilder, Error> {
        ServiceQuotasClientBuilder::new(endpoint)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn call<I, O>(&self, operation: common::Operation, input: &I) -> Result<O, Error>
    where
        I: Serialize,
        O: DeserializeOwned,
    {
        let target = operation.target();
        let body = serde_json::to_vec(input)?;
        let mut req = self.http.post(self.endpoint.clone());
        req = common::apply_protocol_headers(req, &target);
        req = self.apply_auth(req, &target, &body)?;
        let resp = req.body(body).send()?;
        self.expect_ok_json(resp)
    }

    fn apply_auth(
        &self,
        req: RequestBuilder,
        target: &str,
        body: &[u8],
    ) -> Result<RequestBuilder, Error> {
        let headers = common::auth_headers(&self.auth, &self.endpoint, target, body)?;
        Ok(common::apply_headers(req, &headers))
    }

    fn expect_ok_json<T: DeserializeOwned>(&self, resp: Response) -> Result<T, Error> {
        if resp.status() == StatusCode::OK {
            resp.json::<T>().map_err(Error::from)
        } else {
            self.parse_error(resp)
        }
    }

    fn parse_error<T>(&self, mut resp: Response) -> Result<T, Error> {
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = read_body_with_limit(&mut resp, MAX_ERROR_BODY_BYTES)?;
        Err(common::parse_error_from_body(status, &headers, &body))
    }
}
