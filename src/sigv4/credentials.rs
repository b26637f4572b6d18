use crate::error::Error;
use std::fmt;

pub(crate) const ENV_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub(crate) const ENV_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub(crate) const ENV_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";

/// Static AWS credentials used to sign requests.
#[derive(Clone)]
pub struct Credentials {
    access_key_id: String,
    secret_access_key: String,
    session_token: Option<String>,
}

impl Credentials {
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }

    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    /// Reads `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and the optional
    /// `AWS_SESSION_TOKEN` through `lookup`.
    ///
    /// Returns `Ok(None)` when no access key is set and a config error when
    /// only one half of the key pair is present.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Option<Self>, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let access_key_id = non_empty(ENV_ACCESS_KEY_ID);
        let secret_access_key = non_empty(ENV_SECRET_ACCESS_KEY);
        match (access_key_id, secret_access_key) {
            (None, None) => Ok(None),
            (Some(access_key_id), Some(secret_access_key)) => {
                let mut credentials = Credentials::new(access_key_id, secret_access_key);
                credentials.session_token = non_empty(ENV_SESSION_TOKEN);
                Ok(Some(credentials))
            }
            (Some(_), None) => Err(Error::Config(format!(
                "config error: {ENV_ACCESS_KEY_ID} is set but {ENV_SECRET_ACCESS_KEY} is not"
            ))),
            (None, Some(_)) => Err(Error::Config(format!(
                "config error: {ENV_SECRET_ACCESS_KEY} is set but {ENV_ACCESS_KEY_ID} is not"
            ))),
        }
    }

    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub(crate) fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
