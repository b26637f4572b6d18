use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Composite identifier of a quota binding, `SERVICE-CODE/QUOTA-CODE`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuotaId {
    service_code: String,
    quota_code: String,
}

impl QuotaId {
    pub fn new(service_code: impl Into<String>, quota_code: impl Into<String>) -> Self {
        Self {
            service_code: service_code.into(),
            quota_code: quota_code.into(),
        }
    }

    pub fn service_code(&self) -> &str {
        &self.service_code
    }

    pub fn quota_code(&self) -> &str {
        &self.quota_code
    }
}

impl FromStr for QuotaId {
    type Err = Error;

    /// Splits on the first `/` only; both halves must be non-empty.
    fn from_str(id: &str) -> Result<Self, Self::Err> {
        match id.split_once('/') {
            Some((service_code, quota_code))
                if !service_code.is_empty() && !quota_code.is_empty() =>
            {
                Ok(QuotaId::new(service_code, quota_code))
            }
            _ => Err(Error::InvalidId(id.to_string())),
        }
    }
}

impl fmt::Display for QuotaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.service_code, self.quota_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_service_and_quota_code() {
        let id: QuotaId = "ec2/L-1234".parse().expect("parse");
        assert_eq!(id.service_code(), "ec2");
        assert_eq!(id.quota_code(), "L-1234");
        assert_eq!(id.to_string(), "ec2/L-1234");
    }

    #[test]
    fn only_first_delimiter_is_significant() {
        let id: QuotaId = "vpc/L-1/extra".parse().expect("parse");
        assert_eq!(id.service_code(), "vpc");
        assert_eq!(id.quota_code(), "L-1/extra");
    }

    #[test]
    fn rejects_malformed_ids() {
        for raw in ["invalid", "ec2/", "/L-1234", "", "/"] {
            let err = raw.parse::<QuotaId>().expect_err(raw);
            assert!(matches!(err, Error::InvalidId(ref id) if id == raw), "{raw}");
        }
        let err = "ec2/".parse::<QuotaId>().expect_err("trailing slash");
        assert_eq!(
            err.to_string(),
            "unexpected format of ID (ec2/), expected SERVICE-CODE/QUOTA-CODE"
        );
    }
}
