#![forbid(unsafe_code)]

mod client_defaults;
mod error;
mod models;
mod quotas;
#[cfg(feature = "async-client")]
mod quotas_async;
mod resource;
mod sigv4;

pub use error::{ApiError, Error, NO_SUCH_RESOURCE};

pub use models::{
    ErrorReason, GetRequestedServiceQuotaChangeInput, GetRequestedServiceQuotaChangeOutput,
    GetServiceQuotaInput, GetServiceQuotaOutput, MetricInfo, QuotaPeriod,
    RequestServiceQuotaIncreaseInput, RequestServiceQuotaIncreaseOutput, RequestStatus,
    RequestedServiceQuotaChange, ServiceQuota,
};

pub use quotas::{ServiceQuotasClient, ServiceQuotasClientBuilder};
#[cfg(feature = "async-client")]
pub use quotas_async::{ServiceQuotasAsyncClient, ServiceQuotasAsyncClientBuilder};

pub use resource::{
    plan, AttributeSchema, AttributeType, PlannedAction, QuotaApi, QuotaId, ResourceSchema,
    ServiceQuotaResource, ServiceQuotaState, SERVICE_QUOTA_ATTRIBUTES, SERVICE_QUOTA_SCHEMA,
};

pub use sigv4::{Credentials, SigV4Signer};
