mod operations;
mod quota;
mod requested_change;

pub use operations::{
    GetRequestedServiceQuotaChangeInput, GetRequestedServiceQuotaChangeOutput,
    GetServiceQuotaInput, GetServiceQuotaOutput, RequestServiceQuotaIncreaseInput,
    RequestServiceQuotaIncreaseOutput,
};
pub use quota::{ErrorReason, MetricInfo, QuotaPeriod, ServiceQuota};
pub use requested_change::{RequestStatus, RequestedServiceQuotaChange};
