use crate::error::Error;
use crate::models::{
    GetRequestedServiceQuotaChangeInput, GetRequestedServiceQuotaChangeOutput,
    GetServiceQuotaInput, GetServiceQuotaOutput, RequestServiceQuotaIncreaseInput,
    RequestServiceQuotaIncreaseOutput,
};
use crate::quotas::ServiceQuotasClient;

/// The Service Quotas operations the binding reconciler depends on.
pub trait QuotaApi {
    fn get_service_quota(&self, input: &GetServiceQuotaInput)
        -> Result<GetServiceQuotaOutput, Error>;

    fn request_service_quota_increase(
        &self,
        input: &RequestServiceQuotaIncreaseInput,
    ) -> Result<RequestServiceQuotaIncreaseOutput, Error>;

    fn get_requested_service_quota_change(
        &self,
        input: &GetRequestedServiceQuotaChangeInput,
    ) -> Result<GetRequestedServiceQuotaChangeOutput, Error>;
}

impl QuotaApi for ServiceQuotasClient {
    fn get_service_quota(
        &self,
        input: &GetServiceQuotaInput,
    ) -> Result<GetServiceQuotaOutput, Error> {
        ServiceQuotasClient::get_service_quota(self, input)
    }

    fn request_service_quota_increase(
        &self,
        input: &RequestServiceQuotaIncreaseInput,
    ) -> Result<RequestServiceQuotaIncreaseOutput, Error> {
        ServiceQuotasClient::request_service_quota_increase(self, input)
    }

    fn get_requested_service_quota_change(
        &self,
        input: &GetRequestedServiceQuotaChangeInput,
    ) -> Result<GetRequestedServiceQuotaChangeOutput, Error> {
        ServiceQuotasClient::get_requested_service_quota_change(self, input)
    }
}

impl<T: QuotaApi + ?Sized> QuotaApi for &T {
    fn get_service_quota(
        &self,
        input: &GetServiceQuotaInput,
    ) -> Result<GetServiceQuotaOutput, Error> {
        (**self).get_service_quota(input)
    }

    fn request_service_quota_increase(
        &self,
        input: &RequestServiceQuotaIncreaseInput,
    ) -> Result<RequestServiceQuotaIncreaseOutput, Error> {
        (**self).request_service_quota_increase(input)
    }

    fn get_requested_service_quota_change(
        &self,
        input: &GetRequestedServiceQuotaChangeInput,
    ) -> Result<GetRequestedServiceQuotaChangeOutput, Error> {
        (**self).get_requested_service_quota_change(input)
    }
}
