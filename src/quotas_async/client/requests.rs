use super::ServiceQuotasAsyncClient;
use crate::error::Error;
use crate::models::{
    GetRequestedServiceQuotaChangeInput, GetRequestedServiceQuotaChangeOutput,
    RequestServiceQuotaIncreaseInput, RequestServiceQuotaIncreaseOutput,
};
use crate::quotas::common::Operation;

impl ServiceQuotasAsyncClient {
    /// Submits a request to raise a quota to the desired value.
    pub async fn request_service_quota_increase(
        &self,
        input: &RequestServiceQuotaIncreaseInput,
    ) -> Result<RequestServiceQuotaIncreaseOutput, Error> {
        self.call(Operation::RequestServiceQuotaIncrease, input)
            .await
    }

    /// Retrieves a previously submitted quota increase request by id.
    pub async fn get_requested_service_quota_change(
        &self,
        input: &GetRequestedServiceQuotaChangeInput,
    ) -> Result<GetRequestedServiceQuotaChangeOutput, Error> {
        self.call(Operation::GetRequestedServiceQuotaChange, input)
            .await
    }
}
