use super::ServiceQuotasClient;
use crate::error::Error;
use crate::models::{GetServiceQuotaInput, GetServiceQuotaOutput};
use crate::quotas::common::Operation;

impl ServiceQuotasClient {
    /// Retrieves the applied value of a quota.
    pub fn get_service_quota(
        &self,
        input: &GetServiceQuotaInput,
    ) -> Result<GetServiceQuotaOutput, Error> {
        self.call(Operation::GetServiceQuota, input)
    }
}
