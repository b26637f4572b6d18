//! Reconciles a desired quota value against Service Quotas.
//!
//! The host orchestrator owns [`ServiceQuotaState`] and calls the lifecycle
//! entry points on [`ServiceQuotaResource`]. Every entry point mutates the
//! state in place, so fields written before a failure (the binding id, a
//! submitted request id) are still there for the host to persist.

mod api;
mod id;
mod schema;
mod state;

pub use api::QuotaApi;
pub use id::QuotaId;
pub use schema::{
    plan, AttributeSchema, AttributeType, PlannedAction, ResourceSchema,
    SERVICE_QUOTA_ATTRIBUTES, SERVICE_QUOTA_SCHEMA,
};
pub use state::ServiceQuotaState;

use crate::error::Error;
use crate::models::{
    GetRequestedServiceQuotaChangeInput, GetServiceQuotaInput, RequestServiceQuotaIncreaseInput,
    RequestedServiceQuotaChange, ServiceQuota,
};
use log::{debug, warn};

/// Lifecycle adapter for one `aws_servicequotas_service_quota` binding.
pub struct ServiceQuotaResource<C> {
    api: C,
}

impl<C: QuotaApi> ServiceQuotaResource<C> {
    pub fn new(api: C) -> Self {
        Self { api }
    }

    pub fn schema(&self) -> &'static ResourceSchema {
        &SERVICE_QUOTA_SCHEMA
    }

    /// Assigns the id, raises the quota when the configured value exceeds the
    /// applied one, then refreshes the state.
    pub fn create(&self, state: &mut ServiceQuotaState) -> Result<(), Error> {
        let id = QuotaId::new(state.service_code.clone(), state.quota_code.clone());
        state.id = id.to_string();

        let quota = self.fetch_quota(&id)?;
        let current = quota.value.unwrap_or_default();
        if state.value > current {
            let request_id = self.request_increase(&id, state.value)?;
            state.request_id = Some(request_id);
        } else {
            debug!(
                "service quota {id} already at {current}, not requesting {}",
                state.value
            );
        }

        self.read(state)
    }

    /// Refreshes codes and value from the applied quota and, when a request is
    /// tracked, folds its status into the state.
    pub fn read(&self, state: &mut ServiceQuotaState) -> Result<(), Error> {
        let id: QuotaId = state.id.parse()?;

        let quota = self.fetch_quota(&id)?;
        state.service_code = quota
            .service_code
            .unwrap_or_else(|| id.service_code().to_string());
        state.quota_code = quota
            .quota_code
            .unwrap_or_else(|| id.quota_code().to_string());
        state.value = quota.value.unwrap_or_default();

        let Some(request_id) = state.tracked_request_id().map(str::to_string) else {
            return Ok(());
        };

        let change = match self.fetch_requested_change(&request_id) {
            Ok(change) => change,
            Err(err) if err.is_not_found() => {
                warn!("quota increase request {request_id} for {id} no longer exists; clearing it");
                state.clear_request();
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        apply_request_status(state, &request_id, change);
        Ok(())
    }

    /// Requests the configured value unconditionally, then refreshes the state.
    pub fn update(&self, state: &mut ServiceQuotaState) -> Result<(), Error> {
        let id: QuotaId = state.id.parse()?;

        let request_id = self.request_increase(&id, state.value)?;
        state.request_id = Some(request_id);

        self.read(state)
    }

    /// Quotas cannot be lowered through the API, so removal leaves the remote
    /// quota untouched.
    pub fn delete(&self, state: &ServiceQuotaState) -> Result<(), Error> {
        debug!("service quota {} removed from configuration; nothing to delete", state.id);
        Ok(())
    }

    /// Seeds a state from an imported id; the host refreshes it with [`Self::read`].
    pub fn import(&self, id: impl Into<String>) -> ServiceQuotaState {
        ServiceQuotaState {
            id: id.into(),
            ..ServiceQuotaState::default()
        }
    }

    fn fetch_quota(&self, id: &QuotaId) -> Result<ServiceQuota, Error> {
        let context = format!("error getting Service Quotas Service Quota ({id})");
        let input = GetServiceQuotaInput::new(id.service_code(), id.quota_code());
        let output = self
            .api
            .get_service_quota(&input)
            .map_err(|err| Error::context(context.clone(), err))?;
        output.quota.ok_or(Error::EmptyResult { context })
    }

    fn request_increase(&self, id: &QuotaId, desired_value: f64) -> Result<String, Error> {
        let context = format!("error requesting Service Quota ({id}) increase");
        let input =
            RequestServiceQuotaIncreaseInput::new(id.service_code(), id.quota_code(), desired_value);
        let output = self
            .api
            .request_service_quota_increase(&input)
            .map_err(|err| Error::context(context.clone(), err))?;
        let request_id = output
            .requested_quota
            .and_then(|change| change.id)
            .filter(|request_id| !request_id.is_empty())
            .ok_or(Error::EmptyResult { context })?;
        debug!("requested increase of {id} to {desired_value}: request {request_id}");
        Ok(request_id)
    }

    fn fetch_requested_change(
        &self,
        request_id: &str,
    ) -> Result<RequestedServiceQuotaChange, Error> {
        let context =
            format!("error getting Service Quotas Requested Service Quota Change ({request_id})");
        let input = GetRequestedServiceQuotaChangeInput::new(request_id);
        let output = self
            .api
            .get_requested_service_quota_change(&input)
            .map_err(|err| Error::context(context.clone(), err))?;
        output
            .requested_quota
            .ok_or(Error::EmptyResult { context })
    }
}

fn apply_request_status(
    state: &mut ServiceQuotaState,
    request_id: &str,
    change: RequestedServiceQuotaChange,
) {
    state.request_status = change.status.clone();
    match change.status {
        Some(status) if status.is_terminal() => {
            debug!("quota increase request {request_id} resolved as {status}");
            state.request_id = None;
        }
        Some(status) if status.is_open() => {
            if let Some(desired) = change.desired_value {
                state.value = desired;
            }
        }
        Some(status) => {
            warn!("quota increase request {request_id} has unrecognized status {status}");
        }
        None => {
            warn!("quota increase request {request_id} has no status");
        }
    }
}
