// ── Controller capability ──
//
// The calls the workflow needs from an authenticated transport.
// `CatalystClient` is the production implementation; tests substitute
// scripted fakes. Errors stay in the api crate's shape so the
// orchestrator can inspect raw HTTP bodies before they are translated.

use std::future::Future;

use portbounce_api::models::{ClientDetailResponse, InterfaceResponse, TaskDetail, TaskSubmission};
use portbounce_api::{AdminStatus, CatalystClient, Error as ApiError};

use crate::model::{DeploymentMode, MacAddress};

pub trait ControllerApi: Sync {
    fn fetch_client_detail(
        &self,
        mac: &MacAddress,
    ) -> impl Future<Output = Result<ClientDetailResponse, ApiError>> + Send;

    fn fetch_interface(
        &self,
        device_id: &str,
        interface_name: &str,
    ) -> impl Future<Output = Result<InterfaceResponse, ApiError>> + Send;

    fn submit_admin_status(
        &self,
        interface_id: &str,
        admin_status: AdminStatus,
        mode: &DeploymentMode,
    ) -> impl Future<Output = Result<TaskSubmission, ApiError>> + Send;

    /// Same change as `submit_admin_status`, acknowledged but not tracked.
    fn apply_admin_status(
        &self,
        interface_id: &str,
        admin_status: AdminStatus,
        mode: &DeploymentMode,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn fetch_task(&self, task_id: &str)
    -> impl Future<Output = Result<TaskDetail, ApiError>> + Send;
}

impl ControllerApi for CatalystClient {
    async fn fetch_client_detail(&self, mac: &MacAddress) -> Result<ClientDetailResponse, ApiError> {
        self.client_detail(mac.as_str()).await
    }

    async fn fetch_interface(
        &self,
        device_id: &str,
        interface_name: &str,
    ) -> Result<InterfaceResponse, ApiError> {
        self.interface_by_name(device_id, interface_name).await
    }

    async fn submit_admin_status(
        &self,
        interface_id: &str,
        admin_status: AdminStatus,
        mode: &DeploymentMode,
    ) -> Result<TaskSubmission, ApiError> {
        self.update_admin_status(interface_id, admin_status, mode.as_str())
            .await
    }

    async fn apply_admin_status(
        &self,
        interface_id: &str,
        admin_status: AdminStatus,
        mode: &DeploymentMode,
    ) -> Result<(), ApiError> {
        CatalystClient::apply_admin_status(self, interface_id, admin_status, mode.as_str()).await
    }

    async fn fetch_task(&self, task_id: &str) -> Result<TaskDetail, ApiError> {
        self.task(task_id).await
    }
}

impl<T: ControllerApi> ControllerApi for &T {
    fn fetch_client_detail(
        &self,
        mac: &MacAddress,
    ) -> impl Future<Output = Result<ClientDetailResponse, ApiError>> + Send {
        (**self).fetch_client_detail(mac)
    }

    fn fetch_interface(
        &self,
        device_id: &str,
        interface_name: &str,
    ) -> impl Future<Output = Result<InterfaceResponse, ApiError>> + Send {
        (**self).fetch_interface(device_id, interface_name)
    }

    fn submit_admin_status(
        &self,
        interface_id: &str,
        admin_status: AdminStatus,
        mode: &DeploymentMode,
    ) -> impl Future<Output = Result<TaskSubmission, ApiError>> + Send {
        (**self).submit_admin_status(interface_id, admin_status, mode)
    }

    fn apply_admin_status(
        &self,
        interface_id: &str,
        admin_status: AdminStatus,
        mode: &DeploymentMode,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        (**self).apply_admin_status(interface_id, admin_status, mode)
    }

    fn fetch_task(
        &self,
        task_id: &str,
    ) -> impl Future<Output = Result<TaskDetail, ApiError>> + Send {
        (**self).fetch_task(task_id)
    }
}
