// Scripted in-memory controller for unit tests.
//
// Each endpoint has a FIFO of canned results; every call is recorded so
// tests can assert on exact request sequences.

#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::Mutex;

use portbounce_api::models::{ClientDetailResponse, InterfaceResponse, TaskDetail, TaskSubmission};
use portbounce_api::{AdminStatus, Error as ApiError};
use serde_json::{Value, json};

use crate::api::ControllerApi;
use crate::model::{DeploymentMode, MacAddress};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    ClientDetail(String),
    Interface { device_id: String, name: String },
    Submit {
        interface_id: String,
        admin_status: AdminStatus,
        mode: String,
    },
    Task(String),
}

#[derive(Default)]
pub(crate) struct FakeController {
    client_details: Mutex<VecDeque<Result<ClientDetailResponse, ApiError>>>,
    interfaces: Mutex<VecDeque<Result<InterfaceResponse, ApiError>>>,
    submissions: Mutex<VecDeque<Result<TaskSubmission, ApiError>>>,
    tasks: Mutex<VecDeque<Result<TaskDetail, ApiError>>>,
    calls: Mutex<Vec<Call>>,
}

fn from_json<T: serde::de::DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).unwrap()
}

/// A non-2xx response as the api crate reports it.
pub(crate) fn http_error(status: u16, body: &str) -> ApiError {
    ApiError::Http {
        status,
        url: "https://dnac.test/dna/intent/api/v1/interface/int-1".into(),
        body: body.into(),
    }
}

impl FakeController {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_client_detail(self, body: Value) -> Self {
        self.client_details.lock().unwrap().push_back(Ok(from_json(body)));
        self
    }

    pub(crate) fn with_client_detail_error(self, err: ApiError) -> Self {
        self.client_details.lock().unwrap().push_back(Err(err));
        self
    }

    pub(crate) fn with_interface(self, body: Value) -> Self {
        self.interfaces.lock().unwrap().push_back(Ok(from_json(body)));
        self
    }

    /// Queue a successful submission carrying `task_id`.
    pub(crate) fn with_task_id(self, task_id: &str) -> Self {
        self.with_submission_json(json!({ "response": { "taskId": task_id } }))
    }

    pub(crate) fn with_submission_json(self, body: Value) -> Self {
        self.submissions.lock().unwrap().push_back(Ok(from_json(body)));
        self
    }

    pub(crate) fn with_submission_error(self, err: ApiError) -> Self {
        self.submissions.lock().unwrap().push_back(Err(err));
        self
    }

    pub(crate) fn with_task_statuses(self, statuses: &[&str]) -> Self {
        {
            let mut tasks = self.tasks.lock().unwrap();
            for status in statuses {
                tasks.push_back(Ok(from_json(json!({ "response": { "status": status } }))));
            }
        }
        self
    }

    pub(crate) fn with_task_json(self, body: Value) -> Self {
        self.tasks.lock().unwrap().push_back(Ok(from_json(body)));
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn submitted_statuses(&self) -> Vec<AdminStatus> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Submit { admin_status, .. } => Some(admin_status),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn task_lookups(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::Task(_)))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn next<T>(queue: &Mutex<VecDeque<Result<T, ApiError>>>, what: &str) -> Result<T, ApiError> {
    queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| panic!("unexpected {what} call: nothing scripted"))
}

impl ControllerApi for FakeController {
    async fn fetch_client_detail(&self, mac: &MacAddress) -> Result<ClientDetailResponse, ApiError> {
        self.record(Call::ClientDetail(mac.to_string()));
        next(&self.client_details, "client-detail")
    }

    async fn fetch_interface(
        &self,
        device_id: &str,
        interface_name: &str,
    ) -> Result<InterfaceResponse, ApiError> {
        self.record(Call::Interface {
            device_id: device_id.to_owned(),
            name: interface_name.to_owned(),
        });
        next(&self.interfaces, "interface")
    }

    async fn submit_admin_status(
        &self,
        interface_id: &str,
        admin_status: AdminStatus,
        mode: &DeploymentMode,
    ) -> Result<TaskSubmission, ApiError> {
        self.record(Call::Submit {
            interface_id: interface_id.to_owned(),
            admin_status,
            mode: mode.to_string(),
        });
        next(&self.submissions, "submit")
    }

    // Shares the submission script: the scripted body's shape is irrelevant.
    async fn apply_admin_status(
        &self,
        interface_id: &str,
        admin_status: AdminStatus,
        mode: &DeploymentMode,
    ) -> Result<(), ApiError> {
        self.submit_admin_status(interface_id, admin_status, mode)
            .await
            .map(|_| ())
    }

    async fn fetch_task(&self, task_id: &str) -> Result<TaskDetail, ApiError> {
        self.record(Call::Task(task_id.to_owned()));
        next(&self.tasks, "task")
    }
}
