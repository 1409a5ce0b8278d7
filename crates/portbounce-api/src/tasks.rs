// Asynchronous task lookup

use crate::client::CatalystClient;
use crate::error::Error;
use crate::models::TaskDetail;

impl CatalystClient {
    /// Fetch the current state of a controller-side task.
    ///
    /// `GET /dna/intent/api/v1/tasks/{task_id}`
    pub async fn task(&self, task_id: &str) -> Result<TaskDetail, Error> {
        let url = self.intent_url(&["tasks", task_id])?;
        self.get(url, &[]).await
    }
}
