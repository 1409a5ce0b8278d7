// Client detail endpoint

use tracing::debug;

use crate::client::CatalystClient;
use crate::error::Error;
use crate::models::ClientDetailResponse;

impl CatalystClient {
    /// Look up an endpoint by hardware address.
    ///
    /// `GET /dna/intent/api/v1/client-detail?macAddress={mac}`
    pub async fn client_detail(&self, mac_address: &str) -> Result<ClientDetailResponse, Error> {
        let url = self.intent_url(&["client-detail"])?;
        debug!(mac = mac_address, "fetching client detail");
        self.get(url, &[("macAddress", mac_address)]).await
    }
}
