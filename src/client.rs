use crate::api::HttpFleet;
use crate::error::FetchError;
use crate::mock::MockFleet;
use crate::types::SlavePc;

/// Set to false once a real fleet-control API exists.
const USE_MOCK_DATA: bool = true;

const DEFAULT_API_URL: &str = "http://localhost:3000/api";

fn api_url() -> &'static str {
    option_env!("FLEET_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Transport strategy for the fleet client. The choice between the live
/// endpoint and the canned backend is made once at construction, so callers
/// (and tests) can inject either arm without touching the call sites.
pub enum FleetBackend {
    Http(HttpFleet),
    Mock(MockFleet),
}

impl FleetBackend {
    pub fn from_config() -> Self {
        if USE_MOCK_DATA {
            FleetBackend::Mock(MockFleet)
        } else {
            FleetBackend::Http(HttpFleet::new(api_url()))
        }
    }

    pub async fn fetch_slave_pcs(&self) -> Result<Vec<SlavePc>, FetchError> {
        match self {
            FleetBackend::Http(fleet) => fleet.fetch_slave_pcs().await,
            FleetBackend::Mock(fleet) => fleet.fetch_slave_pcs().await,
        }
    }

    pub async fn update_pc(&self, pc_id: &str) -> Result<(), FetchError> {
        match self {
            FleetBackend::Http(fleet) => fleet.update_pc(pc_id).await,
            FleetBackend::Mock(fleet) => fleet.update_pc(pc_id).await,
        }
    }

    pub async fn update_all_pcs(&self) -> Result<(), FetchError> {
        match self {
            FleetBackend::Http(fleet) => fleet.update_all_pcs().await,
            FleetBackend::Mock(fleet) => fleet.update_all_pcs().await,
        }
    }

    pub async fn reboot_pc(&self, pc_id: &str) -> Result<(), FetchError> {
        match self {
            FleetBackend::Http(fleet) => fleet.reboot_pc(pc_id).await,
            FleetBackend::Mock(fleet) => fleet.reboot_pc(pc_id).await,
        }
    }

    pub async fn send_task(&self, pc_id: &str, task: &str) -> Result<(), FetchError> {
        match self {
            FleetBackend::Http(fleet) => fleet.send_task(pc_id, task).await,
            FleetBackend::Mock(fleet) => fleet.send_task(pc_id, task).await,
        }
    }
}
