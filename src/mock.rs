use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::error::FetchError;
use crate::types::{PcStatus, SlavePc};

const DELAY_MIN_MS: u32 = 500;
const DELAY_MAX_MS: u32 = 1_500;

const HOUR_MS: f64 = 3_600_000.0;
const DAY_MS: f64 = 86_400_000.0;

/// Simulated backend used when no real fleet endpoint exists. Every call
/// waits a random 500-1500 ms to emulate network latency and then succeeds,
/// so the error path is never exercised here.
pub struct MockFleet;

impl MockFleet {
    pub async fn fetch_slave_pcs(&self) -> Result<Vec<SlavePc>, FetchError> {
        self.simulate_latency().await?;
        Ok(mock_slave_pcs())
    }

    pub async fn update_pc(&self, pc_id: &str) -> Result<(), FetchError> {
        self.simulate_latency().await?;
        web_sys::console::log_1(
            &format!("Mock PC {} updated with new automation features", pc_id).into(),
        );
        Ok(())
    }

    pub async fn update_all_pcs(&self) -> Result<(), FetchError> {
        self.simulate_latency().await?;
        web_sys::console::log_1(&"All mock PCs updated with new automation features".into());
        Ok(())
    }

    pub async fn reboot_pc(&self, pc_id: &str) -> Result<(), FetchError> {
        self.simulate_latency().await?;
        web_sys::console::log_1(&format!("Mock PC {} rebooted", pc_id).into());
        Ok(())
    }

    pub async fn send_task(&self, pc_id: &str, task: &str) -> Result<(), FetchError> {
        self.simulate_latency().await?;
        web_sys::console::log_1(&format!("Mock task sent to PC {}: {}", pc_id, task).into());
        Ok(())
    }

    async fn simulate_latency(&self) -> Result<(), FetchError> {
        let ms = delay_in_range(js_sys::Math::random(), DELAY_MIN_MS, DELAY_MAX_MS);
        sleep_ms(ms as i32).await
    }
}

/// Maps a unit random value onto [min, max], inclusive on both ends.
fn delay_in_range(unit: f64, min: u32, max: u32) -> u32 {
    min + (unit * (max - min + 1) as f64).floor() as u32
}

async fn sleep_ms(ms: i32) -> Result<(), FetchError> {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
    });
    JsFuture::from(promise).await.map(|_| ()).map_err(FetchError::from)
}

/// Fixture fleet matching the canned data the dashboard ships with: one PC
/// fresh, one offline for a day, one last seen an hour ago.
pub fn mock_slave_pcs() -> Vec<SlavePc> {
    let now = js_sys::Date::now();
    let iso = |ms: f64| -> String {
        js_sys::Date::new(&JsValue::from_f64(ms))
            .to_iso_string()
            .into()
    };
    fixture_pcs([iso(now), iso(now - DAY_MS), iso(now - HOUR_MS)])
}

fn fixture_pcs(timestamps: [String; 3]) -> Vec<SlavePc> {
    let [now, day_ago, hour_ago] = timestamps;
    vec![
        SlavePc {
            id: "pc-001".to_string(),
            name: "Slave PC 1".to_string(),
            status: PcStatus::Online,
            last_update: now,
        },
        SlavePc {
            id: "pc-002".to_string(),
            name: "Slave PC 2".to_string(),
            status: PcStatus::Offline,
            last_update: day_ago,
        },
        SlavePc {
            id: "pc-003".to_string(),
            name: "Slave PC 3".to_string(),
            status: PcStatus::Online,
            last_update: hour_ago,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_stays_within_bounds() {
        assert_eq!(delay_in_range(0.0, 500, 1500), 500);
        assert_eq!(delay_in_range(0.999_999, 500, 1500), 1500);
        for i in 0..100 {
            let unit = i as f64 / 100.0;
            let d = delay_in_range(unit, 500, 1500);
            assert!((500..=1500).contains(&d), "delay {} out of range", d);
        }
    }

    #[test]
    fn fixtures_have_stable_ids_and_valid_statuses() {
        let pcs = fixture_pcs([
            "2024-06-01T12:00:00.000Z".to_string(),
            "2024-05-31T12:00:00.000Z".to_string(),
            "2024-06-01T11:00:00.000Z".to_string(),
        ]);
        assert_eq!(pcs.len(), 3);
        let ids: Vec<&str> = pcs.iter().map(|pc| pc.id.as_str()).collect();
        assert_eq!(ids, ["pc-001", "pc-002", "pc-003"]);
        assert!(pcs
            .iter()
            .all(|pc| matches!(pc.status, PcStatus::Online | PcStatus::Offline)));
        assert_eq!(pcs[1].status, PcStatus::Offline);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn mock_list_returns_fixtures() {
        let fleet = MockFleet;
        let pcs = fleet.fetch_slave_pcs().await.unwrap();
        assert_eq!(pcs.len(), 3);
        assert_eq!(pcs[0].id, "pc-001");
    }

    #[wasm_bindgen_test]
    async fn mock_actions_always_succeed() {
        let fleet = MockFleet;
        fleet.update_pc("pc-001").await.unwrap();
        fleet.update_all_pcs().await.unwrap();
        fleet.reboot_pc("pc-001").await.unwrap();
        fleet.send_task("pc-001", "create_gmail").await.unwrap();
    }
}
