use serde::{Deserialize, Serialize};

/// One managed machine as reported by the fleet endpoint. The client only
/// reads these; the collection is replaced wholesale on refresh.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SlavePc {
    pub id: String,
    pub name: String,
    pub status: PcStatus,
    /// ISO-8601 timestamp of the last known status refresh.
    #[serde(rename = "lastUpdate")]
    pub last_update: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PcStatus {
    Online,
    Offline,
}

impl PcStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PcStatus::Online => "online",
            PcStatus::Offline => "offline",
        }
    }

    /// Inline style for the status badge. Online is always green, offline
    /// always red, so the card affordance maps deterministically to status.
    pub fn badge_style(&self) -> &'static str {
        match self {
            PcStatus::Online => "background:#d4edda; color:#155724;",
            PcStatus::Offline => "background:#f8d7da; color:#721c24;",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_lowercase() {
        assert_eq!(serde_json::to_string(&PcStatus::Online).unwrap(), "\"online\"");
        assert_eq!(serde_json::to_string(&PcStatus::Offline).unwrap(), "\"offline\"");
        let s: PcStatus = serde_json::from_str("\"offline\"").unwrap();
        assert_eq!(s, PcStatus::Offline);
    }

    #[test]
    fn slave_pc_deserializes_wire_shape() {
        let json = r#"{
            "id": "pc-001",
            "name": "Slave PC 1",
            "status": "online",
            "lastUpdate": "2024-06-01T12:00:00.000Z"
        }"#;
        let pc: SlavePc = serde_json::from_str(json).unwrap();
        assert_eq!(pc.id, "pc-001");
        assert_eq!(pc.status, PcStatus::Online);
        assert_eq!(pc.last_update, "2024-06-01T12:00:00.000Z");
    }

    #[test]
    fn badge_styles_differ_by_status() {
        assert_ne!(PcStatus::Online.badge_style(), PcStatus::Offline.badge_style());
        assert!(PcStatus::Online.badge_style().contains("#155724"));
        assert!(PcStatus::Offline.badge_style().contains("#721c24"));
    }
}
