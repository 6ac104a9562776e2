use std::collections::HashMap;
use std::rc::Rc;

use yew::functional::Reducible;

/// Sentinel key for fleet-wide actions.
pub const ALL_PCS: &str = "all";

/// Append-only, per-machine action log. Entries are free-text lines kept in
/// insertion order; nothing is ever reordered, deduplicated, or trimmed
/// (unbounded growth is a known limitation of the dashboard).
#[derive(Clone, PartialEq, Debug, Default)]
pub struct LogStore {
    entries: HashMap<String, Vec<String>>,
}

impl LogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, key: &str, message: impl Into<String>) {
        self.entries
            .entry(key.to_string())
            .or_default()
            .push(message.into());
    }

    /// Lines recorded for `key`, oldest first. Unknown keys yield an empty
    /// slice, never an error.
    pub fn get(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

pub enum LogAction {
    Append { key: String, message: String },
}

/// Appends go through a reducer so completions of overlapping async actions
/// each build on the latest store instead of a stale render snapshot.
impl Reducible for LogStore {
    type Action = LogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LogAction::Append { key, message } => next.append(&key, message),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_yields_empty_slice() {
        let logs = LogStore::new();
        assert!(logs.get("pc-404").is_empty());
    }

    #[test]
    fn appends_preserve_insertion_order() {
        let mut logs = LogStore::new();
        for i in 0..5 {
            logs.append("pc-001", format!("line {}", i));
        }
        logs.append(ALL_PCS, "fleet-wide line");

        let lines = logs.get("pc-001");
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "line 0");
        assert_eq!(lines[4], "line 4");
        assert_eq!(logs.get(ALL_PCS), ["fleet-wide line"]);
    }

    #[test]
    fn keys_are_independent() {
        let mut logs = LogStore::new();
        logs.append("pc-001", "a");
        logs.append("pc-002", "b");
        assert_eq!(logs.get("pc-001"), ["a"]);
        assert_eq!(logs.get("pc-002"), ["b"]);
    }

    #[test]
    fn reducer_builds_on_the_previous_store() {
        let store = Rc::new(LogStore::new());
        let store = store.reduce(LogAction::Append {
            key: "pc-001".to_string(),
            message: "first".to_string(),
        });
        let store = store.reduce(LogAction::Append {
            key: "pc-001".to_string(),
            message: "second".to_string(),
        });
        assert_eq!(store.get("pc-001"), ["first", "second"]);
    }

    #[test]
    fn duplicate_messages_are_kept() {
        let mut logs = LogStore::new();
        logs.append("pc-001", "PC rebooted successfully");
        logs.append("pc-001", "PC rebooted successfully");
        assert_eq!(logs.get("pc-001").len(), 2);
    }
}
