use std::fmt;

use wasm_bindgen::JsValue;

/// Errors surfaced by the fleet client. `Network` covers transport failures,
/// timeouts, and aborts; `Api` means the endpoint answered with a non-success
/// response, optionally carrying a `{ "message": ... }` body.
#[derive(Clone, PartialEq, Debug)]
pub enum FetchError {
    Network(String),
    Api(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {}", msg),
            FetchError::Api(msg) => write!(f, "API error: {}", msg),
        }
    }
}

impl From<JsValue> for FetchError {
    fn from(value: JsValue) -> Self {
        // fetch rejections come back as DOMException-ish JsValues; an aborted
        // call (timeout) lands here too.
        let msg = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        FetchError::Network(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lines_are_distinct_per_kind() {
        let net = FetchError::Network("timeout".to_string()).to_string();
        let api = FetchError::Api("device busy".to_string()).to_string();
        assert_eq!(net, "network error: timeout");
        assert_eq!(api, "API error: device busy");
        assert_ne!(net, api);
    }
}
