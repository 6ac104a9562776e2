use serde::Deserialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Headers, Request, RequestInit, Response};

use crate::error::FetchError;
use crate::types::SlavePc;

/// Every call is abandoned after this long; an expired call is reported as a
/// network error and never retried.
const FETCH_TIMEOUT_MS: i32 = 5_000;

/// Live transport against the fleet-control endpoint.
pub struct HttpFleet {
    base_url: String,
}

impl HttpFleet {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub async fn fetch_slave_pcs(&self) -> Result<Vec<SlavePc>, FetchError> {
        let opts = RequestInit::new();
        opts.set_method("GET");
        let resp = fetch_with_timeout(&format!("{}/pcs", self.base_url), &opts).await?;
        let resp = check_status(resp).await?;
        let json = JsFuture::from(resp.json().map_err(FetchError::from)?)
            .await
            .map_err(FetchError::from)?;
        serde_wasm_bindgen::from_value(json).map_err(|e| FetchError::Api(e.to_string()))
    }

    pub async fn update_pc(&self, pc_id: &str) -> Result<(), FetchError> {
        self.post(&format!("/pcs/{}/update-features", pc_id), None).await
    }

    pub async fn update_all_pcs(&self) -> Result<(), FetchError> {
        self.post("/pcs/update-all-features", None).await
    }

    pub async fn reboot_pc(&self, pc_id: &str) -> Result<(), FetchError> {
        self.post(&format!("/pcs/{}/reboot", pc_id), None).await
    }

    pub async fn send_task(&self, pc_id: &str, task: &str) -> Result<(), FetchError> {
        self.post(&format!("/pcs/{}/tasks", pc_id), Some(task_body(task)))
            .await
    }

    async fn post(&self, path: &str, json_body: Option<String>) -> Result<(), FetchError> {
        let opts = RequestInit::new();
        opts.set_method("POST");
        if let Some(body) = json_body {
            let headers = Headers::new().map_err(FetchError::from)?;
            headers
                .set("Content-Type", "application/json")
                .map_err(FetchError::from)?;
            opts.set_headers(headers.as_ref());
            opts.set_body(&JsValue::from_str(&body));
        }
        let resp = fetch_with_timeout(&format!("{}{}", self.base_url, path), &opts).await?;
        check_status(resp).await?;
        Ok(())
    }
}

fn task_body(task: &str) -> String {
    serde_json::json!({ "task": task }).to_string()
}

/// Runs `fetch` with an `AbortController` wired to a timer; when the timer
/// fires first the request is aborted and the rejection surfaces as
/// `FetchError::Network`.
async fn fetch_with_timeout(url: &str, opts: &RequestInit) -> Result<Response, FetchError> {
    let window =
        web_sys::window().ok_or_else(|| FetchError::Network("window not available".to_string()))?;
    let controller = AbortController::new().map_err(FetchError::from)?;
    opts.set_signal(Some(&controller.signal()));
    let request = Request::new_with_str_and_init(url, opts).map_err(FetchError::from)?;

    let abort = Closure::once(move || controller.abort());
    let timer = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            abort.as_ref().unchecked_ref(),
            FETCH_TIMEOUT_MS,
        )
        .map_err(FetchError::from)?;

    let result = JsFuture::from(window.fetch_with_request(&request)).await;
    window.clear_timeout_with_handle(timer);
    drop(abort);

    let resp: Response = result?.dyn_into().map_err(FetchError::from)?;
    Ok(resp)
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Non-ok responses are turned into `FetchError::Api`, preferring the
/// `message` field of a structured error body when one is present.
async fn check_status(resp: Response) -> Result<Response, FetchError> {
    if resp.ok() {
        return Ok(resp);
    }
    let message = match resp.text() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|text| text.as_string())
            .and_then(|text| serde_json::from_str::<ErrorBody>(&text).ok())
            .and_then(|body| body.message),
        Err(_) => None,
    };
    Err(FetchError::Api(
        message.unwrap_or_else(|| "An error occurred".to_string()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_body_matches_wire_shape() {
        assert_eq!(task_body("create_gmail"), r#"{"task":"create_gmail"}"#);
    }

    #[test]
    fn error_body_message_is_optional() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":"device busy"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("device busy"));
        let empty: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(empty.message.is_none());
    }
}
