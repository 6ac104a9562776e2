use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::components::LogViewer;
use crate::types::SlavePc;

#[derive(Properties, PartialEq)]
pub struct PcCardProps {
    pub pc: SlavePc,
    /// True while a feature update for this machine is in flight. Reboot and
    /// task dispatch deliberately carry no busy indicator, matching the
    /// update-only affordance of the dashboard.
    pub updating: bool,
    pub logs_visible: bool,
    pub logs: Vec<String>,
    pub on_update: Callback<String>,
    pub on_reboot: Callback<String>,
    pub on_create_gmail: Callback<String>,
    pub on_toggle_logs: Callback<String>,
}

fn format_last_update(iso: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(iso));
    if date.get_time().is_nan() {
        return iso.to_string();
    }
    String::from(date.to_locale_string("default", &JsValue::UNDEFINED))
}

fn emit_id(callback: &Callback<String>, id: &str) -> Callback<MouseEvent> {
    let callback = callback.clone();
    let id = id.to_string();
    Callback::from(move |_| callback.emit(id.clone()))
}

#[function_component(PcCard)]
pub fn pc_card(props: &PcCardProps) -> Html {
    let pc = &props.pc;

    let button_style = "padding:0.5em 1em; border:1px solid #ccc; border-radius:4px; background:#fff; cursor:pointer; font-size:0.9em;";

    html! {
        <li style="background:#fff; border:1px solid #ddd; border-radius:8px; padding:1.5em; display:flex; flex-direction:column; gap:1em; box-shadow:0 1px 3px rgba(0,0,0,0.1);">
            <div style="display:flex; align-items:center; justify-content:space-between; gap:0.5em;">
                <h3 style="margin:0; font-size:1.1em; color:#333;">{ &pc.name }</h3>
                <span style={format!(
                    "padding:0.2em 0.7em; border-radius:999px; font-size:0.8em; font-weight:bold; {}",
                    pc.status.badge_style()
                )}>
                    { pc.status.label() }
                </span>
            </div>
            <p style="margin:0; color:#777; font-size:0.85em;">
                { format!("Last update: {}", format_last_update(&pc.last_update)) }
            </p>
            <div style="display:flex; gap:0.5em;">
                <button
                    onclick={emit_id(&props.on_update, &pc.id)}
                    disabled={props.updating}
                    title="Update this PC with new automation features"
                    style={button_style}
                >
                    { if props.updating { "Updating..." } else { "Update Features" } }
                </button>
                <button
                    onclick={emit_id(&props.on_reboot, &pc.id)}
                    title="Reboot this PC"
                    style={button_style}
                >
                    { "Reboot" }
                </button>
            </div>
            <div style="display:flex; justify-content:space-between; gap:0.5em;">
                <button
                    onclick={emit_id(&props.on_create_gmail, &pc.id)}
                    style="padding:0.5em 1em; border:none; border-radius:4px; background:#4f46e5; color:white; cursor:pointer; font-size:0.9em;"
                >
                    { "Create Gmail" }
                </button>
                <button
                    onclick={emit_id(&props.on_toggle_logs, &pc.id)}
                    style="padding:0.5em 1em; border:none; border-radius:4px; background:#e5e7eb; color:#333; cursor:pointer; font-size:0.9em;"
                >
                    { if props.logs_visible { "Hide Logs" } else { "Show Logs" } }
                </button>
            </div>
            { if props.logs_visible {
                html! {
                    <div style="border-top:1px solid #eee; padding-top:0.5em;">
                        <LogViewer logs={props.logs.clone()} />
                    </div>
                }
            } else {
                html! {}
            }}
        </li>
    }
}
