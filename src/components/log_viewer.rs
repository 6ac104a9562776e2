use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogViewerProps {
    pub logs: Vec<String>,
}

/// Renders the action log for one machine (or the fleet) as plain lines,
/// oldest first.
#[function_component(LogViewer)]
pub fn log_viewer(props: &LogViewerProps) -> Html {
    if props.logs.is_empty() {
        html! {
            <div style="color:#888; font-size:0.9em; padding:0.5em 0;">
                { "No logs yet for this PC" }
            </div>
        }
    } else {
        html! {
            <ul style="list-style:disc inside; margin:0; padding:0.5em 0; font-family:monospace; font-size:0.85em; color:#333;">
                { for props.logs.iter().map(|line| html! {
                    <li style="padding:0.15em 0;">{ line }</li>
                })}
            </ul>
        }
    }
}
