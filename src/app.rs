use std::rc::Rc;

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::client::FleetBackend;
use crate::components::PcCard;
use crate::logs::{LogAction, LogStore, ALL_PCS};
use crate::types::SlavePc;

const GMAIL_TASK: &str = "create_gmail";

/// Resolves which card's log panel is visible after clicking `pc_id`. At
/// most one panel is open: clicking the open card hides it, clicking any
/// other card moves the selection there.
fn toggle_selection(current: Option<String>, pc_id: &str) -> Option<String> {
    match current.as_deref() {
        Some(selected) if selected == pc_id => None,
        _ => Some(pc_id.to_string()),
    }
}

fn load_fleet(
    backend: Rc<FleetBackend>,
    slave_pcs: UseStateHandle<Vec<SlavePc>>,
    error: UseStateHandle<Option<String>>,
    loading: UseStateHandle<bool>,
) {
    loading.set(true);
    error.set(None);
    spawn_local(async move {
        match backend.fetch_slave_pcs().await {
            Ok(pcs) => slave_pcs.set(pcs),
            Err(e) => {
                web_sys::console::error_1(&format!("Error fetching slave PCs: {}", e).into());
                // Keep whatever fleet we already had; only the banner changes.
                error.set(Some("Failed to fetch slave PCs. Please try again.".to_string()));
            }
        }
        loading.set(false);
    });
}

#[function_component(App)]
pub fn app(_props: &()) -> Html {
    let backend = use_memo((), |_| FleetBackend::from_config());
    let slave_pcs = use_state(Vec::<SlavePc>::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    // Machine id (or the "all" sentinel) whose feature update is in flight.
    let updating = use_state(|| None::<String>);
    let selected_pc_id = use_state(|| None::<String>);
    let logs = use_reducer(LogStore::new);

    // Fetch the fleet snapshot on mount.
    {
        let backend = backend.clone();
        let slave_pcs = slave_pcs.clone();
        let error = error.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            load_fleet(backend, slave_pcs, error, loading);
            || ()
        });
    }

    let on_refresh = {
        let backend = backend.clone();
        let slave_pcs = slave_pcs.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |_: MouseEvent| {
            load_fleet(backend.clone(), slave_pcs.clone(), error.clone(), loading.clone());
        })
    };

    let on_update_pc = {
        let backend = backend.clone();
        let updating = updating.clone();
        let logs = logs.clone();
        Callback::from(move |pc_id: String| {
            let backend = backend.clone();
            let updating = updating.clone();
            let logs = logs.clone();
            updating.set(Some(pc_id.clone()));
            spawn_local(async move {
                let message = match backend.update_pc(&pc_id).await {
                    Ok(()) => "PC updated with new automation features".to_string(),
                    Err(e) => format!("Failed to update PC: {}", e),
                };
                logs.dispatch(LogAction::Append { key: pc_id, message });
                updating.set(None);
            });
        })
    };

    let on_update_all = {
        let backend = backend.clone();
        let updating = updating.clone();
        let logs = logs.clone();
        Callback::from(move |_: MouseEvent| {
            let backend = backend.clone();
            let updating = updating.clone();
            let logs = logs.clone();
            updating.set(Some(ALL_PCS.to_string()));
            spawn_local(async move {
                let message = match backend.update_all_pcs().await {
                    Ok(()) => "All PCs updated with new automation features".to_string(),
                    Err(e) => format!("Failed to update all PCs: {}", e),
                };
                logs.dispatch(LogAction::Append {
                    key: ALL_PCS.to_string(),
                    message,
                });
                updating.set(None);
            });
        })
    };

    let on_reboot_pc = {
        let backend = backend.clone();
        let logs = logs.clone();
        Callback::from(move |pc_id: String| {
            let backend = backend.clone();
            let logs = logs.clone();
            spawn_local(async move {
                let message = match backend.reboot_pc(&pc_id).await {
                    Ok(()) => "PC rebooted successfully".to_string(),
                    Err(e) => format!("Failed to reboot PC: {}", e),
                };
                logs.dispatch(LogAction::Append { key: pc_id, message });
            });
        })
    };

    let on_create_gmail = {
        let backend = backend.clone();
        let logs = logs.clone();
        Callback::from(move |pc_id: String| {
            let backend = backend.clone();
            let logs = logs.clone();
            spawn_local(async move {
                let message = match backend.send_task(&pc_id, GMAIL_TASK).await {
                    Ok(()) => "Started Gmail creation task".to_string(),
                    Err(e) => format!("Failed to start Gmail creation task: {}", e),
                };
                logs.dispatch(LogAction::Append { key: pc_id, message });
            });
        })
    };

    let on_toggle_logs = {
        let selected_pc_id = selected_pc_id.clone();
        Callback::from(move |pc_id: String| {
            selected_pc_id.set(toggle_selection((*selected_pc_id).clone(), &pc_id));
        })
    };

    let updating_all = updating.as_deref() == Some(ALL_PCS);

    html! {
        <div style="max-width:1100px; margin:0 auto; padding:1.5em; font-family:Arial,sans-serif;">
            <h1 style="margin:0 0 1em 0; color:#333;">{ "Slave PC Management" }</h1>

            { if let Some(message) = &*error {
                html! {
                    <div role="alert" style="margin-bottom:1em; padding:1em; background:#f8d7da; border:1px solid #f5c6cb; border-radius:4px; color:#721c24;">
                        <strong>{ "Error! " }</strong>
                        { message }
                    </div>
                }
            } else {
                html! {}
            }}

            <div style="margin-bottom:1.5em; display:flex; gap:0.5em;">
                <button
                    onclick={on_refresh}
                    disabled={*loading}
                    title="Fetch the latest status of all PCs"
                    style="padding:0.6em 1.2em; border:none; border-radius:4px; background:#007bff; color:white; cursor:pointer; font-weight:bold;"
                >
                    { if *loading { "Refreshing..." } else { "Refresh Status" } }
                </button>
                <button
                    onclick={on_update_all}
                    disabled={*loading || updating_all || slave_pcs.is_empty()}
                    title="Update all PCs with new automation features"
                    style="padding:0.6em 1.2em; border:none; border-radius:4px; background:#198754; color:white; cursor:pointer; font-weight:bold;"
                >
                    { if updating_all { "Updating All..." } else { "Update All PC Features" } }
                </button>
            </div>

            { if *loading {
                html! { <p style="color:#555;">{ "Loading..." }</p> }
            } else {
                html! {
                    <ul style="list-style:none; margin:0; padding:0; display:grid; grid-template-columns:repeat(auto-fill, minmax(300px, 1fr)); gap:1.5em;">
                        { for slave_pcs.iter().map(|pc| {
                            html! {
                                <PcCard
                                    key={pc.id.clone()}
                                    pc={pc.clone()}
                                    updating={updating.as_deref() == Some(pc.id.as_str())}
                                    logs_visible={selected_pc_id.as_deref() == Some(pc.id.as_str())}
                                    logs={logs.get(&pc.id).to_vec()}
                                    on_update={on_update_pc.clone()}
                                    on_reboot={on_reboot_pc.clone()}
                                    on_create_gmail={on_create_gmail.clone()}
                                    on_toggle_logs={on_toggle_logs.clone()}
                                />
                            }
                        })}
                    </ul>
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_same_card_twice_hides_it() {
        let shown = toggle_selection(None, "pc-001");
        assert_eq!(shown.as_deref(), Some("pc-001"));
        let hidden = toggle_selection(shown, "pc-001");
        assert_eq!(hidden, None);
    }

    #[test]
    fn toggling_another_card_moves_the_selection() {
        let shown = toggle_selection(Some("pc-001".to_string()), "pc-002");
        assert_eq!(shown.as_deref(), Some("pc-002"));
    }
}
