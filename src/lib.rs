use wasm_bindgen::prelude::*;

pub mod api;
pub mod app;
pub mod client;
pub mod components;
pub mod error;
pub mod logs;
pub mod mock;
pub mod types;

#[wasm_bindgen(start)]
pub fn run_app() {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.get_element_by_id("root").unwrap();
    yew::Renderer::<app::App>::with_root(root).render();
}
