//! WASM entry point for the drift map panel.
//!
//! This binary is compiled to WebAssembly via Trunk and mounted to the
//! DOM body. It renders the Leptos-based drift map.

use drift_panel::components::DriftMapApp;
use leptos::prelude::*;

fn main() {
    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    console_error_panic_hook::set_once();

    mount_to_body(DriftMapApp);
}
