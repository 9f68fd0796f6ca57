pub mod ai;
pub mod app;
pub mod emissions;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;
pub mod usecases;

use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::wasm_bindgen;

static MOUNTED: AtomicBool = AtomicBool::new(false);

/// Flips the app into the mounted state; `false` if it already was.
fn mark_mounted(flag: &AtomicBool) -> bool {
    !flag.swap(true, Ordering::SeqCst)
}

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    if !mark_mounted(&MOUNTED) {
        log::warn!("app is already mounted, ignoring repeated mount");
        return;
    }

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_mount_is_refused() {
        let flag = AtomicBool::new(false);
        assert!(mark_mounted(&flag));
        assert!(!mark_mounted(&flag));
        assert!(!mark_mounted(&flag));
    }
}
