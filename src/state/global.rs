//! Global UI State
//!
//! The one piece of state that outlives a component: the mobile drawer
//! flag. It lives in reactive context and is mirrored to session storage,
//! so it survives remounts within a browsing session and nothing more.
//! Category-collapse state deliberately does not live here; it belongs to
//! the sidebar and resets on remount.

use leptos::*;

/// Session storage key for the drawer flag.
const DRAWER_KEY: &str = "parlor_drawer_open";

/// Global UI state provided to all components.
#[derive(Clone, Copy)]
pub struct UiState {
    /// Mobile channel drawer visibility.
    pub drawer_open: RwSignal<bool>,
}

impl UiState {
    /// Flip the drawer and persist the new value for this session.
    pub fn toggle_drawer(&self) {
        let open = !self.drawer_open.get();
        self.drawer_open.set(open);
        store_drawer_flag(open);
    }
}

/// Provide UI state to the component tree.
pub fn provide_ui_state() {
    provide_context(UiState {
        drawer_open: create_rw_signal(load_drawer_flag()),
    });
}

/// Fetch the UI state from context.
pub fn use_ui_state() -> UiState {
    use_context::<UiState>().expect("UiState not found")
}

/// Read the drawer flag from session storage.
fn load_drawer_flag() -> bool {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.session_storage() {
            if let Ok(Some(value)) = storage.get_item(DRAWER_KEY) {
                return value == "true";
            }
        }
    }
    false
}

/// Write the drawer flag to session storage.
fn store_drawer_flag(open: bool) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.session_storage() {
            let _ = storage.set_item(DRAWER_KEY, if open { "true" } else { "false" });
        }
    }
}
