//! State Management
//!
//! Session-scoped UI state shared across the component tree.

pub mod global;

pub use global::{provide_ui_state, use_ui_state, UiState};
