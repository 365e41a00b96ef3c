//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::ServerRail;
use crate::data::provide_directory;
use crate::pages::{HomePage, ServerPage};
use crate::state::provide_ui_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide the server directory and UI state to all components
    provide_directory();
    provide_ui_state();

    view! {
        <Router>
            <div class="flex h-screen overflow-hidden bg-gray-700 text-gray-100">
                // Server navigation rail, visible on every route
                <ServerRail />

                <Routes>
                    <Route path="/" view=HomePage />
                    <Route path="/home/:channel" view=HomePage />
                    <Route path="/:server" view=ServerPage />
                    <Route path="/:server/:channel" view=ServerPage />
                </Routes>
            </div>
        </Router>
    }
}
