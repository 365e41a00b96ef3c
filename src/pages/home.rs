//! Home Page
//!
//! The `/` and `/home/:channel` routes: the home server's sidebar and the
//! resolved channel.

use leptos::*;
use leptos_router::*;

use crate::components::{ChannelView, Sidebar};
use crate::data::{resolve, use_directory};

/// Home page component
#[component]
pub fn HomePage() -> impl IntoView {
    let params = use_params_map();
    let dir = use_directory();

    let resolution = create_memo(move |_| {
        params.with(|p| resolve(&dir, None, p.get("channel").map(String::as_str)))
    });

    // Degrading to a default is not an error, but it is worth a trace.
    create_effect(move |_| {
        let res = resolution.get();
        if res.fellback {
            web_sys::console::warn_1(
                &format!("no such home channel, showing #{}", res.channel.label).into(),
            );
        }
    });

    view! {
        <Sidebar resolution=resolution />
        <main class="flex min-w-0 flex-1 flex-col bg-gray-700 text-white">
            <ChannelView resolution=resolution />
        </main>
    }
}
