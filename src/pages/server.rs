//! Server Page
//!
//! The `/:server` and `/:server/:channel` routes. The server param may be
//! an alias or something unknown; resolution sorts that out.

use leptos::*;
use leptos_router::*;

use crate::components::{ChannelView, Sidebar};
use crate::data::{resolve, use_directory};

/// Server page component
#[component]
pub fn ServerPage() -> impl IntoView {
    let params = use_params_map();
    let dir = use_directory();

    let resolution = create_memo(move |_| {
        params.with(|p| {
            resolve(
                &dir,
                p.get("server").map(String::as_str),
                p.get("channel").map(String::as_str),
            )
        })
    });

    create_effect(move |_| {
        let res = resolution.get();
        if res.fellback {
            web_sys::console::warn_1(
                &format!(
                    "no such channel on {}, showing #{}",
                    res.server.key, res.channel.label
                )
                .into(),
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
