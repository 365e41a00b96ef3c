//! Channel View
//!
//! Header bar and message history for the resolved channel. Pure
//! presentation over a fixed list: no pagination, no composer, no edits.

use leptos::*;

use crate::components::icons;
use crate::components::message::MessageList;
use crate::data::{slugify, Resolution};
use crate::state::use_ui_state;

/// Toolbar button styling shared across the header.
const TOOLBAR_BUTTON: &str = "cursor-pointer text-gray-200 transition-colors hover:text-gray-100";

/// Capitalize the first character, the way channel names display in the
/// header.
pub fn display_name(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Channel header plus message history.
#[component]
pub fn ChannelView(resolution: Memo<Resolution>) -> impl IntoView {
    view! {
        <ChannelHeader resolution=resolution />

        {move || {
            let channel = resolution.get().channel;
            if channel.messages.is_empty() {
                view! {
                    <div class="flex flex-1 items-center justify-center">
                        <p class="text-sm text-gray-400">
                            {format!("This is the beginning of #{}.", slugify(&channel.label))}
                        </p>
                    </div>
                }
                .into_view()
            } else {
                view! { <MessageList messages=channel.messages /> }.into_view()
            }
        }}
    }
}

/// Header bar: glyph, name, description and the decorative toolbar.
#[component]
fn ChannelHeader(resolution: Memo<Resolution>) -> impl IntoView {
    let ui = use_ui_state();

    view! {
        <div class="flex h-12 flex-shrink-0 items-center gap-2 border-b border-gray-400/5 px-3
                    font-semibold shadow-sm">
            // Drawer toggle, mobile only
            <button
                on:click=move |_| ui.toggle_drawer()
                class="text-gray-200 hover:text-gray-100 md:hidden"
                aria-label="Toggle channel drawer"
            >
                <icons::Chevron class="size-5 rotate-90" />
            </button>

            <div class="flex min-w-0 items-center gap-2">
                {move || {
                    let channel = resolution.get().channel;
                    view! {
                        <icons::ChannelGlyph icon=channel.icon class="size-5 text-gray-400" />
                        <span class="whitespace-nowrap text-sm font-semibold">
                            {display_name(&channel.label)}
                        </span>
                    }
                }}
            </div>

            {move || {
                resolution.get().channel.description.map(|description| view! {
                    <div class="h-6 w-px bg-white/5" />
                    <div class="truncate text-sm font-medium text-gray-200">{description}</div>
                })
            }}

            <div class="ml-auto flex items-center gap-2">
                <button class=TOOLBAR_BUTTON>
                    <icons::Bell class="size-5" />
                </button>
                <button class=TOOLBAR_BUTTON>
                    <icons::Pin class="size-5" />
                </button>
                <button class=TOOLBAR_BUTTON>
                    <icons::People class="size-5" />
                </button>
                <div class="relative mx-2 hidden lg:block">
                    <input
                        placeholder="Search"
                        class="w-36 rounded bg-gray-900 px-2 py-1 pr-8 text-sm font-medium
                               text-gray-100 placeholder:text-gray-400 focus:outline-none"
                    />
                    <icons::Spyglass class="pointer-events-none absolute top-1/2 right-2 size-4
                                            -translate-y-1/2 text-gray-400" />
                </div>
                <button class=TOOLBAR_BUTTON>
                    <icons::Inbox class="size-6" />
                </button>
                <button class=TOOLBAR_BUTTON>
                    <icons::QuestionCircle class="size-5" />
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_capitalizes_first_character() {
        assert_eq!(display_name("general"), "General");
        assert_eq!(display_name("now playing"), "Now playing");
        assert_eq!(display_name("Async"), "Async");
    }

    #[test]
    fn display_name_of_empty_label_is_empty() {
        assert_eq!(display_name(""), "");
    }
}
