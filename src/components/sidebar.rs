//! Channel Sidebar
//!
//! Category list for the active server. Labelled categories collapse; a
//! closed category keeps only its unread channels visible. Collapse state
//! is component-local and resets on remount. On small screens the sidebar
//! doubles as the drawer controlled by the session flag.

use std::collections::HashSet;

use leptos::*;
use leptos_router::*;

use crate::components::icons;
use crate::data::{slugify, Category, Channel, Resolution};
use crate::state::use_ui_state;

/// Channels of a category that should render given its collapse state.
pub fn visible_channels(category: &Category, closed: bool) -> Vec<Channel> {
    category
        .channels
        .iter()
        .filter(|ch| !closed || ch.unread)
        .cloned()
        .collect()
}

/// Channel list sidebar for the resolved server.
#[component]
pub fn Sidebar(resolution: Memo<Resolution>) -> impl IntoView {
    let ui = use_ui_state();
    // Collapse state is deliberately not preserved across remounts.
    let (closed, set_closed) = create_signal(HashSet::<u32>::new());

    let toggle = move |id: u32| {
        set_closed.update(|closed| {
            if !closed.remove(&id) {
                closed.insert(id);
            }
        });
    };

    view! {
        <div class=move || {
            let base = "w-60 flex-shrink-0 flex-col bg-gray-800";
            if ui.drawer_open.get() {
                format!("flex {}", base)
            } else {
                format!("hidden md:flex {}", base)
            }
        }>
            <SidebarHeader resolution=resolution />

            <div class="flex flex-1 flex-col gap-1 overflow-y-auto px-2 pb-4">
                {move || {
                    let res = resolution.get();
                    let slug = res.slug.clone();
                    let home = res.is_home();

                    res.server
                        .categories
                        .iter()
                        .map(|category| {
                            let id = category.id;
                            let is_closed = closed.with(|c| c.contains(&id));
                            let chevron = if is_closed { "-rotate-90" } else { "" };

                            let header = (!category.label.is_empty()).then(|| view! {
                                <button
                                    on:click=move |_| toggle(id)
                                    class="group relative flex w-full cursor-pointer items-center
                                           rounded px-1 py-1.5 text-xs font-semibold uppercase
                                           text-gray-200 transition-colors
                                           hover:bg-gray-550/24 hover:text-gray-100"
                                >
                                    <icons::Chevron class=format!(
                                        "mr-1 size-3 transition-transform {}",
                                        chevron
                                    ) />
                                    <span>{category.label.clone()}</span>
                                </button>
                            });

                            view! {
                                <div class="flex flex-col gap-1 pt-3">
                                    {header}
                                    <div class="space-y-0.5 px-1">
                                        {visible_channels(category, is_closed)
                                            .into_iter()
                                            .map(|channel| view! {
                                                <ChannelLink
                                                    channel=channel
                                                    server_slug=slug.clone()
                                                    home=home
                                                />
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

/// Server name header. Home gets the verified badge and a chevron, plain
/// servers just their label.
#[component]
fn SidebarHeader(resolution: Memo<Resolution>) -> impl IntoView {
    view! {
        <div class="flex min-h-12 cursor-pointer items-center gap-2 border-b border-gray-400/5
                    px-4 font-semibold shadow transition-colors hover:bg-gray-550/20">
            {move || {
                let res = resolution.get();
                if res.is_home() {
                    view! {
                        <div class="relative size-4">
                            <icons::Verified class="absolute size-4 text-gray-550" />
                            <icons::Check class="absolute size-4" />
                        </div>
                        <span>{res.server.label.clone()}</span>
                        <icons::Chevron class="ml-auto size-4 opacity-80" />
                    }
                    .into_view()
                } else {
                    view! { <span>{res.server.label.clone()}</span> }.into_view()
                }
            }}
        </div>
    }
}

/// Channel row link. Builds its URL from the routing context: home channels
/// live under `/home`, server channels under the slug the user arrived
/// with.
#[component]
fn ChannelLink(channel: Channel, server_slug: String, home: bool) -> impl IntoView {
    let location = use_location();

    let to = if home {
        format!("/home/{}", slugify(&channel.label))
    } else {
        format!("/{}/{}", server_slug, slugify(&channel.label))
    };

    let unread = channel.unread;
    let href = to.clone();
    let active = create_memo(move |_| location.pathname.get() == to);

    let class = move || {
        let base = "group relative flex cursor-pointer items-center gap-2 rounded px-3 py-1.5
                    text-sm transition-colors";
        if active.get() {
            format!("{} bg-gray-550/30 text-white hover:bg-gray-550/50", base)
        } else if unread {
            format!("{} text-white hover:bg-gray-550/50", base)
        } else {
            format!("{} text-gray-200 hover:bg-gray-550/50 hover:text-white", base)
        }
    };

    view! {
        <a href=href class=class>
            <icons::ChannelGlyph icon=channel.icon class="size-5 text-gray-200" />
            <span class="truncate">{channel.label.clone()}</span>
            <icons::AddPerson class="ml-auto size-4 opacity-0 transition-opacity
                                     group-hover:opacity-70 hover:opacity-100" />
            {move || (unread && !active.get()).then(|| view! {
                <div class="absolute top-1/2 -left-1 h-2 w-0.5 origin-left -translate-y-1/2
                            rounded-r bg-gray-100" />
            })}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(id: u32, label: &str, unread: bool) -> Channel {
        Channel {
            id,
            label: label.to_string(),
            icon: None,
            unread,
            description: None,
            messages: Vec::new(),
        }
    }

    fn category() -> Category {
        Category {
            id: 1,
            label: "General".to_string(),
            channels: vec![
                channel(1, "general", false),
                channel(2, "async", true),
                channel(3, "tooling", false),
                channel(4, "crates", true),
            ],
        }
    }

    #[test]
    fn open_category_shows_every_channel() {
        let cat = category();
        let visible = visible_channels(&cat, false);
        assert_eq!(visible.len(), 4);
    }

    #[test]
    fn closed_category_keeps_only_unread() {
        let cat = category();
        let visible = visible_channels(&cat, true);
        let labels: Vec<&str> = visible.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["async", "crates"]);
        assert!(visible.iter().all(|c| c.unread));
    }

    #[test]
    fn closed_category_preserves_source_order() {
        let cat = category();
        let open: Vec<u32> = visible_channels(&cat, false).iter().map(|c| c.id).collect();
        let closed: Vec<u32> = visible_channels(&cat, true).iter().map(|c| c.id).collect();
        assert_eq!(open, [1, 2, 3, 4]);
        assert_eq!(closed, [2, 4]);
    }
}
