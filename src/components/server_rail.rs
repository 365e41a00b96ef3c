//! Server Rail
//!
//! Leftmost navigation: the home tile, a divider, then one tile per rail
//! link. Alias links render as their own tiles but navigate to shared
//! server data.

use leptos::*;
use leptos_router::*;

use crate::components::icons;
use crate::data::{use_directory, ServerLink};

/// True when `path` is `/{slug}` or a route below it. A slug is only
/// within its own segment: `/rust-lang-2` is not within `rust-lang`.
pub fn within_slug(path: &str, slug: &str) -> bool {
    match path.strip_prefix('/') {
        Some(rest) => {
            rest == slug
                || rest
                    .strip_prefix(slug)
                    .map_or(false, |tail| tail.starts_with('/'))
        }
        None => false,
    }
}

fn tile_class(active: bool, accent: &str) -> String {
    let base = "group relative grid size-12 cursor-pointer place-content-center text-sm
                font-semibold text-gray-100 transition-all duration-200 hover:text-white
                active:translate-y-px";
    if active {
        format!("{} rounded-2xl {} text-white", base, accent)
    } else {
        format!("{} rounded-3xl bg-gray-700 hover:rounded-2xl hover:{}", base, accent)
    }
}

/// Server navigation rail.
#[component]
pub fn ServerRail() -> impl IntoView {
    let dir = use_directory();
    let location = use_location();

    let links = dir.links.clone();
    let slugs: Vec<String> = links.iter().map(|l| l.slug.clone()).collect();

    // Home stays lit for every route that is not one of the rail servers,
    // unknown slugs included.
    let home_active = create_memo(move |_| {
        let path = location.pathname.get();
        !slugs.iter().any(|slug| within_slug(&path, slug))
    });

    view! {
        <div class="flex flex-shrink-0 flex-col items-center space-y-2 overflow-y-auto
                    bg-gray-900 p-3">
            <a href="/" class=move || tile_class(home_active.get(), "bg-brand")>
                <ActivePill active=home_active />
                <icons::Logo class="size-7" />
            </a>

            <hr class="mx-2 w-8 border-t-2 border-t-white/10" />

            {links
                .into_iter()
                .map(|link| view! { <ServerTile link=link /> })
                .collect_view()}
        </div>
    }
}

/// Rail tile for one link: accent-colored initials.
#[component]
fn ServerTile(link: ServerLink) -> impl IntoView {
    let location = use_location();

    let slug = link.slug.clone();
    let active = create_memo(move |_| within_slug(&location.pathname.get(), &slug));
    let accent = link.accent.clone();

    view! {
        <a
            href=format!("/{}", link.slug)
            title=link.slug.clone()
            class=move || tile_class(active.get(), &accent)
        >
            <ActivePill active=active />
            {link.initials.clone()}
        </a>
    }
}

/// White selection bar on the left edge of an active tile.
#[component]
fn ActivePill(active: Memo<bool>) -> impl IntoView {
    view! {
        <div class=move || {
            let base = "absolute top-1/2 -left-3 w-1 origin-left -translate-y-1/2 rounded-r
                        bg-white transition-all duration-200";
            if active.get() {
                format!("{} h-10 opacity-100", base)
            } else {
                format!("{} h-5 scale-0 opacity-0 group-hover:scale-100 group-hover:opacity-100", base)
            }
        } />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_the_slug_segment_exactly() {
        assert!(within_slug("/rust-lang", "rust-lang"));
        assert!(within_slug("/rust-lang/general", "rust-lang"));
        assert!(!within_slug("/rust-lang-2", "rust-lang"));
        assert!(!within_slug("/rust-lang-2/general", "rust-lang"));
    }

    #[test]
    fn root_and_home_match_no_server_slug() {
        assert!(!within_slug("/", "rust-lang"));
        assert!(!within_slug("/home/welcome", "rust-lang"));
    }

    #[test]
    fn alias_slug_matches_its_own_tile() {
        assert!(within_slug("/rust-lang-2", "rust-lang-2"));
        assert!(within_slug("/rust-lang-2/async", "rust-lang-2"));
    }
}
