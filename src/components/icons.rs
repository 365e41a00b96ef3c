//! Icons
//!
//! Inline SVG glyphs used across the interface. Stroke icons inherit
//! `currentColor`; sizing comes from the caller's class.

use leptos::*;

use crate::data::ChannelIcon;

/// Glyph for a channel row or header: mapped from the channel's icon
/// field, hashtag by default.
#[component]
pub fn ChannelGlyph(
    icon: Option<ChannelIcon>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    match icon {
        Some(ChannelIcon::Book) => view! { <Book class=class /> }.into_view(),
        Some(ChannelIcon::Speakerphone) => view! { <Speakerphone class=class /> }.into_view(),
        None => view! { <Hashtag class=class /> }.into_view(),
    }
}

/// Parlor mark for the rail's home tile.
#[component]
pub fn Logo(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
            <path d="M4 5a3 3 0 0 1 3-3h10a3 3 0 0 1 3 3v8a3 3 0 0 1-3 3H9.5L4 20.5V5Z" />
        </svg>
    }
}

#[component]
pub fn Hashtag(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M10 3 8 21M16 3l-2 18M4 8h17M3 16h17" />
        </svg>
    }
}

#[component]
pub fn Book(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M4 19.5A2.5 2.5 0 0 1 6.5 17H20V2H6.5A2.5 2.5 0 0 0 4 4.5v15Z" />
            <path d="M4 19.5A2.5 2.5 0 0 0 6.5 22H20v-5" />
        </svg>
    }
}

#[component]
pub fn Speakerphone(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M3 10v4l8 3V7l-8 3Z" />
            <path d="m11 7 8-4v18l-8-4" />
            <path d="M19 10a3 3 0 0 1 0 4" />
        </svg>
    }
}

#[component]
pub fn Chevron(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="m6 9 6 6 6-6" />
        </svg>
    }
}

#[component]
pub fn Bell(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M6 8a6 6 0 1 1 12 0c0 7 3 9 3 9H3s3-2 3-9" />
            <path d="M10.3 21a1.94 1.94 0 0 0 3.4 0" />
        </svg>
    }
}

#[component]
pub fn Pin(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M12 17v5" />
            <path d="M9 3h6l-1 7 3 2v3H7v-3l3-2-1-7Z" />
        </svg>
    }
}

#[component]
pub fn People(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" />
            <path d="M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8Z" />
            <path d="M22 21v-2a4 4 0 0 0-3-3.87" />
            <path d="M16 3.13a4 4 0 0 1 0 7.75" />
        </svg>
    }
}

#[component]
pub fn Spyglass(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="m21 21-4.35-4.35" />
            <path d="M11 19a8 8 0 1 1 0-16 8 8 0 0 1 0 16Z" />
        </svg>
    }
}

#[component]
pub fn Inbox(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M22 12h-6l-2 3h-4l-2-3H2" />
            <path d="M5.45 5.11 2 12v6a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-6l-3.45-6.89A2 2 0 0 0 16.76 4H7.24a2 2 0 0 0-1.79 1.11Z" />
        </svg>
    }
}

#[component]
pub fn QuestionCircle(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M12 21a9 9 0 1 0 0-18 9 9 0 0 0 0 18Z" />
            <path d="M9.1 9a3 3 0 0 1 5.8 1c0 2-3 3-3 3" />
            <path d="M12 17h.01" />
        </svg>
    }
}

#[component]
pub fn Verified(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
            <path d="m12 1 2.4 2 3.1-.4 1.2 2.9 2.9 1.2-.4 3.1 2 2.4-2 2.4.4 3.1-2.9 1.2-1.2 2.9-3.1-.4-2.4 2-2.4-2-3.1.4-1.2-2.9-2.9-1.2.4-3.1-2-2.4 2-2.4-.4-3.1 2.9-1.2 1.2-2.9 3.1.4L12 1Z" />
        </svg>
    }
}

#[component]
pub fn Check(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="m7 13 3 3 7-8" />
        </svg>
    }
}

#[component]
pub fn AddPerson(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M15 19v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2" />
            <path d="M8 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8Z" />
            <path d="M19 8v6" />
            <path d="M22 11h-6" />
        </svg>
    }
}
