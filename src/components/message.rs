//! Message Rendering
//!
//! A channel's history displays as author runs: the avatar and author
//! header appear on the first message of a run, consecutive messages from
//! the same author render compact below it.

use leptos::*;

use crate::data::Message;

/// For each message, whether it starts a new author run.
pub fn run_heads(messages: &[Message]) -> Vec<bool> {
    messages
        .iter()
        .enumerate()
        .map(|(i, msg)| i == 0 || messages[i - 1].user != msg.user)
        .collect()
}

/// Message list with author-run grouping.
#[component]
pub fn MessageList(messages: Vec<Message>) -> impl IntoView {
    let heads = run_heads(&messages);

    view! {
        <div class="flex-1 space-y-0.5 overflow-y-auto py-3">
            {messages
                .into_iter()
                .zip(heads)
                .map(|(message, head)| {
                    if head {
                        view! { <MessageHead message=message /> }.into_view()
                    } else {
                        view! { <MessageFollow message=message /> }.into_view()
                    }
                })
                .collect_view()}
        </div>
    }
}

/// First message of an author run: avatar, author and date header.
#[component]
fn MessageHead(message: Message) -> impl IntoView {
    let initial = message
        .user
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    view! {
        <div class="group flex gap-4 px-4 py-2 hover:bg-gray-800/30">
            <div
                class="mt-0.5 grid size-10 flex-shrink-0 place-content-center rounded-full
                       bg-gray-600 bg-cover text-sm text-white"
                style=format!("background-image: url('{}')", message.avatar_url)
            >
                {initial}
            </div>
            <div class="min-w-0 flex-1 space-y-1">
                <div class="flex items-baseline gap-2">
                    <span class="cursor-pointer text-sm font-medium text-green-400 hover:underline">
                        {message.user}
                    </span>
                    <span class="text-xs text-gray-400">{message.date}</span>
                </div>
                <p class="break-words text-sm leading-relaxed text-gray-200">{message.text}</p>
            </div>
        </div>
    }
}

/// Later message of a run: text only, aligned with the head's gutter.
#[component]
fn MessageFollow(message: Message) -> impl IntoView {
    view! {
        <div class="group flex gap-4 px-4 py-0.5 hover:bg-gray-800/30">
            <div class="size-10 flex-shrink-0" />
            <div class="min-w-0 flex-1">
                <p class="break-words text-sm leading-relaxed text-gray-200">{message.text}</p>
            </div>
        </div>
    }
}
