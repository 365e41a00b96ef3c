//! Mock Data
//!
//! Builds the server directory once at startup: a JSON skeleton of servers,
//! categories and channels embedded at compile time, with message history
//! generated per channel. Seeding is deterministic per channel, so reloads
//! and tests see the same history.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::{Days, Utc};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::model::{Directory, Message};

/// Server/category/channel skeleton, without messages.
const DIRECTORY_JSON: &str = include_str!("servers.json");

/// Usernames for generated history.
const USERS: &[&str] = &[
    "mossdrift",
    "ferrous_ox",
    "lunehart",
    "pixel_pete",
    "tapedeck",
    "quietfn",
    "novabeam",
    "saltpath",
    "gridwalker",
    "hexadecimal",
    "late_ember",
    "cassette_kid",
    "wren",
    "overtone",
    "driftwood",
    "byteworn",
];

/// Word pool for generated message text.
const WORDS: &[&str] = &[
    "the", "a", "that", "this", "just", "really", "pretty", "still", "maybe", "probably",
    "new", "old", "first", "last", "next", "whole", "same", "weird", "great", "rough",
    "build", "track", "sketch", "thread", "update", "version", "release", "draft", "setup",
    "mix", "loop", "frame", "palette", "channel", "server", "patch", "demo", "idea", "take",
    "sounds", "looks", "works", "ships", "breaks", "landed", "posted", "shared", "finished",
    "started", "tried", "found", "fixed", "missed", "loved", "today", "yesterday", "tonight",
    "here", "again", "soon", "finally", "almost", "together", "though", "anyway",
];

/// Build the full directory: parse the skeleton, then fill every channel
/// with generated messages.
pub fn build_directory() -> Directory {
    let mut dir: Directory =
        serde_json::from_str(DIRECTORY_JSON).expect("embedded server directory is valid JSON");

    for server in &mut dir.servers {
        for category in &mut server.categories {
            for channel in &mut category.channels {
                let mut rng = SmallRng::seed_from_u64(seed(&server.key, &channel.label));
                channel.messages = channel_history(&mut rng);
            }
        }
    }

    dir
}

fn seed(server_key: &str, channel_label: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    server_key.hash(&mut hasher);
    channel_label.hash(&mut hasher);
    hasher.finish()
}

/// 7-25 author turns of 1-4 consecutive messages each. A turn keeps one
/// user, avatar and date, which is what gives the channel view runs to
/// group.
fn channel_history(rng: &mut SmallRng) -> Vec<Message> {
    let today = Utc::now().date_naive();
    let turns = rng.gen_range(7..=25);
    let mut messages = Vec::new();
    let mut id = 0u64;

    for _ in 0..turns {
        let idx = rng.gen_range(0..USERS.len());
        let user = USERS[idx];
        // One avatar per user, so adjacent turns by the same user still
        // read as a single run.
        let avatar_url = format!("/avatars/avatar-{:02}.png", idx % 12 + 1);
        let date = today
            .checked_sub_days(Days::new(rng.gen_range(0..365u64)))
            .unwrap_or(today)
            .format("%m/%d/%Y")
            .to_string();

        for _ in 0..rng.gen_range(1..=4) {
            id += 1;
            messages.push(Message {
                id,
                user: user.to_string(),
                avatar_url: avatar_url.clone(),
                date: date.clone(),
                text: paragraph(rng),
            });
        }
    }

    messages
}

/// 1-3 sentences of filler text.
fn paragraph(rng: &mut SmallRng) -> String {
    let count = rng.gen_range(1..=3);
    let sentences: Vec<String> = (0..count).map(|_| sentence(rng)).collect();
    sentences.join(" ")
}

fn sentence(rng: &mut SmallRng) -> String {
    let len = rng.gen_range(4..=12);
    let mut out = String::new();

    for i in 0..len {
        let word = WORDS[rng.gen_range(0..WORDS.len())];
        if i == 0 {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        } else {
            out.push(' ');
            out.push_str(word);
        }
    }

    out.push('.');
    out
}
