//! Route Resolution
//!
//! Maps the `(server_slug, channel_slug)` pair from the URL to the server
//! and channel records that should render. Unmatched input never errors: an
//! unknown server falls back to the default server, an unknown or absent
//! channel falls back to the context default, and when even the default is
//! missing the view degrades to a placeholder welcome channel.

use super::model::{Channel, Directory, Server};

/// Data key of the home server.
pub const HOME_KEY: &str = "home";

/// Default channel on the home server.
const HOME_DEFAULT_CHANNEL: &str = "welcome";

/// Default channel on every other server.
const SERVER_DEFAULT_CHANNEL: &str = "general";

/// URL-safe identifier for a label: lowercased, whitespace runs collapsed
/// into single hyphens.
pub fn slugify(label: &str) -> String {
    label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// The outcome of resolving a path. Always renderable.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    /// Server record the views render from.
    pub server: Server,
    /// Slug used when building channel URLs. Keeps the slug the user arrived
    /// with, so rail links that alias another server stay on their own path.
    pub slug: String,
    /// Channel record (messages and description).
    pub channel: Channel,
    /// True when the requested channel was missing and a default or
    /// placeholder was substituted.
    pub fellback: bool,
}

impl Resolution {
    pub fn is_home(&self) -> bool {
        self.server.key == HOME_KEY
    }
}

impl Server {
    /// Case-insensitive channel lookup by slugified label across all
    /// categories.
    pub fn channel(&self, slug: &str) -> Option<&Channel> {
        let want = slugify(slug);
        self.channels().find(|ch| slugify(&ch.label) == want)
    }
}

/// Resolve a path segment pair to the channel that should render.
pub fn resolve(
    dir: &Directory,
    server_slug: Option<&str>,
    channel_slug: Option<&str>,
) -> Resolution {
    let (server, slug) = match resolve_server(dir, server_slug) {
        Some(found) => found,
        // Empty directory: render the home shell around the placeholder.
        None => {
            return Resolution {
                server: Server {
                    key: HOME_KEY.to_string(),
                    label: "Parlor".to_string(),
                    categories: Vec::new(),
                },
                slug: HOME_KEY.to_string(),
                channel: placeholder(),
                fellback: true,
            };
        }
    };

    let default = if server.key == HOME_KEY {
        HOME_DEFAULT_CHANNEL
    } else {
        SERVER_DEFAULT_CHANNEL
    };
    let requested = channel_slug.unwrap_or(default);

    let (channel, fellback) = match server.channel(requested) {
        Some(found) => (found.clone(), false),
        None => (
            server.channel(default).cloned().unwrap_or_else(placeholder),
            true,
        ),
    };

    Resolution {
        server: server.clone(),
        slug,
        channel,
        fellback,
    }
}

/// Pick the server for a slug, together with the slug URLs should keep
/// using. `None` and the literal `home` segment mean the home server; an
/// unknown slug falls back to the default server but keeps the requested
/// slug in URLs.
fn resolve_server<'a>(dir: &'a Directory, slug: Option<&str>) -> Option<(&'a Server, String)> {
    let slug = match slug {
        Some(s) if s != HOME_KEY => s,
        _ => return home_server(dir).map(|s| (s, HOME_KEY.to_string())),
    };

    let key = dir
        .link_target(slug)
        .or_else(|| dir.server(slug).map(|s| s.key.as_str()));

    let server = match key {
        Some(key) => dir.server(key),
        None => default_server(dir),
    };

    server.map(|s| (s, slug.to_string()))
}

fn home_server(dir: &Directory) -> Option<&Server> {
    dir.server(HOME_KEY).or_else(|| dir.servers.first())
}

/// The first rail link's target, the server unknown slugs land on.
fn default_server(dir: &Directory) -> Option<&Server> {
    dir.links
        .first()
        .and_then(|l| dir.server(&l.server))
        .or_else(|| home_server(dir))
}

/// Rendered when a server has nothing to show for the requested channel.
fn placeholder() -> Channel {
    Channel {
        id: 0,
        label: "welcome".to_string(),
        icon: None,
        unread: false,
        description: Some("Nothing here yet. Pick a channel from the sidebar.".to_string()),
        messages: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Category, ServerLink};

    fn channel(id: u32, label: &str, unread: bool) -> Channel {
        Channel {
            id,
            label: label.to_string(),
            icon: None,
            unread,
            description: Some(format!("about {}", label)),
            messages: Vec::new(),
        }
    }

    fn server(key: &str, label: &str, channels: Vec<Channel>) -> Server {
        Server {
            key: key.to_string(),
            label: label.to_string(),
            categories: vec![Category {
                id: 1,
                label: "General".to_string(),
                channels,
            }],
        }
    }

    fn fixture() -> Directory {
        Directory {
            servers: vec![
                server(
                    "home",
                    "Parlor Home",
                    vec![channel(1, "welcome", false), channel(2, "random", true)],
                ),
                server(
                    "rust-lang",
                    "Rustaceans",
                    vec![
                        channel(1, "general", false),
                        channel(2, "Sample Packs", true),
                    ],
                ),
                server("synthwave", "Synthwave FM", vec![channel(1, "gear", false)]),
            ],
            links: vec![
                ServerLink {
                    slug: "rust-lang".to_string(),
                    server: "rust-lang".to_string(),
                    initials: "RS".to_string(),
                    accent: "bg-brand".to_string(),
                },
                ServerLink {
                    slug: "rust-lang-2".to_string(),
                    server: "rust-lang".to_string(),
                    initials: "R2".to_string(),
                    accent: "bg-green-800".to_string(),
                },
                ServerLink {
                    slug: "synthwave".to_string(),
                    server: "synthwave".to_string(),
                    initials: "SW".to_string(),
                    accent: "bg-brand".to_string(),
                },
            ],
        }
    }

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Sample Packs"), "sample-packs");
        assert_eq!(slugify("general"), "general");
        assert_eq!(slugify("  spaced   out  "), "spaced-out");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn known_pair_resolves_exactly() {
        let dir = fixture();
        let res = resolve(&dir, Some("rust-lang"), Some("general"));
        assert_eq!(res.server.key, "rust-lang");
        assert_eq!(res.channel.label, "general");
        assert!(!res.fellback);
    }

    #[test]
    fn channel_lookup_is_case_insensitive_on_slug() {
        let dir = fixture();
        let res = resolve(&dir, Some("rust-lang"), Some("SAMPLE-PACKS"));
        assert_eq!(res.channel.label, "Sample Packs");
        assert!(!res.fellback);
    }

    #[test]
    fn spaced_label_resolves_via_its_slug() {
        let dir = fixture();
        let res = resolve(&dir, Some("rust-lang"), Some("sample-packs"));
        assert_eq!(res.channel.id, 2);
        assert!(!res.fellback);
    }

    #[test]
    fn alias_slug_reuses_server_data_but_keeps_its_own_path() {
        let dir = fixture();
        let res = resolve(&dir, Some("rust-lang-2"), Some("general"));
        assert_eq!(res.server.key, "rust-lang");
        assert_eq!(res.slug, "rust-lang-2");
        assert!(!res.fellback);
    }

    #[test]
    fn unknown_server_falls_back_to_default_server() {
        let dir = fixture();
        let res = resolve(&dir, Some("no-such-place"), None);
        // Default server is the first rail link's target.
        assert_eq!(res.server.key, "rust-lang");
        assert_eq!(res.slug, "no-such-place");
        assert_eq!(res.channel.label, "general");
    }

    #[test]
    fn absent_channel_uses_context_default() {
        let dir = fixture();

        let home = resolve(&dir, None, None);
        assert_eq!(home.channel.label, "welcome");
        assert!(!home.fellback);

        let srv = resolve(&dir, Some("rust-lang"), None);
        assert_eq!(srv.channel.label, "general");
        assert!(!srv.fellback);
    }

    #[test]
    fn unknown_channel_falls_back_to_default_channel() {
        let dir = fixture();
        let res = resolve(&dir, Some("rust-lang"), Some("nonexistent"));
        assert_eq!(res.channel.label, "general");
        assert!(res.fellback);
    }

    #[test]
    fn missing_default_degrades_to_placeholder() {
        let dir = fixture();
        // synthwave has no "general" channel at all.
        let res = resolve(&dir, Some("synthwave"), Some("nonexistent"));
        assert_eq!(res.channel.label, "welcome");
        assert!(res.channel.messages.is_empty());
        assert!(res.fellback);
    }

    #[test]
    fn home_segment_resolves_the_home_server() {
        let dir = fixture();
        let res = resolve(&dir, Some("home"), Some("random"));
        assert!(res.is_home());
        assert_eq!(res.channel.label, "random");
        assert!(!res.fellback);
    }

    #[test]
    fn empty_directory_still_renders_a_placeholder() {
        let dir = Directory {
            servers: Vec::new(),
            links: Vec::new(),
        };
        let res = resolve(&dir, Some("anything"), Some("anything"));
        assert_eq!(res.channel.label, "welcome");
        assert!(res.fellback);
    }

    #[test]
    fn every_label_resolves_to_itself() {
        let dir = fixture();
        for server in &dir.servers {
            for ch in server.channels() {
                let res = resolve(&dir, Some(&server.key), Some(&slugify(&ch.label)));
                assert_eq!(res.channel.label, ch.label, "in {}", server.key);
                assert!(!res.fellback);
            }
        }
    }
}
