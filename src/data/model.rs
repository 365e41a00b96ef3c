//! Data Model
//!
//! The server directory: servers, their categories and channels, and the
//! message history inside each channel. Lookups go by slugified channel
//! label, never by id; see [`crate::data::resolver`].

/// A single chat message.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Message {
    pub id: u64,
    pub user: String,
    pub avatar_url: String,
    /// Display date, `MM/DD/YYYY`.
    pub date: String,
    pub text: String,
}

/// Sidebar glyph for a channel. Channels without one render a hashtag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelIcon {
    Book,
    Speakerphone,
}

/// A named message thread belonging to a server and category.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Channel {
    pub id: u32,
    pub label: String,
    #[serde(default)]
    pub icon: Option<ChannelIcon>,
    #[serde(default)]
    pub unread: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// A group of channels. An empty label renders without a header and cannot
/// be collapsed.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Category {
    pub id: u32,
    pub label: String,
    pub channels: Vec<Channel>,
}

/// One server worth of categories and channels.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Server {
    pub key: String,
    pub label: String,
    pub categories: Vec<Category>,
}

/// A server rail tile. Several links may point at the same server key, so a
/// community can appear on the rail more than once.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ServerLink {
    pub slug: String,
    pub server: String,
    pub initials: String,
    pub accent: String,
}

/// The whole dataset: servers plus the rail links that navigate to them.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Directory {
    pub servers: Vec<Server>,
    pub links: Vec<ServerLink>,
}

impl Server {
    /// All channels across categories, in source order.
    pub fn channels(&self) -> impl Iterator<Item = &Channel> {
        self.categories.iter().flat_map(|c| c.channels.iter())
    }
}

impl Directory {
    /// Look up a server by its data key.
    pub fn server(&self, key: &str) -> Option<&Server> {
        self.servers.iter().find(|s| s.key == key)
    }

    /// Resolve a rail link slug to the server key it points at.
    pub fn link_target(&self, slug: &str) -> Option<&str> {
        self.links
            .iter()
            .find(|l| l.slug == slug)
            .map(|l| l.server.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_skeleton_defaults_apply() {
        let channel: Channel =
            serde_json::from_str(r#"{ "id": 1, "label": "general" }"#).unwrap();
        assert_eq!(channel.label, "general");
        assert!(channel.icon.is_none());
        assert!(!channel.unread);
        assert!(channel.description.is_none());
        assert!(channel.messages.is_empty());
    }

    #[test]
    fn channel_icon_parses_lowercase_names() {
        let channel: Channel = serde_json::from_str(
            r#"{ "id": 2, "label": "announcements", "icon": "speakerphone", "unread": true }"#,
        )
        .unwrap();
        assert_eq!(channel.icon, Some(ChannelIcon::Speakerphone));
        assert!(channel.unread);
    }

    #[test]
    fn server_channels_iterates_categories_in_order() {
        let server = Server {
            key: "k".to_string(),
            label: "K".to_string(),
            categories: vec![
                Category {
                    id: 1,
                    label: String::new(),
                    channels: vec![channel(1, "welcome"), channel(2, "announcements")],
                },
                Category {
                    id: 2,
                    label: "General".to_string(),
                    channels: vec![channel(3, "general")],
                },
            ],
        };

        let labels: Vec<&str> = server.channels().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["welcome", "announcements", "general"]);
    }

    fn channel(id: u32, label: &str) -> Channel {
        Channel {
            id,
            label: label.to_string(),
            icon: None,
            unread: false,
            description: None,
            messages: Vec::new(),
        }
    }
}
