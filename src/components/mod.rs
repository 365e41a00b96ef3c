//! UI Components
//!
//! Reusable Leptos components for the chat interface.

pub mod channel_view;
pub mod icons;
pub mod message;
pub mod server_rail;
pub mod sidebar;

pub use channel_view::ChannelView;
pub use message::MessageList;
pub use server_rail::ServerRail;
pub use sidebar::Sidebar;
