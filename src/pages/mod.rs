//! Pages
//!
//! One page per route shape. Each derives a resolution from the current
//! params and renders the sidebar plus the channel view for it.

pub mod home;
pub mod server;

pub use home::HomePage;
pub use server::ServerPage;
