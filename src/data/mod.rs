//! Data Layer
//!
//! The mock server directory and route resolution over it. The directory is
//! built once at startup and handed to the component tree through context;
//! nothing in it mutates afterwards.

pub mod mock;
pub mod model;
pub mod resolver;

use std::rc::Rc;

use leptos::*;

pub use model::{Category, Channel, ChannelIcon, Directory, Message, Server, ServerLink};
pub use resolver::{resolve, slugify, Resolution};

/// Build the directory and provide it to the component tree.
pub fn provide_directory() {
    provide_context(Rc::new(mock::build_directory()));
}

/// Fetch the directory from context.
pub fn use_directory() -> Rc<Directory> {
    use_context::<Rc<Directory>>().expect("Directory not found")
}
