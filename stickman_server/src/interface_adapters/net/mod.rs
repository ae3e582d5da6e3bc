// Network adapter modules split by player sockets vs HTTP control routes.

pub mod client;
pub mod internal;

pub use client::{world_update_serializer, ws_handler};
pub use internal::{load_handler, save_handler, status_handler};
