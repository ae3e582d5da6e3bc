// Frameworks: runtime bootstrap, environment settings, and level files.

pub mod config;
pub mod levels;
pub mod server;
