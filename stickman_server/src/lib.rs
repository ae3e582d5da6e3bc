pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use frameworks::config::http_port;
pub use frameworks::levels::{ConfigError, GameSetup, load_game};
pub use frameworks::server::run;
