pub mod config;
pub mod error;
pub mod plex;

pub use config::Config;
pub use error::{ConfigError, PlexError};
pub use plex::client::Plex;
