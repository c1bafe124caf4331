//! Configuration module
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use league_setup::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("league.toml")).unwrap();
//! println!("Working on league: {}", config.league.league_id);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    ClientConfig, Config, LeagueConfig, RemoteConfig, SessionConfig, DEFAULT_BASE_URL,
    DEFAULT_COOKIE_ENV,
};

// Re-export parser functions
pub use parser::{load_config, parse_config};
