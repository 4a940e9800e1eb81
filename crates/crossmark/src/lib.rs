//! Crossmark terminal front end.
//!
//! Text-mode play and batch simulation on top of [`crossmark_engine`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod simulate;

pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};
pub use console::{Command, Console};
pub use simulate::simulate;
