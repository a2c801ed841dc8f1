#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![deny(warnings)]
#![allow(clippy::multiple_crate_versions)]

/// Version of the auth-relay application
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod handlers;
pub mod models;
pub mod settings;
pub mod utils;

/// Re-export commonly used items
pub use handlers::{auth_callback, health};
pub use models::{Failure, Outcome, UserStructure, UserType};
pub use settings::RelaySettings;
pub use utils::redirect::{redirect_failure, FailureRedirect};
