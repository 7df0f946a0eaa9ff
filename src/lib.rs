pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod menu;
pub mod prompt;
pub mod table;

pub use config::Config;
pub use db::RosterStorage;
pub use error::TrackerError;
pub use menu::{Menu, MenuChoice};
pub use prompt::{DialoguerPrompter, Prompter};
