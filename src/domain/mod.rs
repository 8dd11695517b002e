//! Domain values shared by the config builder and the asset search page.

pub mod asset;
pub mod notification;
pub mod search;
pub mod server_config;
pub mod types;
