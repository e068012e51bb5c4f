//! Configuration module

mod settings;
mod site;

pub use settings::{MenuItem, Settings};
pub use site::{BlogConfig, ServerConfig};
