mod rail_app;
mod rail_config;

pub use rail_app::{run, RailApp};
pub use rail_config::{RailConfig, RailFilesConfig};
