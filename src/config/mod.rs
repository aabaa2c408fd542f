//! Configuration and path management for outlay-cli

pub mod paths;
pub mod settings;

pub use paths::OutlayPaths;
pub use settings::Settings;
