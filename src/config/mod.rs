//! Configuration module for daka
//!
//! - Data directory resolution
//! - User settings

pub mod paths;
pub mod settings;

pub use paths::DakaPaths;
pub use settings::Settings;
