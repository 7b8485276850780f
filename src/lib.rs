pub mod builder;
pub mod error;
pub mod models;
pub mod sdk;
pub mod utils;

// Re-export the translator and its output for easier access
pub use builder::{OnfidoConfigBuilder, OnfidoMode};
pub use error::{Error, Result};

// Re-export the plugin-side configuration types
pub use models::{Appearance, AppearanceConfig, PluginConfig};
