//! Core data models for the plugin side of the translation
//!
//! This module contains the data handed over by the host: the plugin
//! configuration, its appearance description and the media results sent
//! back through the media callback.
//!
//! # Usage
//!
//! ```rust
//! use onfido_config::models::{NfcOption, PluginConfig};
//!
//! let config = PluginConfig::from_json(r#"{ "sdkToken": "token", "nfcOption": "REQUIRED" }"#)
//!     .unwrap();
//! assert_eq!(config.nfc_option, Some(NfcOption::Required));
//! assert!(!config.is_studio());
//! ```

mod appearance;
mod media;
mod plugin_config;

pub use appearance::*;
pub use media::*;
pub use plugin_config::*;
