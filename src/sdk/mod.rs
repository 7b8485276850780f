//! SDK-facing surface
//!
//! The verification SDK is reached only through the traits in this module,
//! which keeps the translation testable without the SDK present. The
//! default implementations record the configuration as plain data.

pub mod assets;
pub mod callbacks;
pub mod classic;
pub mod types;
pub mod workflow;

pub use assets::{AssetResolver, DirectoryAssetResolver, StaticAssetResolver};
pub use callbacks::{
    EncryptedBiometricTokenHandler, MediaCallback, MediaCallbackHandle, TokenHandlerHandle,
};
pub use classic::{ClassicFlowBuilder, OnfidoConfig};
pub use types::*;
pub use workflow::{WorkflowBuilder, WorkflowConfiguration};
