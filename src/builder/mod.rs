//! Translation of a [`PluginConfig`] into an SDK configuration
//!
//! The presence of `workflowRunId` is the only thing deciding the mode:
//! with it the studio path runs, without it the classic path does. Either
//! path runs to completion or returns an error; no partially built
//! configuration is ever returned.
//!
//! ```rust
//! use onfido_config::builder::{OnfidoConfigBuilder, OnfidoMode};
//! use onfido_config::models::{Appearance, PluginConfig};
//! use onfido_config::sdk::StaticAssetResolver;
//!
//! let builder = OnfidoConfigBuilder::new(StaticAssetResolver::new());
//! let mut config = PluginConfig::new("sdk-token");
//! config.workflow_run_id = Some("run-id".to_string());
//!
//! let mode = builder
//!     .build(&config, &Appearance::default(), None, None)
//!     .unwrap();
//! assert!(matches!(mode, OnfidoMode::Studio(_)));
//! ```

mod features;
mod steps;

pub use features::{
    custom_localization, enterprise_features, nfc_configuration, COBRAND_LOGO_DARK,
    COBRAND_LOGO_LIGHT,
};
pub use steps::{configure_classic_steps, document_step, face_step};

use log::{debug, info, warn};
use serde::Serialize;

use crate::error::Result;
use crate::models::{Appearance, PluginConfig};
use crate::sdk::{
    AssetResolver, ClassicFlowBuilder, MediaCallbackHandle, NfcConfiguration, OnfidoConfig,
    TokenHandlerHandle, WorkflowBuilder, WorkflowConfiguration,
};

/// The SDK mode selected for a plugin configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", content = "config", rename_all = "camelCase")]
pub enum OnfidoMode<C = OnfidoConfig, W = WorkflowConfiguration> {
    Classic(C),
    Studio(W),
}

impl<C, W> OnfidoMode<C, W> {
    pub fn is_studio(&self) -> bool {
        matches!(self, OnfidoMode::Studio(_))
    }

    pub fn classic(&self) -> Option<&C> {
        match self {
            OnfidoMode::Classic(config) => Some(config),
            OnfidoMode::Studio(_) => None,
        }
    }

    pub fn studio(&self) -> Option<&W> {
        match self {
            OnfidoMode::Studio(config) => Some(config),
            OnfidoMode::Classic(_) => None,
        }
    }
}

/// Translates plugin configurations, resolving images through `R`
#[derive(Debug, Clone, Default)]
pub struct OnfidoConfigBuilder<R> {
    assets: R,
}

impl<R: AssetResolver> OnfidoConfigBuilder<R> {
    pub fn new(assets: R) -> Self {
        OnfidoConfigBuilder { assets }
    }

    pub fn assets(&self) -> &R {
        &self.assets
    }

    /// Build using the crate's own SDK configuration types
    pub fn build(
        &self,
        config: &PluginConfig,
        appearance: &Appearance,
        media_callback: Option<MediaCallbackHandle>,
        token_handler: Option<TokenHandlerHandle>,
    ) -> Result<OnfidoMode> {
        self.build_with::<OnfidoConfig, WorkflowConfiguration>(
            config,
            appearance,
            media_callback,
            token_handler,
        )
    }

    /// Build against any implementation of the SDK builder traits
    pub fn build_with<C, W>(
        &self,
        config: &PluginConfig,
        appearance: &Appearance,
        media_callback: Option<MediaCallbackHandle>,
        token_handler: Option<TokenHandlerHandle>,
    ) -> Result<OnfidoMode<C, W>>
    where
        C: ClassicFlowBuilder,
        W: WorkflowBuilder,
    {
        match config.workflow_run_id.as_deref() {
            Some(workflow_run_id) => {
                info!("Building studio configuration for workflow run {}", workflow_run_id);
                let workflow = self.build_studio::<W>(
                    workflow_run_id,
                    config,
                    appearance,
                    media_callback,
                    token_handler,
                )?;
                Ok(OnfidoMode::Studio(workflow))
            }
            None => {
                info!("Building classic configuration");
                let classic = self.build_classic::<C>(config, appearance, media_callback)?;
                Ok(OnfidoMode::Classic(classic))
            }
        }
    }

    fn build_studio<W: WorkflowBuilder>(
        &self,
        workflow_run_id: &str,
        config: &PluginConfig,
        appearance: &Appearance,
        media_callback: Option<MediaCallbackHandle>,
        token_handler: Option<TokenHandlerHandle>,
    ) -> Result<W> {
        let mut workflow = W::new(workflow_run_id, &config.sdk_token);

        workflow = workflow.with_enterprise_features(enterprise_features(config, &self.assets)?);
        workflow = workflow.with_appearance(appearance);

        if let Some(table_name) = custom_localization(config) {
            workflow = workflow.with_custom_localization(table_name);
        }

        if let Some(callback) = media_callback {
            workflow = workflow.with_media_callback(callback);
        }

        if let Some(handler) = token_handler {
            workflow = workflow.with_encrypted_biometric_token_handler(handler);
        }

        Ok(workflow)
    }

    fn build_classic<C: ClassicFlowBuilder>(
        &self,
        config: &PluginConfig,
        appearance: &Appearance,
        media_callback: Option<MediaCallbackHandle>,
    ) -> Result<C> {
        let mut builder = C::new(&config.sdk_token, appearance);

        configure_classic_steps(&mut builder, config.flow_steps.as_ref())?;

        builder.with_enterprise_features(enterprise_features(config, &self.assets)?);

        // The policy below is always applied after the forced off, so
        // `disableNFC` only sticks when `nfcOption` resolves to off as well.
        let force_off = config.disable_nfc == Some(true);
        if force_off {
            builder.with_nfc(NfcConfiguration::Off);
        }
        let nfc = nfc_configuration(config.nfc_option);
        if force_off && nfc != NfcConfiguration::Off {
            warn!(
                "disableNFC is set but nfcOption resolves to {:?}, which takes precedence",
                nfc
            );
        }
        debug!("NFC configuration: {:?}", nfc);
        builder.with_nfc(nfc);

        if let Some(table_name) = custom_localization(config) {
            builder.with_custom_localization(table_name);
        }

        if let Some(callback) = media_callback {
            builder.with_media_callback(callback);
        }

        Ok(builder)
    }
}
