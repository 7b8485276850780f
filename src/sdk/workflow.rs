//! Studio (workflow) configuration
//!
//! Every `with_*` call consumes the value and returns an updated one, so the
//! result has to be threaded forward.

use serde::Serialize;

use super::callbacks::{MediaCallbackHandle, TokenHandlerHandle};
use super::types::EnterpriseFeatures;
use crate::models::Appearance;

pub trait WorkflowBuilder: Sized {
    fn new(workflow_run_id: &str, sdk_token: &str) -> Self;

    fn with_enterprise_features(self, features: EnterpriseFeatures) -> Self;
    fn with_appearance(self, appearance: &Appearance) -> Self;
    fn with_custom_localization(self, table_name: &str) -> Self;
    fn with_media_callback(self, callback: MediaCallbackHandle) -> Self;
    fn with_encrypted_biometric_token_handler(self, handler: TokenHandlerHandle) -> Self;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowConfiguration {
    pub workflow_run_id: String,
    pub sdk_token: String,
    pub enterprise_features: EnterpriseFeatures,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appearance: Option<Appearance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localization_table: Option<String>,
    #[serde(skip)]
    pub media_callback: Option<MediaCallbackHandle>,
    #[serde(skip)]
    pub token_handler: Option<TokenHandlerHandle>,
}

impl WorkflowBuilder for WorkflowConfiguration {
    fn new(workflow_run_id: &str, sdk_token: &str) -> Self {
        WorkflowConfiguration {
            workflow_run_id: workflow_run_id.to_string(),
            sdk_token: sdk_token.to_string(),
            enterprise_features: EnterpriseFeatures::default(),
            appearance: None,
            localization_table: None,
            media_callback: None,
            token_handler: None,
        }
    }

    fn with_enterprise_features(self, features: EnterpriseFeatures) -> Self {
        WorkflowConfiguration {
            enterprise_features: features,
            ..self
        }
    }

    fn with_appearance(self, appearance: &Appearance) -> Self {
        WorkflowConfiguration {
            appearance: Some(appearance.clone()),
            ..self
        }
    }

    fn with_custom_localization(self, table_name: &str) -> Self {
        WorkflowConfiguration {
            localization_table: Some(table_name.to_string()),
            ..self
        }
    }

    fn with_media_callback(self, callback: MediaCallbackHandle) -> Self {
        WorkflowConfiguration {
            media_callback: Some(callback),
            ..self
        }
    }

    fn with_encrypted_biometric_token_handler(self, handler: TokenHandlerHandle) -> Self {
        WorkflowConfiguration {
            token_handler: Some(handler),
            ..self
        }
    }
}
