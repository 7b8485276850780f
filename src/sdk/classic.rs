//! Classic (step-by-step) flow configuration

use serde::Serialize;

use super::callbacks::MediaCallbackHandle;
use super::types::{DocumentStep, EnterpriseFeatures, FaceStepVariant, FlowStep, NfcConfiguration};
use crate::models::Appearance;

/// Incremental builder surface of the classic SDK configuration
pub trait ClassicFlowBuilder {
    fn new(sdk_token: &str, appearance: &Appearance) -> Self
    where
        Self: Sized;

    fn with_welcome_step(&mut self);
    fn with_proof_of_address_step(&mut self);
    fn with_document_step(&mut self, step: DocumentStep);
    fn with_face_step(&mut self, variant: FaceStepVariant);
    fn with_enterprise_features(&mut self, features: EnterpriseFeatures);
    fn with_nfc(&mut self, nfc: NfcConfiguration);
    fn with_custom_localization(&mut self, table_name: &str);
    fn with_media_callback(&mut self, callback: MediaCallbackHandle);
}

/// Classic flow configuration accumulated step by step
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnfidoConfig {
    pub sdk_token: String,
    pub appearance: Appearance,
    pub steps: Vec<FlowStep>,
    pub enterprise_features: EnterpriseFeatures,
    pub nfc: NfcConfiguration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localization_table: Option<String>,
    #[serde(skip)]
    pub media_callback: Option<MediaCallbackHandle>,
}

impl OnfidoConfig {
    pub fn document_steps(&self) -> impl Iterator<Item = &DocumentStep> {
        self.steps.iter().filter_map(|step| match step {
            FlowStep::Document { document } => Some(document),
            _ => None,
        })
    }

    pub fn face_steps(&self) -> impl Iterator<Item = &FaceStepVariant> {
        self.steps.iter().filter_map(|step| match step {
            FlowStep::Face { face } => Some(face),
            _ => None,
        })
    }
}

impl ClassicFlowBuilder for OnfidoConfig {
    fn new(sdk_token: &str, appearance: &Appearance) -> Self {
        OnfidoConfig {
            sdk_token: sdk_token.to_string(),
            appearance: appearance.clone(),
            steps: Vec::new(),
            enterprise_features: EnterpriseFeatures::default(),
            nfc: NfcConfiguration::default(),
            localization_table: None,
            media_callback: None,
        }
    }

    fn with_welcome_step(&mut self) {
        self.steps.push(FlowStep::Welcome);
    }

    fn with_proof_of_address_step(&mut self) {
        self.steps.push(FlowStep::ProofOfAddress);
    }

    fn with_document_step(&mut self, step: DocumentStep) {
        self.steps.push(FlowStep::Document { document: step });
    }

    fn with_face_step(&mut self, variant: FaceStepVariant) {
        self.steps.push(FlowStep::Face { face: variant });
    }

    fn with_enterprise_features(&mut self, features: EnterpriseFeatures) {
        self.enterprise_features = features;
    }

    fn with_nfc(&mut self, nfc: NfcConfiguration) {
        self.nfc = nfc;
    }

    fn with_custom_localization(&mut self, table_name: &str) {
        self.localization_table = Some(table_name.to_string());
    }

    fn with_media_callback(&mut self, callback: MediaCallbackHandle) {
        self.media_callback = Some(callback);
    }
}
