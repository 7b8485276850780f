//! Typed SDK configuration values
//!
//! These are the values the SDK builders accept. Everything here is plain
//! data so translations can be compared and serialized.

use std::path::PathBuf;

use serde::Serialize;

/// Image resource resolved by an [`AssetResolver`](super::AssetResolver)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Image {
    pub fn named(name: impl Into<String>) -> Self {
        Image {
            name: name.into(),
            path: None,
        }
    }
}

/// A pre-selected document type. Passport is the only type without an
/// issuing country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DocumentStepType {
    Passport,
    DrivingLicence { country: String },
    NationalIdentityCard { country: String },
    ResidencePermit { country: String },
    Visa { country: String },
    WorkPermit { country: String },
    Generic { country: String },
}

/// Document types the end user may pick from at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectableDocumentType {
    Passport,
    DrivingLicence,
    IdentityCard,
    ResidencePermit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DocumentStep {
    /// No constraint on the document type
    Unconstrained,
    Typed { document: DocumentStepType },
    Selectable { types: Vec<SelectableDocumentType> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "variant", rename_all = "camelCase")]
pub enum FaceStepVariant {
    #[serde(rename_all = "camelCase")]
    Photo { show_selfie_intro_screen: bool },
    #[serde(rename_all = "camelCase")]
    Video {
        show_intro_video: bool,
        manual_liveness_capture: bool,
    },
    #[serde(rename_all = "camelCase")]
    Motion { record_audio: bool },
}

/// One step of a classic flow, in the order it was added
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "camelCase")]
pub enum FlowStep {
    Welcome,
    ProofOfAddress,
    Document { document: DocumentStep },
    Face { face: FaceStepVariant },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NfcConfiguration {
    Off,
    Optional,
    Required,
}

impl Default for NfcConfiguration {
    fn default() -> Self {
        NfcConfiguration::Optional
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CobrandingLogo {
    pub light: Image,
    pub dark: Image,
}

/// Branding and analytics toggles. `None` leaves the SDK default in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnterpriseFeatures {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_onfido_logo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cobranding_logo: Option<CobrandingLogo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_mobile_sdk_analytics: Option<bool>,
}

impl EnterpriseFeatures {
    pub fn builder() -> EnterpriseFeaturesBuilder {
        EnterpriseFeaturesBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct EnterpriseFeaturesBuilder {
    features: EnterpriseFeatures,
}

impl EnterpriseFeaturesBuilder {
    pub fn with_hide_onfido_logo(mut self, hide: bool) -> Self {
        self.features.hide_onfido_logo = Some(hide);
        self
    }

    pub fn with_cobranding_logo(mut self, light: Image, dark: Image) -> Self {
        self.features.cobranding_logo = Some(CobrandingLogo { light, dark });
        self
    }

    pub fn with_disable_mobile_sdk_analytics(mut self, disable: bool) -> Self {
        self.features.disable_mobile_sdk_analytics = Some(disable);
        self
    }

    pub fn build(self) -> EnterpriseFeatures {
        self.features
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enterprise_features_builder() {
        let features = EnterpriseFeatures::builder()
            .with_hide_onfido_logo(true)
            .with_cobranding_logo(Image::named("light"), Image::named("dark"))
            .build();

        assert_eq!(features.hide_onfido_logo, Some(true));
        assert_eq!(features.disable_mobile_sdk_analytics, None);
        let logo = features.cobranding_logo.unwrap();
        assert_eq!(logo.light.name, "light");
        assert_eq!(logo.dark.name, "dark");
    }

    #[test]
    fn test_flow_step_serialization() {
        let step = FlowStep::Document {
            document: DocumentStep::Typed {
                document: DocumentStepType::DrivingLicence {
                    country: "FR".to_string(),
                },
            },
        };
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["step"], "document");
        assert_eq!(json["document"]["kind"], "typed");
        assert_eq!(json["document"]["document"]["type"], "drivingLicence");
        assert_eq!(json["document"]["document"]["country"], "FR");
    }
}
