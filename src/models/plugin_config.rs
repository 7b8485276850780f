//! Plugin configuration model
//!
//! Mirrors the loosely-typed object handed over by the host bridge. Every
//! field except the SDK token is optional; absent values fall back to SDK
//! defaults during translation.

use std::fmt;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::utils::file::read_file;

/// Document types understood by the plugin schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    Passport,
    DrivingLicence,
    NationalIdentityCard,
    ResidencePermit,
    Visa,
    WorkPermit,
    Generic,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Passport => "PASSPORT",
            DocumentType::DrivingLicence => "DRIVING_LICENCE",
            DocumentType::NationalIdentityCard => "NATIONAL_IDENTITY_CARD",
            DocumentType::ResidencePermit => "RESIDENCE_PERMIT",
            DocumentType::Visa => "VISA",
            DocumentType::WorkPermit => "WORK_PERMIT",
            DocumentType::Generic => "GENERIC",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Face capture variant tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FaceCaptureType {
    Photo,
    Video,
    Motion,
}

/// NFC policy requested by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NfcOption {
    Disabled,
    Optional,
    Required,
}

/// Document capture options
///
/// Either an exact `doc_type`/`country_code` pair, a list of selectable
/// types, or nothing at all (unconstrained document step).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentOptions {
    #[serde(default)]
    pub doc_type: Option<DocumentType>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub allowed_document_types: Option<Vec<DocumentType>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceOptions {
    #[serde(rename = "type", default)]
    pub capture_type: Option<FaceCaptureType>,
    #[serde(default)]
    pub show_intro: Option<bool>,
    #[serde(default)]
    pub manual_video_capture: Option<bool>,
    #[serde(default)]
    pub record_audio: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowSteps {
    #[serde(default)]
    pub welcome: Option<bool>,
    #[serde(default)]
    pub proof_of_address: Option<bool>,
    #[serde(default)]
    pub capture_document: Option<DocumentOptions>,
    #[serde(default)]
    pub capture_face: Option<FaceOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Localisation {
    /// Name of the strings table bundled with the host application
    #[serde(default)]
    pub strings_file_name: Option<String>,
}

/// Configuration received from the host plugin
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginConfig {
    pub sdk_token: String,
    /// Selects studio mode when present
    #[serde(default)]
    pub workflow_run_id: Option<String>,
    #[serde(default)]
    pub flow_steps: Option<FlowSteps>,
    #[serde(default)]
    pub hide_logo: Option<bool>,
    #[serde(default)]
    pub logo_co_brand: Option<bool>,
    #[serde(default)]
    pub disable_mobile_sdk_analytics: Option<bool>,
    #[serde(rename = "disableNFC", default)]
    pub disable_nfc: Option<bool>,
    #[serde(default)]
    pub localisation: Option<Localisation>,
    #[serde(default)]
    pub nfc_option: Option<NfcOption>,
}

impl PluginConfig {
    /// Create a minimal classic-mode configuration
    pub fn new(sdk_token: impl Into<String>) -> Self {
        Self {
            sdk_token: sdk_token.into(),
            ..Default::default()
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::parse("json", e))
    }

    /// Convert an already-decoded bridge object
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::parse("json", e))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::parse("yaml", e))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse("toml", e))
    }

    /// Load from content in any supported format.
    ///
    /// JSON is detected by a leading `{`. Otherwise TOML is tried when the
    /// content is valid TOML, and YAML is the fallback.
    pub fn load_from_content(content: &str) -> Result<Self> {
        let trimmed = content.trim_start();
        if trimmed.starts_with('{') {
            debug!("Loading plugin config as JSON");
            return Self::from_json(trimmed);
        }

        if toml::from_str::<toml::Value>(content).is_ok() {
            debug!("Loading plugin config as TOML");
            return Self::from_toml(content);
        }

        debug!("Loading plugin config as YAML");
        Self::from_yaml(content)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = read_file(path.as_ref())?;
        Self::load_from_content(&content)
    }

    /// Whether this configuration selects the studio (workflow) mode
    pub fn is_studio(&self) -> bool {
        self.workflow_run_id.is_some()
    }
}
