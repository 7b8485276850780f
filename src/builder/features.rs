//! Helpers shared by the classic and studio paths

use log::debug;

use crate::error::{Error, Result};
use crate::models::{NfcOption, PluginConfig};
use crate::sdk::{AssetResolver, EnterpriseFeatures, Image, NfcConfiguration};

pub const COBRAND_LOGO_LIGHT: &str = "cobrand-logo-light";
pub const COBRAND_LOGO_DARK: &str = "cobrand-logo-dark";

/// Build the enterprise features for this call.
///
/// Flags that are absent or `false` are left unset. Co-branding needs both
/// logos to be resolvable.
pub fn enterprise_features<R>(config: &PluginConfig, assets: &R) -> Result<EnterpriseFeatures>
where
    R: AssetResolver + ?Sized,
{
    let mut features = EnterpriseFeatures::builder();

    if config.hide_logo == Some(true) {
        features = features.with_hide_onfido_logo(true);
    }

    if config.logo_co_brand == Some(true) {
        let light = resolve_image(assets, COBRAND_LOGO_LIGHT)?;
        let dark = resolve_image(assets, COBRAND_LOGO_DARK)?;
        features = features.with_cobranding_logo(light, dark);
    }

    if config.disable_mobile_sdk_analytics == Some(true) {
        features = features.with_disable_mobile_sdk_analytics(true);
    }

    Ok(features.build())
}

fn resolve_image<R>(assets: &R, name: &str) -> Result<Image>
where
    R: AssetResolver + ?Sized,
{
    assets.image(name).ok_or_else(|| Error::MissingCoBrandAssets {
        name: name.to_string(),
    })
}

/// Strings table name, passed through without checking it exists
pub fn custom_localization(config: &PluginConfig) -> Option<&str> {
    let table = config.localisation.as_ref()?.strings_file_name.as_deref();
    if let Some(table) = table {
        debug!("Using custom localization table {}", table);
    }
    table
}

pub fn nfc_configuration(option: Option<NfcOption>) -> NfcConfiguration {
    match option {
        Some(NfcOption::Disabled) => NfcConfiguration::Off,
        Some(NfcOption::Optional) | None => NfcConfiguration::Optional,
        Some(NfcOption::Required) => NfcConfiguration::Required,
    }
}
