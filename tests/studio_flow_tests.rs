use std::sync::{Arc, Mutex};

use onfido_config::builder::{COBRAND_LOGO_DARK, COBRAND_LOGO_LIGHT};
use onfido_config::models::{Appearance, AppearanceConfig, PluginConfig};
use onfido_config::sdk::{
    EncryptedBiometricTokenHandler, MediaCallback, MediaCallbackHandle, StaticAssetResolver,
    TokenHandlerHandle, WorkflowConfiguration,
};
use onfido_config::{Error, OnfidoConfigBuilder, OnfidoMode};

#[cfg(test)]
mod studio_flow_tests {
    use onfido_config::models::MediaResult;

    use super::*;

    struct NoopCallback;

    impl MediaCallback for NoopCallback {
        fn on_media_captured(&self, _result: MediaResult) {}
    }

    #[derive(Default)]
    struct TokenStore {
        tokens: Mutex<Vec<(String, String)>>,
    }

    impl EncryptedBiometricTokenHandler for TokenStore {
        fn on_token_requested(
            &self,
            customer_user_hash: &str,
            completion: Box<dyn FnOnce(String) + Send>,
        ) {
            let tokens = self.tokens.lock().unwrap();
            let token = tokens
                .iter()
                .find(|(hash, _)| hash == customer_user_hash)
                .map(|(_, token)| token.clone())
                .unwrap_or_default();
            completion(token);
        }

        fn on_token_generated(&self, customer_user_hash: &str, encrypted_token: &str) {
            self.tokens
                .lock()
                .unwrap()
                .push((customer_user_hash.to_string(), encrypted_token.to_string()));
        }
    }

    fn translator() -> OnfidoConfigBuilder<StaticAssetResolver> {
        OnfidoConfigBuilder::new(
            StaticAssetResolver::new()
                .with_image(COBRAND_LOGO_LIGHT)
                .with_image(COBRAND_LOGO_DARK),
        )
    }

    fn build_studio(
        config: &PluginConfig,
        media: Option<MediaCallbackHandle>,
        token: Option<TokenHandlerHandle>,
    ) -> WorkflowConfiguration {
        match translator()
            .build(config, &Appearance::default(), media, token)
            .unwrap()
        {
            OnfidoMode::Studio(workflow) => workflow,
            OnfidoMode::Classic(_) => panic!("expected studio mode"),
        }
    }

    #[test]
    fn test_workflow_run_id_selects_studio() {
        let config = PluginConfig::from_json(
            r#"{
                "sdkToken": "token",
                "workflowRunId": "run-123",
                "flowSteps": { "welcome": true, "captureDocument": { "allowedDocumentTypes": ["VISA"] } }
            }"#,
        )
        .unwrap();

        // Flow steps are not consulted in studio mode
        let workflow = build_studio(&config, None, None);
        assert_eq!(workflow.workflow_run_id, "run-123");
        assert_eq!(workflow.sdk_token, "token");
        assert_eq!(workflow.appearance, Some(Appearance::default()));
        assert!(workflow.media_callback.is_none());
        assert!(workflow.token_handler.is_none());
    }

    #[test]
    fn test_mode_depends_only_on_workflow_run_id() {
        let base = PluginConfig::from_json(
            r#"{ "sdkToken": "token", "hideLogo": true, "nfcOption": "REQUIRED" }"#,
        )
        .unwrap();

        let classic = translator()
            .build(&base, &Appearance::default(), None, None)
            .unwrap();
        assert!(!classic.is_studio());

        let studio_config = PluginConfig {
            workflow_run_id: Some("run".to_string()),
            ..base
        };
        let studio = translator()
            .build(&studio_config, &Appearance::default(), None, None)
            .unwrap();
        assert!(studio.is_studio());
        assert!(studio.classic().is_none());
    }

    #[test]
    fn test_enterprise_features_and_localization() {
        let config = PluginConfig::from_json(
            r#"{
                "sdkToken": "token",
                "workflowRunId": "run",
                "hideLogo": true,
                "logoCoBrand": true,
                "disableMobileSdkAnalytics": true,
                "localisation": { "stringsFileName": "Studio" }
            }"#,
        )
        .unwrap();

        let workflow = build_studio(&config, None, None);
        let features = &workflow.enterprise_features;
        assert_eq!(features.hide_onfido_logo, Some(true));
        assert_eq!(features.disable_mobile_sdk_analytics, Some(true));
        assert!(features.cobranding_logo.is_some());
        assert_eq!(workflow.localization_table.as_deref(), Some("Studio"));
    }

    #[test]
    fn test_missing_cobrand_assets_fails_studio() {
        let config = PluginConfig::from_json(
            r#"{ "sdkToken": "token", "workflowRunId": "run", "logoCoBrand": true }"#,
        )
        .unwrap();
        let result = OnfidoConfigBuilder::new(StaticAssetResolver::new()).build(
            &config,
            &Appearance::default(),
            None,
            None,
        );
        match result {
            Err(Error::MissingCoBrandAssets { name }) => assert_eq!(name, COBRAND_LOGO_LIGHT),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_callbacks_are_passed_through() {
        let config = PluginConfig {
            workflow_run_id: Some("run".to_string()),
            ..PluginConfig::new("token")
        };
        let store = Arc::new(TokenStore::default());
        let media = MediaCallbackHandle::new(NoopCallback);
        let token = TokenHandlerHandle::from_arc(store.clone());

        let workflow = build_studio(&config, Some(media.clone()), Some(token.clone()));
        assert_eq!(workflow.media_callback, Some(media));
        assert_eq!(workflow.token_handler, Some(token));

        let handler = workflow.token_handler.unwrap();
        handler.get().on_token_generated("user", "secret");

        let received = Arc::new(Mutex::new(String::new()));
        let sink = received.clone();
        handler.get().on_token_requested(
            "user",
            Box::new(move |token| *sink.lock().unwrap() = token),
        );
        assert_eq!(*received.lock().unwrap(), "secret");
    }

    #[test]
    fn test_custom_appearance_is_passed_through() {
        let appearance = AppearanceConfig {
            primary_color: Some("#FF0000".to_string()),
            ..Default::default()
        }
        .resolve();
        let config = PluginConfig {
            workflow_run_id: Some("run".to_string()),
            ..PluginConfig::new("token")
        };
        let mode = translator().build(&config, &appearance, None, None).unwrap();
        assert_eq!(mode.studio().unwrap().appearance, Some(appearance));
    }

    #[test]
    fn test_studio_serialization() {
        let config = PluginConfig {
            workflow_run_id: Some("run".to_string()),
            hide_logo: Some(true),
            ..PluginConfig::new("token")
        };
        let mode = translator()
            .build(&config, &Appearance::default(), None, None)
            .unwrap();
        let json = serde_json::to_value(&mode).unwrap();
        assert_eq!(json["mode"], "studio");
        assert_eq!(json["config"]["workflowRunId"], "run");
        assert_eq!(json["config"]["enterpriseFeatures"]["hideOnfidoLogo"], true);
        assert!(json["config"].get("mediaCallback").is_none());
    }
}
