use serde_json::{Value, json};
use stepup_adapters::config::AllowedOrigins;
use stepup_core::StepUpPolicy;

use crate::helpers::TestApp;

#[tokio::test]
async fn read_reports_requires_any_provider_without_remembered_browser() {
    let app = TestApp::new().await;

    let response = app.get_step_up(&[("scope", "openid read:reports")]).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "multifactor": { "provider": "any", "allowRememberBrowser": false } })
    );
}

#[tokio::test]
async fn scenarios_without_step_up() {
    let app = TestApp::new().await;

    for scope in ["openid profile", "read:reports-extended", ""] {
        let response = app.get_step_up(&[("scope", scope)]).await;
        assert_eq!(response.status().as_u16(), 200);

        let body: Value = response.json().await.unwrap();
        assert_eq!(
            body,
            json!({ "multifactor": { "provider": "none" } }),
            "scope {scope:?} must not trigger step-up"
        );
    }
}

#[tokio::test]
async fn missing_scope_parameter_needs_no_challenge() {
    let app = TestApp::new().await;

    let response = app.get_step_up(&[]).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["multifactor"]["provider"], "none");
}

#[tokio::test]
async fn cors_allows_only_configured_origins() {
    let origins = AllowedOrigins::parse(&["https://reports.example.com"]).unwrap();
    let app = TestApp::with_policy(StepUpPolicy::default(), Some(origins)).await;

    let allowed = app
        .http_client
        .get(format!("{}/step-up", &app.address))
        .header("origin", "https://reports.example.com")
        .send()
        .await
        .unwrap();
    assert_eq!(
        allowed
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("https://reports.example.com")
    );

    let denied = app
        .http_client
        .get(format!("{}/step-up", &app.address))
        .header("origin", "https://evil.example.com")
        .send()
        .await
        .unwrap();
    assert!(denied.headers().get("access-control-allow-origin").is_none());
}
