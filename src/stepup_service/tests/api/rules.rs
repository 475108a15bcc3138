use serde_json::{Value, json};

use crate::helpers::TestApp;

#[tokio::test]
async fn rule_hands_back_user_and_decided_context() {
    let app = TestApp::new().await;
    let user = json!({ "user_id": "auth0|5f1c", "email": "analyst@example.com" });

    let response = app
        .post_rule(&json!({
            "user": user,
            "context": {
                "clientID": "reports-spa",
                "request": { "query": { "scope": "read:reports openid read:reports" } }
            }
        }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["user"], user);
    assert_eq!(body["context"]["clientID"], "reports-spa");
    assert_eq!(
        body["context"]["request"]["query"]["scope"],
        "read:reports openid read:reports"
    );
    assert_eq!(
        body["context"]["multifactor"],
        json!({ "provider": "any", "allowRememberBrowser": false })
    );
}

#[tokio::test]
async fn malformed_scope_fails_open() {
    let app = TestApp::new().await;

    for scope in [json!(null), json!(17), json!(["read:reports"])] {
        let response = app
            .post_rule(&json!({
                "user": {},
                "context": { "request": { "query": { "scope": scope } } }
            }))
            .await;
        assert_eq!(response.status().as_u16(), 200);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["context"]["multifactor"], json!({ "provider": "none" }));
    }
}

#[tokio::test]
async fn null_or_mistyped_context_fails_open() {
    let app = TestApp::new().await;

    for context in [
        json!(null),
        json!({ "request": null }),
        json!({ "request": { "query": null } }),
        json!({ "request": { "query": "scope=read:reports" } }),
    ] {
        let response = app
            .post_rule(&json!({ "user": { "user_id": "auth0|1" }, "context": context }))
            .await;
        assert_eq!(response.status().as_u16(), 200);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["user"], json!({ "user_id": "auth0|1" }));
        assert_eq!(body["context"]["multifactor"], json!({ "provider": "none" }));
    }
}

#[tokio::test]
async fn evaluating_an_already_decided_context_is_stable() {
    let app = TestApp::new().await;

    let first: Value = app
        .post_rule(&json!({
            "user": { "user_id": "auth0|1" },
            "context": { "request": { "query": { "scope": "openid read:reports" } } }
        }))
        .await
        .json()
        .await
        .unwrap();

    let second: Value = app.post_rule(&first).await.json().await.unwrap();

    assert_eq!(first, second);
}
