//! Tests for `tgvercel hook`.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::support::commands::run;
use crate::support::*;

/// Mount a deployment whose project stores the bot token and `secret`
/// for `stored_for`.
async fn mount_project(
    vercel: &MockServer,
    target: Option<&str>,
    secret: &str,
    stored_for: &[&str],
) {
    Mock::given(method("GET"))
        .and(path("/v13/deployments/app.example.com"))
        .and(header("authorization", "Bearer vercel-test-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(deployment(target, "app.example.com")),
        )
        .mount(vercel)
        .await;
    Mock::given(method("GET"))
        .and(path("/v9/projects/prj_1/env"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "envs": [
                env_entry("env_token", "TELEGRAM_TOKEN", stored_for),
                env_entry("env_secret", "TELEGRAM_WEBHOOK_SECRET", stored_for),
            ]
        })))
        .mount(vercel)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/projects/prj_1/env/env_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(decrypted_env(
            "env_token",
            "TELEGRAM_TOKEN",
            BOT_TOKEN,
            stored_for,
        )))
        .mount(vercel)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/projects/prj_1/env/env_secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(decrypted_env(
            "env_secret",
            "TELEGRAM_WEBHOOK_SECRET",
            secret,
            stored_for,
        )))
        .mount(vercel)
        .await;
}

async fn mount_get_me(telegram: &MockServer) {
    Mock::given(method("POST"))
        .and(path(format!("/bot{BOT_TOKEN}/getMe")))
        .respond_with(ResponseTemplate::new(200).set_body_json(bot_user()))
        .mount(telegram)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_hook_registers_production_deployment() {
    let vercel = MockServer::start().await;
    let telegram = MockServer::start().await;
    mount_project(&vercel, Some("production"), "S", &["production"]).await;
    mount_get_me(&telegram).await;
    Mock::given(method("POST"))
        .and(path(format!("/bot{BOT_TOKEN}/setWebhook")))
        .and(body_json(json!({
            "url": "https://app.example.com/api/tg/webhook?secret=S"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true, "result": true, "description": "Webhook was set"
        })))
        .expect(1)
        .mount(&telegram)
        .await;

    let t = Test::with_apis(&vercel.uri(), &telegram.uri());
    let output = run(move || {
        t.hook(&[
            "https://app.example.com",
            "/api/tg/webhook",
            "--token",
            VERCEL_TOKEN,
        ])
    })
    .await;

    assert_success(&output);
    assert_stdout_contains(&output, "Webhook was set");
    assert_stdout_contains(&output, "@test_bot");
    assert_stdout_contains(&output, "production");
    assert_output_excludes(&output, BOT_TOKEN);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_hook_encodes_secret() {
    let vercel = MockServer::start().await;
    let telegram = MockServer::start().await;
    mount_project(&vercel, None, "a b&c=d", &["preview", "development"]).await;
    mount_get_me(&telegram).await;
    Mock::given(method("POST"))
        .and(path(format!("/bot{BOT_TOKEN}/setWebhook")))
        .and(body_json(json!({
            "url": "https://app.example.com/bot?secret=a+b%26c%3Dd"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true, "result": true, "description": "Webhook was set"
        })))
        .expect(1)
        .mount(&telegram)
        .await;

    let t = Test::with_apis(&vercel.uri(), &telegram.uri());
    let output = run(move || {
        t.cmd()
            .args(["hook", "--no-banner", "app.example.com", "/bot"])
            .env("VERCEL_TOKEN", VERCEL_TOKEN)
            .output()
            .unwrap()
    })
    .await;

    assert_success(&output);
    assert_stdout_contains(&output, "preview");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_hook_fails_when_target_has_no_variables() {
    let vercel = MockServer::start().await;
    let telegram = MockServer::start().await;
    mount_project(&vercel, None, "S", &["production"]).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bot_user()))
        .expect(0)
        .mount(&telegram)
        .await;

    let t = Test::with_apis(&vercel.uri(), &telegram.uri());
    let output = run(move || {
        t.hook(&["app.example.com", "/api/tg/webhook", "--token", VERCEL_TOKEN])
    })
    .await;

    assert_failure(&output);
    assert_stderr_contains(
        &output,
        "env TELEGRAM_WEBHOOK_SECRET not found in target preview",
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_hook_reports_telegram_description() {
    let vercel = MockServer::start().await;
    let telegram = MockServer::start().await;
    mount_project(&vercel, Some("production"), "S", &["production"]).await;
    mount_get_me(&telegram).await;
    Mock::given(method("POST"))
        .and(path(format!("/bot{BOT_TOKEN}/setWebhook")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: bad webhook: Failed to resolve host"
        })))
        .mount(&telegram)
        .await;

    let t = Test::with_apis(&vercel.uri(), &telegram.uri());
    let output = run(move || {
        t.hook(&["app.example.com", "/api/tg/webhook", "--token", VERCEL_TOKEN])
    })
    .await;

    assert_failure(&output);
    assert_stderr_contains(
        &output,
        "failed to set webhook: Bad Request: bad webhook: Failed to resolve host",
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_hook_unknown_deployment() {
    let vercel = MockServer::start().await;
    let telegram = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v13/deployments/dpl_missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"code": "not_found", "message": "Deployment not found"}
        })))
        .mount(&vercel)
        .await;

    let t = Test::with_apis(&vercel.uri(), &telegram.uri());
    let output = run(move || {
        t.hook(&["dpl_missing", "/api/tg/webhook", "--token", VERCEL_TOKEN])
    })
    .await;

    assert_failure(&output);
    assert_stderr_contains(&output, "failed to get deployment: 404");
}
