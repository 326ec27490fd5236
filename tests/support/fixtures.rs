//! Canned API payloads.

use serde_json::{json, Value};

pub const PROJECT_ID: &str = "prj_1";
pub const BOT_TOKEN: &str = "123456:ABCDEFGHIJKLMNOP";
pub const VERCEL_TOKEN: &str = "vercel-test-token";

/// `GET /v13/deployments/{idOrUrl}` body. `target` is `null` for previews.
pub fn deployment(target: Option<&str>, url: &str) -> Value {
    json!({
        "id": "dpl_1",
        "url": url,
        "target": target,
        "projectId": PROJECT_ID,
        "readyState": "READY"
    })
}

/// One entry of the env list, without a value.
pub fn env_entry(id: &str, key: &str, targets: &[&str]) -> Value {
    json!({
        "id": id,
        "key": key,
        "type": "encrypted",
        "target": targets,
        "value": "",
        "configurationId": null
    })
}

/// `GET /v1/projects/{id}/env/{envId}` body.
pub fn decrypted_env(id: &str, key: &str, value: &str, targets: &[&str]) -> Value {
    json!({
        "id": id,
        "key": key,
        "type": "encrypted",
        "target": targets,
        "value": value,
        "decrypted": true
    })
}

/// `getMe` result.
pub fn bot_user() -> Value {
    json!({
        "ok": true,
        "result": {"id": 123456, "is_bot": true, "first_name": "Test", "username": "test_bot"}
    })
}
