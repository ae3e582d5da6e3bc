// Runs in its own binary so no other test can save first.
mod support;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn load_before_any_save_conflicts() {
    let res = reqwest::Client::new()
        .post(support::http_url("/load"))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body: Value = res.json().await.expect("json body");
    assert_eq!(body["error"], "no saved game to load");
}
