//! End-to-end tests against a running server.

use std::time::Duration;

mod common;

fn static_config(path: &str, body: &str) -> String {
    format!(
        r#"{{
            "port": 8888,
            "routes": [
                {{
                    "path": "{path}",
                    "responses": [
                        {{
                            "methods": ["GET"],
                            "response_type": "static",
                            "headers": {{"X-Origin": "mock"}},
                            "body": "{body}"
                        }},
                        {{
                            "methods": ["POST"],
                            "response_type": "script",
                            "script": "echo"
                        }}
                    ]
                }}
            ]
        }}"#
    )
}

#[tokio::test]
async fn declared_routes_answer_and_misses_map_to_errors() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("conf.json");
    std::fs::write(&config_path, static_config("/hello", "Hello from stubserve")).unwrap();

    let (addr, _reload) = common::start_server(&config_path).await;
    let client = reqwest::Client::new();
    let base = format!("http://{addr}");

    let resp = client.get(format!("{base}/hello")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["X-Origin"], "mock");
    assert_eq!(resp.text().await.unwrap(), "Hello from stubserve");

    let resp = client
        .post(format!("{base}/hello"))
        .body("ping")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "ping");

    let resp = client.put(format!("{base}/hello")).send().await.unwrap();
    assert_eq!(resp.status(), 405);

    let resp = client.get(format!("{base}/nope")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn file_routes_serve_bytes_and_fail_per_request() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("page.txt");
    std::fs::write(&page, "abc").unwrap();
    let config_path = dir.path().join("conf.json");
    std::fs::write(
        &config_path,
        format!(
            r#"{{
                "port": 8888,
                "routes": [
                    {{
                        "path": "/page",
                        "responses": [
                            {{"methods": ["GET"], "response_type": "file", "file_path": "{}"}}
                        ]
                    }},
                    {{
                        "path": "/gone",
                        "responses": [
                            {{"methods": ["GET"], "response_type": "file", "file_path": "{}/missing.txt"}}
                        ]
                    }}
                ]
            }}"#,
            page.display(),
            dir.path().display()
        ),
    )
    .unwrap();

    let (addr, _reload) = common::start_server(&config_path).await;
    let client = reqwest::Client::new();
    let base = format!("http://{addr}");

    let resp = client.get(format!("{base}/page")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["content-type"], "text/plain");
    assert_eq!(resp.text().await.unwrap(), "abc");

    let resp = client.get(format!("{base}/gone")).send().await.unwrap();
    assert_eq!(resp.status(), 500);

    // The failure stayed contained to its request.
    let resp = client.get(format!("{base}/page")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn unknown_extension_identifier_is_a_500() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("conf.json");
    std::fs::write(
        &config_path,
        r#"{
            "port": 8888,
            "routes": [
                {
                    "path": "/dyn",
                    "responses": [
                        {"methods": ["GET"], "response_type": "script", "script": "no_such_unit"}
                    ]
                }
            ]
        }"#,
    )
    .unwrap();

    let (addr, _reload) = common::start_server(&config_path).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("http://{addr}/dyn"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 500);
}

#[tokio::test]
async fn reload_swaps_routes_and_survives_bad_edits() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("conf.json");
    std::fs::write(&config_path, static_config("/v", "one")).unwrap();

    let (addr, reload) = common::start_server(&config_path).await;
    let client = reqwest::Client::new();
    let url = format!("http://{addr}/v");

    let resp = client.get(&url).send().await.unwrap();
    assert_eq!(resp.text().await.unwrap(), "one");

    // A good edit takes effect without restarting the server.
    std::fs::write(&config_path, static_config("/v", "two, reloaded")).unwrap();
    reload.send(()).unwrap();
    common::wait_for_body(&client, &url, "two, reloaded").await;

    // A broken edit is rejected and the previous table keeps serving.
    std::fs::write(&config_path, "{ definitely not json").unwrap();
    reload.send(()).unwrap();
    tokio::time::sleep(Duration::from_millis(300)).await;

    let resp = client.get(&url).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "two, reloaded");
}
