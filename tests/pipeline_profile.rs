mod common;

use std::sync::Arc;

use common::{GATES_PATH, mixed_links, page_props, profile_html, socials, test_config};
use linktree_snapshot::prelude::*;
use linktree_snapshot::runner::{self, RunOptions};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_profile(server: &MockServer, username: &str, props: &Value) {
    Mock::given(method("GET"))
        .and(path(format!("/{username}")))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=utf-8")
                .set_body_string(profile_html(props)),
        )
        .expect(1)
        .mount(server)
        .await;
}

fn service(config: &Config) -> ProfileService<ReqwestFetcher> {
    let fetcher = Arc::new(ReqwestFetcher::from_config(config).unwrap());
    ProfileService::from_config(fetcher, config)
}

#[tokio::test]
async fn test_profile_with_gated_link_issues_one_gate_request() {
    let server = MockServer::start().await;
    let config = test_config(&server.uri());
    mount_profile(&server, "tester", &page_props("tester", mixed_links(), socials())).await;

    Mock::given(method("POST"))
        .and(path(GATES_PATH))
        .and(header("origin", config.base_url.as_str()))
        .and(header("referer", config.base_url.as_str()))
        .and(body_json(json!({
            "accountId": 4242,
            "validationInput": { "acceptedSensitiveContent": [2] },
            "requestSource": { "referrer": null }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "links": [{ "url": "https://b.example" }] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let record = service(&config)
        .fetch_profile(None, Some("tester"))
        .await
        .unwrap();

    assert_eq!(record.username, "tester");
    assert_eq!(record.id, 4242);
    assert_eq!(record.url, format!("{}/tester", config.base_url));
    assert_eq!(
        record.links,
        vec![
            Link::visible("https://a.example".to_string(), Some("A".to_string())),
            Link::revealed("https://b.example".to_string()),
        ]
    );
    assert_eq!(record.gates, GateResolution::Resolved { revealed: 1 });
    assert_eq!(record.contacts.len(), 2);
    assert_eq!(record.contacts[0].title, "INSTAGRAM");
    assert_eq!(
        record.contacts[1].url.as_deref(),
        Some("mailto:tester@example.com")
    );
}

#[tokio::test]
async fn test_profile_without_gated_links_skips_gate_endpoint() {
    let server = MockServer::start().await;
    let config = test_config(&server.uri());
    let links = json!([
        { "id": 10, "url": "https://a.example", "locked": false, "title": "A", "type": "CLASSIC" },
        { "id": 11, "url": "https://c.example", "title": "C", "type": "CLASSIC" }
    ]);
    mount_profile(&server, "plain", &page_props("plain", links, json!([]))).await;

    Mock::given(method("POST"))
        .and(path(GATES_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let record = service(&config)
        .fetch_profile(None, Some("plain"))
        .await
        .unwrap();

    assert_eq!(record.links.len(), 2);
    assert_eq!(record.gates, GateResolution::NotRequired);
    assert!(record.contacts.is_empty());
}

#[tokio::test]
async fn test_supplied_url_is_kept_as_canonical_url() {
    let server = MockServer::start().await;
    let config = test_config(&server.uri());
    let links = json!([{ "id": 1, "url": "https://a.example", "type": "CLASSIC" }]);
    mount_profile(&server, "byurl", &page_props("byurl", links, json!([]))).await;

    let url = format!("{}/byurl", server.uri());
    let target = ProfileTarget::parse(&url, &config.profile_host).unwrap();
    let record = service(&config).fetch_target(&target).await.unwrap();

    assert_eq!(record.url, url);
    assert_eq!(record.username, "byurl");
}

#[tokio::test]
async fn test_page_without_hydration_payload_is_extraction_error() {
    let server = MockServer::start().await;
    let config = test_config(&server.uri());

    Mock::given(method("GET"))
        .and(path("/nodata"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>hi</body></html>"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(GATES_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = service(&config)
        .fetch_profile(None, Some("nodata"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Extraction { .. }));
}

#[tokio::test]
async fn test_missing_profile_page_is_transport_error() {
    let server = MockServer::start().await;
    let config = test_config(&server.uri());

    Mock::given(method("GET"))
        .and(path("/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let err = service(&config)
        .fetch_profile(None, Some("ghost"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Transport { .. }));
}

#[tokio::test]
async fn test_gate_failure_aborts_by_default() {
    let server = MockServer::start().await;
    let config = test_config(&server.uri());
    mount_profile(&server, "tester", &page_props("tester", mixed_links(), socials())).await;

    Mock::given(method("POST"))
        .and(path(GATES_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let err = service(&config)
        .fetch_profile(None, Some("tester"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Transport { .. }));
}

#[tokio::test]
async fn test_gate_failure_degrades_when_allowed() {
    let server = MockServer::start().await;
    let config = Config {
        gate_failure_policy: GateFailurePolicy::Degrade,
        ..test_config(&server.uri())
    };
    mount_profile(&server, "tester", &page_props("tester", mixed_links(), socials())).await;

    Mock::given(method("POST"))
        .and(path(GATES_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let record = service(&config)
        .fetch_profile(None, Some("tester"))
        .await
        .unwrap();

    assert_eq!(record.links.len(), 1);
    assert_eq!(record.gates.pending(), 1);
    assert!(matches!(record.gates, GateResolution::Failed { .. }));
    assert!(record.has_hidden_links());
}

#[tokio::test]
async fn test_run_writes_snapshot_artifact() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        output_dir: dir.path().join("out").to_string_lossy().into_owned(),
        ..test_config(&server.uri())
    };
    mount_profile(&server, "tester", &page_props("tester", mixed_links(), socials())).await;

    Mock::given(method("POST"))
        .and(path(GATES_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "links": [{ "url": "https://b.example" }] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let target = ProfileTarget::parse("@tester", &config.profile_host).unwrap();
    let options = RunOptions {
        write_artifact: true,
        print_console: false,
    };
    let outcome = runner::run(config, target, options).await.unwrap();

    let path = outcome.artifact.unwrap();
    assert_eq!(path, dir.path().join("out").join("linktree_tester.json"));

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["username"], "tester");
    assert_eq!(written["id"], 4242);
    assert_eq!(written["isActive"], true);
    assert_eq!(written["createdAtUnix"], 1_600_000_000_000_i64);
    assert_eq!(written["createdAt"], "2020-09-13T12:26:40.000Z");
    assert_eq!(
        written["links"],
        json!([
            { "title": "A", "url": "https://a.example" },
            { "title": null, "url": "https://b.example" }
        ])
    );
    assert_eq!(written["contacts"][0]["title"], "INSTAGRAM");
    assert_eq!(written["gates"], json!({ "status": "resolved", "revealed": 1 }));
}

#[tokio::test]
async fn test_run_without_write_leaves_no_artifact() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        output_dir: dir.path().to_string_lossy().into_owned(),
        ..test_config(&server.uri())
    };
    let links = json!([{ "id": 1, "url": "https://a.example", "type": "CLASSIC" }]);
    mount_profile(&server, "quiet", &page_props("quiet", links, json!([]))).await;

    let target = ProfileTarget::parse("quiet", &config.profile_host).unwrap();
    let options = RunOptions {
        write_artifact: false,
        print_console: false,
    };
    let outcome = runner::run(config, target, options).await.unwrap();

    assert!(outcome.artifact.is_none());
    assert_eq!(outcome.snapshot.username, "quiet");
    assert!(!dir.path().join("linktree_quiet.json").exists());
}

#[tokio::test]
async fn test_run_failure_keeps_typed_error_code() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        output_dir: dir.path().to_string_lossy().into_owned(),
        ..test_config(&server.uri())
    };

    Mock::given(method("GET"))
        .and(path("/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let target = ProfileTarget::parse("ghost", &config.profile_host).unwrap();
    let options = RunOptions {
        write_artifact: true,
        print_console: false,
    };
    let err = runner::run(config, target, options).await.unwrap_err();

    let app_error = err.downcast_ref::<AppError>().unwrap();
    assert_eq!(app_error.code(), "transport_error");
    assert!(!dir.path().join("linktree_ghost.json").exists());
}
