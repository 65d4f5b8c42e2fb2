mod common;

use serde_json::json;

#[tokio::test]
async fn test_metrics_empty() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/metrics").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!([]));
}

#[tokio::test]
async fn test_metrics_counts_new_links_per_domain() {
    let server = common::create_test_server(common::create_test_state());

    common::shorten(&server, "https://example.com/a").await;
    common::shorten(&server, "https://example.com/b").await;

    let response = server.get("/metrics").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!([{ "domain": "example.com", "count": 2 }])
    );
}

#[tokio::test]
async fn test_metrics_ignores_repeated_submissions() {
    let server = common::create_test_server(common::create_test_state());

    for _ in 0..3 {
        common::shorten(&server, "https://example.com/a").await;
    }

    let json = server.get("/metrics").await.json::<serde_json::Value>();
    assert_eq!(json, json!([{ "domain": "example.com", "count": 1 }]));
}

#[tokio::test]
async fn test_metrics_top_three_descending() {
    let server = common::create_test_server(common::create_test_state());

    let per_domain = [
        ("one.example", 1),
        ("four.example", 4),
        ("two.example", 2),
        ("three.example", 3),
    ];

    for (domain, times) in per_domain {
        for i in 0..times {
            common::shorten(&server, &format!("https://{domain}/{i}")).await;
        }
    }

    let json = server.get("/metrics").await.json::<serde_json::Value>();

    assert_eq!(
        json,
        json!([
            { "domain": "four.example", "count": 4 },
            { "domain": "three.example", "count": 3 },
            { "domain": "two.example", "count": 2 },
        ])
    );
}

#[tokio::test]
async fn test_metrics_uses_hostname_only() {
    let server = common::create_test_server(common::create_test_state());

    common::shorten(&server, "https://example.com:8443/a").await;
    common::shorten(&server, "http://example.com/b?x=1").await;

    let json = server.get("/metrics").await.json::<serde_json::Value>();
    assert_eq!(json, json!([{ "domain": "example.com", "count": 2 }]));
}

#[tokio::test]
async fn test_metrics_wrong_method() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.post("/metrics").await;

    assert_eq!(response.status_code(), 405);
}
