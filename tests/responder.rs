//! End-to-end behavior of the responder over real TCP.

use std::time::{Duration, Instant};

use reqwest::{header, Method, StatusCode};

mod common;

const BODY: &str = r#"{"id":"123"}"#;
const DELAY: Duration = Duration::from_millis(50);

#[tokio::test]
async fn test_fixed_status_and_body() {
    let addr = common::start_default_responder().await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    assert!(res.headers().get(header::CONTENT_TYPE).is_none());
    assert_eq!(res.text().await.unwrap(), BODY);
}

#[tokio::test]
async fn test_any_method_any_path() {
    let addr = common::start_responder(Duration::ZERO).await;
    let client = common::client();

    let cases = [
        (Method::PATCH, "/nonexistent/deep/path"),
        (Method::POST, "/api/v3/projects/112261/notices?key=abc"),
        (Method::DELETE, "/"),
        (Method::PUT, "/a/b/c/d/e/f"),
        (Method::from_bytes(b"PURGE").unwrap(), "/cache"),
    ];

    for (method, path) in cases {
        let res = client
            .request(method.clone(), format!("http://{}{}", addr, path))
            .header("x-custom", "ignored")
            .body(r#"{"errors":[{"type":"RuntimeError"}]}"#)
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::CREATED, "{} {}", method, path);
        assert_eq!(res.text().await.unwrap(), BODY, "{} {}", method, path);
    }
}

#[tokio::test]
async fn test_response_waits_for_delay() {
    let addr = common::start_default_responder().await;
    let client = common::client();

    let start = Instant::now();
    let res = client
        .post(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();
    let elapsed = start.elapsed();

    assert_eq!(res.status(), StatusCode::CREATED);
    assert!(elapsed >= DELAY, "responded after {:?}", elapsed);
}

#[tokio::test]
async fn test_concurrent_requests_are_not_serialized() {
    let addr = common::start_default_responder().await;
    let client = common::client();
    let concurrency = 100;

    let start = Instant::now();
    let mut tasks = Vec::new();
    for i in 0..concurrency {
        let client = client.clone();
        let url = format!("http://{}/req/{}", addr, i);
        tasks.push(tokio::spawn(async move {
            let res = client.get(&url).send().await.unwrap();
            let status = res.status();
            let body = res.text().await.unwrap();
            (status, body)
        }));
    }

    for task in tasks {
        let (status, body) = task.await.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, BODY);
    }
    let elapsed = start.elapsed();

    // Serialized handling would take 100 * 50ms = 5s.
    assert!(elapsed >= DELAY);
    assert!(
        elapsed < DELAY * concurrency / 4,
        "100 concurrent requests took {:?}",
        elapsed
    );
}
