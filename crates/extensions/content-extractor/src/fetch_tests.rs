use super::*;
use std::io::Write;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_is_remote() {
    assert!(is_remote("https://example.com/a"));
    assert!(is_remote("HTTP://example.com"));
    assert!(!is_remote("./page.html"));
    assert!(!is_remote("/tmp/https.html"));
}

#[tokio::test]
async fn test_fetch_page_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/story"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>hello</p>"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = PageFetcher::new().unwrap();
    let body = fetcher
        .fetch_page(&format!("{}/story", server.uri()))
        .await
        .unwrap();
    assert_eq!(body, "<p>hello</p>");
}

#[tokio::test]
async fn test_fetch_page_follows_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("location", format!("{}/new", server.uri())),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200).set_body_string("moved"))
        .mount(&server)
        .await;

    let fetcher = PageFetcher::new().unwrap();
    let body = fetcher
        .fetch_page(&format!("{}/old", server.uri()))
        .await
        .unwrap();
    assert_eq!(body, "moved");
}

#[tokio::test]
async fn test_fetch_page_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = PageFetcher::new().unwrap();
    let err = fetcher
        .fetch_page(&format!("{}/missing", server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_fetch_page_invalid_url() {
    let fetcher = PageFetcher::new().unwrap();
    let err = fetcher.fetch_page("not a url").await.unwrap_err();
    assert!(matches!(err, FetchError::InvalidUrl(_)));

    let err = fetcher.fetch_page("ftp://example.com/x").await.unwrap_err();
    assert!(matches!(err, FetchError::InvalidUrl(_)));
}

#[tokio::test]
async fn test_load_page_source_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "<html><body>local</body></html>").unwrap();

    let fetcher = PageFetcher::new().unwrap();
    let source = load_page_source(&fetcher, file.path().to_str().unwrap())
        .await
        .unwrap();
    assert!(source.contains("local"));
}

#[tokio::test]
async fn test_load_page_source_missing_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("nope.html");

    let fetcher = PageFetcher::new().unwrap();
    let err = load_page_source(&fetcher, missing.to_str().unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Io { .. }));
}

#[tokio::test]
async fn test_load_page_source_from_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_string("remote"))
        .mount(&server)
        .await;

    let fetcher = PageFetcher::new().unwrap();
    let source = load_page_source(&fetcher, &format!("{}/page", server.uri()))
        .await
        .unwrap();
    assert_eq!(source, "remote");
}
