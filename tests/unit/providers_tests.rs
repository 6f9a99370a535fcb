/*!
 * Tests for remote dictionary clients
 */

use slovnik::app_config::RemoteConfig;
use slovnik::errors::FetchError;
use slovnik::providers::mock::{MockFetcher, MockReply, MockRequest};
use slovnik::providers::seznam::SeznamClient;
use slovnik::providers::{Fetcher, RemoteResponse};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio_test::{assert_err, assert_ok};

/// Serve one canned HTTP response on a local port and return the endpoint
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buffer = [0u8; 4096];
        let _ = socket.read(&mut buffer).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{}", address)
}

fn client_for(endpoint: String) -> SeznamClient {
    let config = RemoteConfig {
        endpoint,
        timeout_secs: 5,
        ..RemoteConfig::default()
    };
    SeznamClient::new(&config).unwrap()
}

#[test]
fn test_remoteResponse_isSuccess_shouldCover2xxOnly() {
    assert!(RemoteResponse::ok("").is_success());
    assert!(RemoteResponse::new(204, "").is_success());
    assert!(!RemoteResponse::new(301, "").is_success());
    assert!(!RemoteResponse::new(404, "").is_success());
}

#[tokio::test]
async fn test_seznamClient_withOkResponse_shouldReturnBody() {
    let endpoint = serve_once("200 OK", "<html><body>pes</body></html>").await;
    let client = client_for(endpoint);

    let response = assert_ok!(client.fetch("cz", "en", "pes").await);

    assert_eq!(response.status, 200);
    assert_eq!(response.body, "<html><body>pes</body></html>");
}

#[tokio::test]
async fn test_seznamClient_withServerError_shouldReturnStatusNotError() {
    let endpoint = serve_once("503 Service Unavailable", "busy").await;
    let client = client_for(endpoint);

    let response = assert_ok!(client.fetch("cz", "en", "pes").await);

    assert_eq!(response.status, 503);
    assert!(!response.is_success());
}

#[tokio::test]
async fn test_seznamClient_withClosedPort_shouldFailWithNetworkError() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let error = assert_err!(client_for(endpoint).fetch("cz", "en", "pes").await);

    assert!(matches!(error, FetchError::Network(_)));
}

#[tokio::test]
async fn test_mockFetcher_withScriptedQuery_shouldPreferScript() {
    let fetcher = MockFetcher::page("fallback").on_query("kočka", MockReply::Page(RemoteResponse::new(404, "")));

    let scripted = fetcher.fetch("cz", "en", "kočka").await.unwrap();
    let fallback = fetcher.fetch("cz", "de", "pes").await.unwrap();

    assert_eq!(scripted.status, 404);
    assert_eq!(fallback.body, "fallback");
    assert_eq!(fetcher.call_count(), 2);
    assert_eq!(
        fetcher.requests()[1],
        MockRequest {
            lang_from: "cz".to_string(),
            lang_to: "de".to_string(),
            query: "pes".to_string(),
        }
    );
}

#[tokio::test]
async fn test_mockFetcher_failing_shouldReturnError() {
    let fetcher = MockFetcher::failing(FetchError::Network("offline".to_string()));

    let result = fetcher.fetch("cz", "en", "pes").await;

    assert_eq!(result, Err(FetchError::Network("offline".to_string())));
}
