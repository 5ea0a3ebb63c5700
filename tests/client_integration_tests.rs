use repo_submit::service::{
    GENERIC_SERVICE_ERROR, HttpSubmissionClient, NETWORK_ERROR_MESSAGE, SubmissionClient,
    SubmissionRequest, SubmissionResponse, TransportError,
};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

fn request(name: &str) -> SubmissionRequest {
    SubmissionRequest::new(name)
}

/// An address nothing is listening on.
fn closed_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}

/// Serves one connection: reads the request, then answers with a 500 whose
/// body stops well short of its declared Content-Length.
async fn truncated_error_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        // The JSON payload is the last thing the client writes
        while !request.ends_with(b"}") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        socket
            .write_all(
                b"HTTP/1.1 500 Internal Server Error\r\n\
                  Content-Type: application/json\r\n\
                  Content-Length: 200\r\n\r\n\
                  {\"detail\":",
            )
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });

    format!("http://{addr}/")
}

// ============================================================================
// Success Responses
// ============================================================================

#[tokio::test]
async fn test_posts_json_payload_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"repositoryName": "octocat/Hello-World"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "repositoryName": "octocat/Hello-World",
            "message": "Processing started",
            "status": "Pending"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpSubmissionClient::new(mock_server.uri());
    let result = client.submit(&request("octocat/Hello-World")).await;

    assert_eq!(
        result,
        Ok(SubmissionResponse {
            repository_name: "octocat/Hello-World".to_string(),
            message: "Processing started".to_string(),
            status: "Pending".to_string(),
        })
    );
}

#[tokio::test]
async fn test_failed_job_status_is_still_ok() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "repositoryName": "a/b",
            "message": "Could not generate README",
            "status": "Failed"
        })))
        .mount(&mock_server)
        .await;

    let client = HttpSubmissionClient::new(mock_server.uri());
    let response = client.submit(&request("a/b")).await.unwrap();
    assert_eq!(response.status, "Failed");
}

#[tokio::test]
async fn test_malformed_success_body_is_network_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = HttpSubmissionClient::new(mock_server.uri());
    let err = client.submit(&request("a/b")).await.unwrap_err();
    assert!(matches!(err, TransportError::Network(_)));
    assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
}

// ============================================================================
// Failure Responses
// ============================================================================

#[tokio::test]
async fn test_failure_with_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "Repository not found"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpSubmissionClient::new(mock_server.uri());
    let err = client.submit(&request("nope/nope")).await.unwrap_err();
    assert_eq!(
        err,
        TransportError::Service {
            status: 404,
            detail: "Repository not found".to_string(),
        }
    );
    assert_eq!(err.user_message(), "Repository not found");
}

#[tokio::test]
async fn test_failure_without_detail_uses_generic_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .mount(&mock_server)
        .await;

    let client = HttpSubmissionClient::new(mock_server.uri());
    let err = client.submit(&request("a/b")).await.unwrap_err();
    assert!(matches!(err, TransportError::Service { status: 500, .. }));
    assert_eq!(err.user_message(), GENERIC_SERVICE_ERROR);
}

#[tokio::test]
async fn test_failure_with_unparsable_body_uses_generic_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let client = HttpSubmissionClient::new(mock_server.uri());
    let err = client.submit(&request("a/b")).await.unwrap_err();
    assert_eq!(err.user_message(), "Failed to submit repository");
}

#[tokio::test]
async fn test_failure_with_structured_detail_uses_generic_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [{"loc": ["body", "repositoryName"], "msg": "field required"}]
        })))
        .mount(&mock_server)
        .await;

    let client = HttpSubmissionClient::new(mock_server.uri());
    let err = client.submit(&request("a/b")).await.unwrap_err();
    assert_eq!(err.user_message(), GENERIC_SERVICE_ERROR);
}

#[tokio::test]
async fn test_failure_with_empty_detail_uses_generic_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"detail": ""})))
        .mount(&mock_server)
        .await;

    let client = HttpSubmissionClient::new(mock_server.uri());
    let err = client.submit(&request("a/b")).await.unwrap_err();
    assert_eq!(
        err,
        TransportError::Service {
            status: 400,
            detail: GENERIC_SERVICE_ERROR.to_string(),
        }
    );
}

// ============================================================================
// Transport Failures
// ============================================================================

#[tokio::test]
async fn test_truncated_error_body_is_network_error() {
    let client = HttpSubmissionClient::new(truncated_error_endpoint().await);
    let err = client.submit(&request("a/b")).await.unwrap_err();
    assert!(matches!(err, TransportError::Network(_)), "got {err:?}");
    assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let client = HttpSubmissionClient::new(closed_endpoint());
    let err = client.submit(&request("a/b")).await.unwrap_err();
    assert!(matches!(err, TransportError::Network(_)));
    assert_eq!(
        err.user_message(),
        "An unexpected network error occurred. Please try again."
    );
}

#[tokio::test]
async fn test_endpoint_is_reported() {
    let client = HttpSubmissionClient::new("http://127.0.0.1:8000/");
    assert_eq!(client.endpoint(), "http://127.0.0.1:8000/");
}
