//! HttpSubmitter against a mock backend.

use std::time::Duration;

use carlot_client::{ClientConfig, HttpSubmitter};
use carlot_forms::submit::{Part, GENERIC_SUBMIT_ERROR};
use carlot_forms::{Attachment, Payload, SubmitError, SubmitRequest, Submitter};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn submitter(server: &MockServer) -> HttpSubmitter {
    HttpSubmitter::new(ClientConfig::new(server.uri())).unwrap()
}

fn json_request(bearer: Option<&str>) -> SubmitRequest {
    SubmitRequest {
        form: "trade_in",
        endpoint: "/api/trade-ins",
        payload: Payload::Json(json!({"make": "Toyota", "model": "Corolla"})),
        bearer: bearer.map(str::to_string),
    }
}

#[tokio::test]
async fn test_posts_json_with_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/trade-ins"))
        .and(header("authorization", "Bearer tok-123"))
        .and(body_json(json!({"make": "Toyota", "model": "Corolla"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 7})))
        .expect(1)
        .mount(&server)
        .await;

    let response = submitter(&server)
        .submit(json_request(Some("tok-123")))
        .await
        .unwrap();

    assert_eq!(response.status, 201);
    assert_eq!(response.body, Some(json!({"id": 7})));
}

#[tokio::test]
async fn test_no_bearer_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/trade-ins"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let response = submitter(&server).submit(json_request(None)).await.unwrap();
    assert_eq!(response.status, 204);
    assert!(response.body.is_none());

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_posts_multipart_with_files() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/consignments"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let request = SubmitRequest {
        form: "consignment",
        endpoint: "/api/consignments",
        payload: Payload::Multipart(vec![
            Part::Text {
                name: "vehicle[make]".into(),
                value: "Honda".into(),
            },
            Part::File {
                name: "vehicle[photos][0]".into(),
                attachment: Attachment::new("front.jpg", "image/jpeg", b"jpegdata".to_vec()),
            },
        ]),
        bearer: None,
    };
    submitter(&server).submit(request).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains(r#"name="vehicle[make]""#));
    assert!(body.contains("Honda"));
    assert!(body.contains(r#"name="vehicle[photos][0]"; filename="front.jpg""#));
    assert!(body.contains("jpegdata"));
}

#[tokio::test]
async fn test_client_error_carries_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"message": "VIN already registered"})),
        )
        .mount(&server)
        .await;

    let err = submitter(&server)
        .submit(json_request(None))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        SubmitError::Status {
            status: 422,
            message: Some("VIN already registered".to_string()),
        }
    );
    assert_eq!(err.user_message(), "VIN already registered");
}

#[tokio::test]
async fn test_server_error_uses_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = submitter(&server)
        .submit(json_request(None))
        .await
        .unwrap_err();

    assert!(matches!(err, SubmitError::Status { status: 500, message: None }));
    assert_eq!(err.user_message(), GENERIC_SUBMIT_ERROR);
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let config = ClientConfig::new(server.uri()).timeout(Duration::from_millis(100));
    let err = HttpSubmitter::new(config)
        .unwrap()
        .submit(json_request(None))
        .await
        .unwrap_err();

    assert!(matches!(err, SubmitError::Transport(_)));
    assert_eq!(err.user_message(), GENERIC_SUBMIT_ERROR);
}

#[test]
fn test_rejects_invalid_base_url() {
    assert!(HttpSubmitter::new(ClientConfig::new("not a url")).is_err());
}
