//! HTTP client tests against a mock ORCID API.

mod common;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use orcid_readme::ClientError;
use orcid_readme::models::PutCode;

use common::{ORCID, orcid, test_client};

// =============================================================================
// Record Fetcher
// =============================================================================

#[tokio::test]
async fn test_fetch_record_requests_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/{ORCID}/record")))
        .and(header("Accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"orcid-identifier": {"path": ORCID}})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let record = test_client(&mock_server).fetch_record(&orcid()).await.unwrap();
    assert_eq!(record["orcid-identifier"]["path"], ORCID);
}

#[tokio::test]
async fn test_fetch_record_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/{ORCID}/record")))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server).fetch_record(&orcid()).await.unwrap_err();
    assert!(err.is_not_found(), "expected NotFound, got {err:?}");
    assert!(err.to_string().contains(ORCID));
}

#[tokio::test]
async fn test_fetch_record_server_error_carries_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/{ORCID}/record")))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server).fetch_record(&orcid()).await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 503, .. }), "got {err:?}");
    assert_eq!(err.status_code(), Some(503));
}

#[tokio::test]
async fn test_fetch_record_malformed_body() {
    let mock_server = MockServer::start().await;

    // Gateways sometimes answer 200 with an HTML error page
    Mock::given(method("GET"))
        .and(path(format!("/{ORCID}/record")))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body>Maintenance</body></html>"),
        )
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server).fetch_record(&orcid()).await.unwrap_err();
    assert!(matches!(err, ClientError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn test_fetch_record_unreachable_is_network_error() {
    // Bind and release a port so nothing is listening on it.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let config = orcid_readme::Config::for_testing(&format!("http://127.0.0.1:{port}"));
    let client = orcid_readme::OrcidClient::new(&config).unwrap();

    let err = client.fetch_record(&orcid()).await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)), "got {err:?}");
}

// =============================================================================
// Work Detail Fetcher
// =============================================================================

#[tokio::test]
async fn test_fetch_work_uses_put_code_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/{ORCID}/work/12345")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"put-code": 12345, "title": null})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let detail =
        test_client(&mock_server).fetch_work(&orcid(), &PutCode::from(12345)).await.unwrap();
    assert_eq!(detail["put-code"], 12345);
}

#[tokio::test]
async fn test_fetch_work_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/{ORCID}/work/1")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server).fetch_work(&orcid(), &PutCode::from(1)).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("/work/1"));
}
