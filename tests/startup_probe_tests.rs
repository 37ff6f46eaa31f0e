use axum::{Json, Router, http::StatusCode, routing::get};
use lipika::GeminiClient;
use lipika::config::GeminiConfig;
use lipika::service::startup_probe::run_startup_probe;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use url::Url;

async fn spawn_test_server(app: Router) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    let base = Url::parse(&format!("http://{}", addr)).expect("valid base url");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server run");
    });

    base
}

async fn catalog_client(status: StatusCode, body: Value, api_key: Option<&str>) -> GeminiClient {
    let app = Router::new().route(
        "/v1/models",
        get(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    );
    let base = spawn_test_server(app).await;

    let cfg = GeminiConfig {
        catalog_base: base.join("/v1").unwrap(),
        endpoints: vec![],
        temperature: 0.7,
        max_output_tokens: 2048,
    };
    GeminiClient::new(reqwest::Client::new(), &cfg, api_key.map(str::to_string))
}

#[tokio::test]
async fn probe_reports_available_when_a_gemini_model_is_listed() {
    let client = catalog_client(
        StatusCode::OK,
        json!({
            "models": [
                {"name": "models/embedding-001"},
                {"name": "models/gemini-pro"}
            ]
        }),
        Some("k"),
    )
    .await;

    let report = run_startup_probe(&client).await;
    assert!(report.generative_available);
    assert!(report.diagnostic.is_none());
}

#[tokio::test]
async fn probe_reports_unavailable_when_no_name_matches_marker() {
    let client = catalog_client(
        StatusCode::OK,
        json!({"models": [{"name": "models/chat-bison"}, {"name": "models/embedding-001"}]}),
        Some("k"),
    )
    .await;

    let report = run_startup_probe(&client).await;
    assert!(!report.generative_available);
    let diagnostic = report.diagnostic.expect("diagnostic present");
    assert!(diagnostic.contains("2 models"));
}

#[tokio::test]
async fn probe_swallows_listing_failure_into_diagnostic() {
    let client = catalog_client(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"error": {"code": 500, "status": "INTERNAL"}}),
        Some("k"),
    )
    .await;

    let report = run_startup_probe(&client).await;
    assert!(!report.generative_available);
    let diagnostic = report.diagnostic.expect("diagnostic present");
    assert!(diagnostic.contains("500"));
}

#[tokio::test]
async fn probe_without_credential_reports_unavailable_without_panicking() {
    let client = catalog_client(StatusCode::OK, json!({"models": []}), None).await;

    let report = run_startup_probe(&client).await;
    assert!(!report.generative_available);
    assert!(
        report
            .diagnostic
            .expect("diagnostic present")
            .contains("not configured")
    );
}
