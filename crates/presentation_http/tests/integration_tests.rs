//! Integration tests for HTTP handlers
#![allow(clippy::expect_used)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use application::{
    ApplicationError, ForecastNormalizer, ForecastService, NormalizerConfig, ports::ForecastPort,
};
use async_trait::async_trait;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use domain::AreaId;
use infrastructure::ForecastAdapter;
use integration_weather::ForecastConfig;
use presentation_http::{create_app, state::AppState};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// Canned upstream behavior for a single test
enum Upstream {
    Document(Value),
    Fails(fn() -> ApplicationError),
}

/// Mock forecast source for testing
struct MockForecastSource {
    upstream: Upstream,
    calls: AtomicUsize,
}

impl MockForecastSource {
    fn returning(document: Value) -> Self {
        Self {
            upstream: Upstream::Document(document),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing(error: fn() -> ApplicationError) -> Self {
        Self {
            upstream: Upstream::Fails(error),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ForecastPort for MockForecastSource {
    async fn fetch_forecast(&self, _area: &AreaId) -> Result<Value, ApplicationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.upstream {
            Upstream::Document(document) => Ok(document.clone()),
            Upstream::Fails(error) => Err(error()),
        }
    }
}

fn entry(date: &str, telop: &str) -> Value {
    json!({
        "date": date,
        "telop": telop,
        "temperature": {
            "min": { "celsius": "11", "fahrenheit": "51.8" },
            "max": { "celsius": "19", "fahrenheit": "66.2" }
        },
        "chanceOfRain": { "T00_06": "10%", "T06_12": "--", "T12_18": "30%", "T18_24": "" },
        "image": { "title": telop, "url": format!("https://www.jma.go.jp/bosai/forecast/img/{date}.svg") }
    })
}

fn sample_document() -> Value {
    json!({
        "title": "福岡県 福岡 の天気",
        "forecasts": [entry("2024-05-01", "晴れ"), entry("2024-05-02", "曇り")]
    })
}

fn create_test_server(source: Arc<MockForecastSource>) -> TestServer {
    let service = ForecastService::new(source, ForecastNormalizer::new(NormalizerConfig::default()));
    let state = AppState {
        forecast_service: Arc::new(service),
    };
    TestServer::new(create_app(state)).expect("Failed to create test server")
}

// ============ Liveness Tests ============

#[tokio::test]
async fn root_returns_liveness_text() {
    let server = create_test_server(Arc::new(MockForecastSource::returning(sample_document())));

    let response = server.get("/").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "Weather relay API is running!");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let server = create_test_server(Arc::new(MockForecastSource::returning(sample_document())));

    let response = server
        .get("/api/areainfo/400010")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("https://frontend.example.com"),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.header(HeaderName::from_static("access-control-allow-origin")),
        "*"
    );
}

// ============ Forecast Endpoint Tests ============

#[tokio::test]
async fn areainfo_returns_two_day_summary() {
    let source = Arc::new(MockForecastSource::returning(sample_document()));
    let server = create_test_server(Arc::clone(&source));

    let response = server.get("/api/areainfo/400010").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({
            "weatherinfotoday": {
                "date": "2024-05-01",
                "天気": "晴れ",
                "最高気温": "19",
                "最低気温": "11",
                "降水確率": 10.0,
                "image_url": "https://www.jma.go.jp/bosai/forecast/img/2024-05-01.svg"
            },
            "weatherinfotomorrow": {
                "date": "2024-05-02",
                "天気": "曇り",
                "最高気温": "19",
                "最低気温": "11",
                "降水確率": 10.0,
                "image_url": "https://www.jma.go.jp/bosai/forecast/img/2024-05-02.svg"
            }
        })
    );
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn areainfo_reports_sentinels_for_missing_temperatures() {
    let mut document = sample_document();
    document["forecasts"][0]["temperature"]["min"]["celsius"] = Value::Null;
    document["forecasts"][0]["temperature"]["max"] = Value::Null;
    document["forecasts"][1]["temperature"]["max"] = Value::Null;
    document["forecasts"][1]["temperature"]["min"]["celsius"] = Value::Null;

    let server = create_test_server(Arc::new(MockForecastSource::returning(document)));

    let response = server.get("/api/areainfo/400010").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["weatherinfotoday"]["最高気温"], "N/A");
    assert_eq!(body["weatherinfotoday"]["最低気温"], "データなし");
    assert_eq!(body["weatherinfotomorrow"]["最高気温"], "N/A");
    assert!(body["weatherinfotomorrow"]["最低気温"].is_null());
}

#[tokio::test]
async fn areainfo_missing_forecasts_is_server_error() {
    let server = create_test_server(Arc::new(MockForecastSource::returning(
        json!({ "forecasts": [] }),
    )));

    let response = server.get("/api/areainfo/400010").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body, json!({ "error": "forecast data not found" }));
}

#[tokio::test]
async fn areainfo_single_day_is_server_error() {
    let server = create_test_server(Arc::new(MockForecastSource::returning(json!({
        "forecasts": [entry("2024-05-01", "晴れ")]
    }))));

    let response = server.get("/api/areainfo/400010").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "insufficient forecast data");
}

#[tokio::test]
async fn areainfo_missing_telop_is_server_error() {
    let mut document = sample_document();
    document["forecasts"][1]
        .as_object_mut()
        .expect("entry is an object")
        .remove("telop");

    let server = create_test_server(Arc::new(MockForecastSource::returning(document)));

    let response = server.get("/api/areainfo/400010").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"].as_str().is_some_and(|msg| msg.contains("telop")));
}

#[tokio::test]
async fn areainfo_upstream_status_is_server_error() {
    let server = create_test_server(Arc::new(MockForecastSource::failing(|| {
        ApplicationError::UpstreamHttp { status: 503 }
    })));

    let response = server.get("/api/areainfo/400010").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "API request failed with status code 503");
}

#[tokio::test]
async fn areainfo_transport_failure_is_server_error() {
    let server = create_test_server(Arc::new(MockForecastSource::failing(|| {
        ApplicationError::Internal("connection refused".to_string())
    })));

    let response = server.get("/api/areainfo/400010").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "server error: connection refused");
}

#[tokio::test]
async fn areainfo_rejects_non_numeric_id_without_fetching() {
    let source = Arc::new(MockForecastSource::returning(sample_document()));
    let server = create_test_server(Arc::clone(&source));

    let response = server.get("/api/areainfo/tokyo").await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert!(body["error"].is_string());
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let server = create_test_server(Arc::new(MockForecastSource::returning(sample_document())));

    let response = server.get("/api/unknown").await;

    response.assert_status_not_found();
}

// ============ End-to-end through the real adapter ============

#[tokio::test]
async fn upstream_404_becomes_500_with_status_in_message() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast/city/999999"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&upstream)
        .await;

    let adapter = ForecastAdapter::with_config(ForecastConfig {
        base_url: upstream.uri(),
        timeout_secs: Some(5),
    })
    .expect("Failed to create adapter");
    let service = ForecastService::new(Arc::new(adapter), ForecastNormalizer::default());
    let state = AppState {
        forecast_service: Arc::new(service),
    };
    let server = TestServer::new(create_app(state)).expect("Failed to create test server");

    let response = server.get("/api/areainfo/999999").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    let message = body["error"].as_str().expect("error message");
    assert!(message.contains("404"), "unexpected message: {message}");
}

#[tokio::test]
async fn zero_padded_id_reaches_upstream_verbatim() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast/city/016010"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_document()))
        .expect(1)
        .mount(&upstream)
        .await;

    let adapter = ForecastAdapter::with_config(ForecastConfig {
        base_url: upstream.uri(),
        timeout_secs: Some(5),
    })
    .expect("Failed to create adapter");
    let service = ForecastService::new(Arc::new(adapter), ForecastNormalizer::default());
    let state = AppState {
        forecast_service: Arc::new(service),
    };
    let server = TestServer::new(create_app(state)).expect("Failed to create test server");

    let response = server.get("/api/areainfo/016010").await;

    response.assert_status_ok();
}
