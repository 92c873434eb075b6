use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use reqwest::header::ACCEPT;
use serde::Serialize;
use std::{
    cmp::Ordering,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    time::{Duration, Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};
use url::Url;

use crate::contact::ContactMessage;

const DEFAULT_CONTACT_REQUEST_TIMEOUT_MS: u64 = 6_000;
const DEFAULT_CONTACT_CONNECT_TIMEOUT_MS: u64 = 3_000;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const CONTACT_REQUEST_TIMEOUT_MS_BOUNDS: (u64, u64) = (100, 120_000);
const CONTACT_CONNECT_TIMEOUT_MS_BOUNDS: (u64, u64) = (100, 30_000);
const USER_AGENT: &str = "portfolio-contact-relay/1.0";
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, PartialEq, Eq)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

#[derive(Clone)]
struct ContactRuntimeConfig {
    relay_url: Option<Url>,
    request_timeout: Duration,
    connect_timeout: Duration,
    log_level: LogLevel,
}

impl ContactRuntimeConfig {
    fn from_env() -> Self {
        let request_timeout_ms = parse_env_u64_with_bounds(
            "CONTACT_REQUEST_TIMEOUT_MS",
            DEFAULT_CONTACT_REQUEST_TIMEOUT_MS,
            CONTACT_REQUEST_TIMEOUT_MS_BOUNDS,
        );
        let connect_timeout_ms = parse_env_u64_with_bounds(
            "CONTACT_CONNECT_TIMEOUT_MS",
            DEFAULT_CONTACT_CONNECT_TIMEOUT_MS,
            CONTACT_CONNECT_TIMEOUT_MS_BOUNDS,
        );
        let relay_url = parse_env_http_url("CONTACT_RELAY_URL");
        let log_level = parse_log_level("LOG_LEVEL", DEFAULT_LOG_LEVEL);

        Self {
            relay_url,
            request_timeout: Duration::from_millis(request_timeout_ms),
            connect_timeout: Duration::from_millis(connect_timeout_ms),
            log_level,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    client: reqwest::Client,
    config: ContactRuntimeConfig,
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionPayload {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl SubmissionPayload {
    fn accepted() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    fn error(message: &str) -> Self {
        Self {
            ok: false,
            error: Some(message.to_string()),
        }
    }
}

enum RelayOutcome {
    Accepted(StatusCode),
    Refused(StatusCode),
    TransportFailed,
}

impl RelayOutcome {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted(_) => "accepted",
            Self::Refused(_) => "refused",
            Self::TransportFailed => "transport_failed",
        }
    }

    fn status_class(&self) -> &'static str {
        match self {
            Self::Accepted(status) | Self::Refused(status) => http_status_class(*status),
            Self::TransportFailed => "none",
        }
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let bind_address = format!("0.0.0.0:{port}");
    let config = ContactRuntimeConfig::from_env();
    let client = build_relay_client(&config)?;

    let state = AppState { client, config };

    let static_service = ServeDir::new("dist").not_found_service(ServeFile::new("dist/index.html"));

    let app = Router::new()
        .route("/api/contact", post(submit_contact))
        .fallback_service(static_service)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    println!("server listening on http://127.0.0.1:{port}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn submit_contact(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(message): Json<ContactMessage>,
) -> impl IntoResponse {
    let request_started_at = Instant::now();
    let request_id = resolve_request_id(&headers);

    log_event(
        &state.config,
        LogLevel::Info,
        "contact_request_start",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": uri.path(),
        }),
    );

    if !message.has_required_fields() {
        log_event(
            &state.config,
            LogLevel::Info,
            "contact_request_rejected",
            serde_json::json!({
                "request_id": request_id.as_str(),
                "error_class": "missing_fields",
                "duration_ms": request_started_at.elapsed().as_millis(),
            }),
        );
        return json_response(
            StatusCode::BAD_REQUEST,
            SubmissionPayload::error("name, email, and message are required"),
            &request_id,
        );
    }

    let Some(relay_url) = state.config.relay_url.clone() else {
        log_event(
            &state.config,
            LogLevel::Info,
            "contact_request_rejected",
            serde_json::json!({
                "request_id": request_id.as_str(),
                "error_class": "config_missing",
                "message": "contact relay URL is not configured",
                "duration_ms": request_started_at.elapsed().as_millis(),
            }),
        );
        return json_response(
            StatusCode::SERVICE_UNAVAILABLE,
            SubmissionPayload::error("contact relay is not configured"),
            &request_id,
        );
    };

    let relay_host = relay_url.host_str().unwrap_or("unknown").to_string();
    let outcome = relay_submission(&state.client, relay_url, &message).await;

    log_event(
        &state.config,
        LogLevel::Info,
        "contact_relay_result",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "relay_host": relay_host,
            "outcome": outcome.as_str(),
            "status_class": outcome.status_class(),
        }),
    );

    let (status, payload) = submission_response(&outcome);

    log_event(
        &state.config,
        LogLevel::Info,
        "contact_request_complete",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "status": status.as_u16(),
            "duration_ms": request_started_at.elapsed().as_millis(),
        }),
    );

    json_response(status, payload, &request_id)
}

async fn relay_submission(
    client: &reqwest::Client,
    relay_url: Url,
    message: &ContactMessage,
) -> RelayOutcome {
    let sent = client
        .post(relay_url)
        .header(ACCEPT, "application/json")
        .json(message)
        .send()
        .await;

    match sent {
        Ok(response) => {
            let status = response.status();
            if status.is_success() {
                RelayOutcome::Accepted(status)
            } else {
                RelayOutcome::Refused(status)
            }
        }
        Err(_) => RelayOutcome::TransportFailed,
    }
}

// Every failure shape maps to the same generic payload; nothing from the
// relay is surfaced to the visitor.
fn submission_response(outcome: &RelayOutcome) -> (StatusCode, SubmissionPayload) {
    match outcome {
        RelayOutcome::Accepted(_) => (StatusCode::OK, SubmissionPayload::accepted()),
        RelayOutcome::Refused(_) | RelayOutcome::TransportFailed => (
            StatusCode::BAD_GATEWAY,
            SubmissionPayload::error("submission failed"),
        ),
    }
}

fn build_relay_client(config: &ContactRuntimeConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(config.request_timeout)
        .connect_timeout(config.connect_timeout)
        .build()
}

fn json_response(
    status: StatusCode,
    payload: SubmissionPayload,
    request_id: &str,
) -> axum::response::Response {
    let mut headers = HeaderMap::new();
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

    if let Ok(request_id_header) = HeaderValue::from_str(request_id) {
        headers.insert(REQUEST_ID_HEADER, request_id_header);
    }

    (status, headers, Json(payload)).into_response()
}

fn parse_u64_with_bounds(value: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    value
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_u64_with_bounds(name: &str, default: u64, bounds: (u64, u64)) -> u64 {
    parse_u64_with_bounds(std::env::var(name).ok(), default, bounds)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_http_url(value: &str) -> Option<Url> {
    let parsed = Url::parse(value).ok()?;

    if parsed.scheme() == "http" || parsed.scheme() == "https" {
        Some(parsed)
    } else {
        None
    }
}

fn parse_env_http_url(name: &str) -> Option<Url> {
    parse_http_url(&parse_env_non_empty_string(name)?)
}

fn parse_log_level(name: &str, default: LogLevel) -> LogLevel {
    match parse_env_non_empty_string(name)
        .unwrap_or_else(|| default.as_str().to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}

fn http_status_class(status: StatusCode) -> &'static str {
    if status.is_informational() {
        "1xx"
    } else if status.is_success() {
        "2xx"
    } else if status.is_redirection() {
        "3xx"
    } else if status.is_client_error() {
        "4xx"
    } else if status.is_server_error() {
        "5xx"
    } else {
        "unknown"
    }
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

fn log_event(config: &ContactRuntimeConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert(
        "level".to_string(),
        serde_json::Value::String(level.as_str().to_string()),
    );
    payload.insert(
        "event".to_string(),
        serde_json::Value::String(event.to_string()),
    );

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_runtime_config() -> ContactRuntimeConfig {
        ContactRuntimeConfig {
            relay_url: None,
            request_timeout: Duration::from_millis(DEFAULT_CONTACT_REQUEST_TIMEOUT_MS),
            connect_timeout: Duration::from_millis(DEFAULT_CONTACT_CONNECT_TIMEOUT_MS),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }

    fn test_state(relay_url: Option<Url>) -> AppState {
        AppState {
            client: reqwest::Client::new(),
            config: ContactRuntimeConfig {
                relay_url,
                ..test_runtime_config()
            },
        }
    }

    fn filled_message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn bounds_filter_rejects_garbage_and_out_of_range_values() {
        let bounds = (100, 120_000);

        assert_eq!(parse_u64_with_bounds(None, 6_000, bounds), 6_000);
        assert_eq!(
            parse_u64_with_bounds(Some("not a number".to_string()), 6_000, bounds),
            6_000
        );
        assert_eq!(
            parse_u64_with_bounds(Some("5".to_string()), 6_000, bounds),
            6_000
        );
        assert_eq!(
            parse_u64_with_bounds(Some(" 250 ".to_string()), 6_000, bounds),
            250
        );
    }

    #[test]
    fn relay_url_must_be_http_or_https() {
        assert!(parse_http_url("https://formsubmit.co/ajax/someone@example.com").is_some());
        assert!(parse_http_url("http://localhost:9090/relay").is_some());
        assert!(parse_http_url("ftp://example.com/relay").is_none());
        assert!(parse_http_url("not a url").is_none());
    }

    #[test]
    fn every_failure_maps_to_the_same_generic_payload() {
        let refused = submission_response(&RelayOutcome::Refused(StatusCode::NOT_FOUND));
        let broken = submission_response(&RelayOutcome::TransportFailed);

        assert_eq!(refused.0, StatusCode::BAD_GATEWAY);
        assert_eq!(broken.0, StatusCode::BAD_GATEWAY);
        assert_eq!(refused.1.error, broken.1.error);
        assert!(!refused.1.ok);

        let accepted = submission_response(&RelayOutcome::Accepted(StatusCode::OK));
        assert_eq!(accepted.0, StatusCode::OK);
        assert!(accepted.1.ok);
        assert!(accepted.1.error.is_none());
    }

    #[test]
    fn status_classes_cover_the_relay_responses_we_log() {
        assert_eq!(http_status_class(StatusCode::OK), "2xx");
        assert_eq!(http_status_class(StatusCode::TEMPORARY_REDIRECT), "3xx");
        assert_eq!(http_status_class(StatusCode::UNPROCESSABLE_ENTITY), "4xx");
        assert_eq!(http_status_class(StatusCode::BAD_GATEWAY), "5xx");
    }

    #[test]
    fn request_id_prefers_the_inbound_header() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("req-abc"));
        assert_eq!(resolve_request_id(&headers), "req-abc");

        let generated = resolve_request_id(&HeaderMap::new());
        assert!(generated.starts_with("req-"));
    }

    #[tokio::test]
    async fn blank_fields_are_rejected_before_any_relay_call() {
        let state = test_state(None);
        let message = ContactMessage {
            name: "   ".to_string(),
            ..filled_message()
        };

        let response = submit_contact(
            State(state),
            Method::POST,
            Uri::from_static("/api/contact"),
            HeaderMap::new(),
            Json(message),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_relay_configuration_is_service_unavailable() {
        let state = test_state(None);

        let response = submit_contact(
            State(state),
            Method::POST,
            Uri::from_static("/api/contact"),
            HeaderMap::new(),
            Json(filled_message()),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL),
            Some(&HeaderValue::from_static("no-store"))
        );
    }
}
