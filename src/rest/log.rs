//! Logging of failed requests.
//!
//! The client reports every non-200 response through a [`FailureLogger`] it
//! owns. The default implementation emits `tracing` events; tests and
//! applications can install their own.

use reqwest::StatusCode;
use serde_json::Value;

/// Diagnostic detail extracted from a failed response body.
#[derive(Debug, Clone, PartialEq)]
pub enum FailureDetail {
    /// The body parsed as JSON.
    Json(Value),
    /// The body was not JSON; raw text.
    Text(String),
}

impl FailureDetail {
    /// Parse the body as JSON, falling back to the raw text.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str(body) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(body.to_string()),
        }
    }
}

impl std::fmt::Display for FailureDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// A non-200 response, as seen by the logger.
#[derive(Debug, Clone, Copy)]
pub struct RequestFailure<'a> {
    /// Relative path that was requested.
    pub path: &'a str,
    /// Response status.
    pub status: StatusCode,
    /// Parsed or raw body.
    pub detail: &'a FailureDetail,
}

/// Sink for failed-request events.
///
/// Exactly one method is called per failed request.
pub trait FailureLogger: Send + Sync {
    /// The failure is about to be returned to the caller as an error.
    fn error_raised(&self, failure: &RequestFailure<'_>);

    /// The failure was swallowed because the client fails silently.
    fn error_silenced(&self, failure: &RequestFailure<'_>);
}

/// Default logger: `warn` for raised errors, `info` for silenced ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFailureLogger;

impl FailureLogger for TracingFailureLogger {
    fn error_raised(&self, failure: &RequestFailure<'_>) {
        tracing::warn!(
            path = failure.path,
            status = failure.status.as_u16(),
            detail = %failure.detail,
            "CoinCap API error"
        );
    }

    fn error_silenced(&self, failure: &RequestFailure<'_>) {
        tracing::info!(
            path = failure.path,
            status = failure.status.as_u16(),
            detail = %failure.detail,
            "CoinCap API silent error"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Arc, Mutex};

    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    #[derive(Clone, Default)]
    struct EventCapture {
        events: Arc<Mutex<Vec<(Level, Vec<String>)>>>,
    }

    impl<S: Subscriber> Layer<S> for EventCapture {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = FieldNames::default();
            event.record(&mut fields);
            self.events
                .lock()
                .unwrap()
                .push((*event.metadata().level(), fields.0));
        }
    }

    #[derive(Default)]
    struct FieldNames(Vec<String>);

    impl Visit for FieldNames {
        fn record_debug(&mut self, field: &Field, _value: &dyn std::fmt::Debug) {
            self.0.push(field.name().to_string());
        }
    }

    fn capture(log: impl FnOnce(&RequestFailure<'_>)) -> Vec<(Level, Vec<String>)> {
        let capture = EventCapture::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());
        let detail = FailureDetail::from_body("404 Not Found Message");
        let failure = RequestFailure {
            path: "assets/unknown",
            status: StatusCode::NOT_FOUND,
            detail: &detail,
        };

        tracing::subscriber::with_default(subscriber, || log(&failure));

        let events = capture.events.lock().unwrap().clone();
        events
    }

    fn assert_failure_fields(fields: &[String]) {
        for name in ["path", "status", "detail"] {
            assert!(fields.iter().any(|f| f == name), "missing field {name}: {fields:?}");
        }
    }

    #[test]
    fn test_tracing_logger_warns_on_raised_error() {
        let events = capture(|failure| TracingFailureLogger.error_raised(failure));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, Level::WARN);
        assert_failure_fields(&events[0].1);
    }

    #[test]
    fn test_tracing_logger_info_on_silenced_error() {
        let events = capture(|failure| TracingFailureLogger.error_silenced(failure));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, Level::INFO);
        assert_failure_fields(&events[0].1);
    }

    #[test]
    fn test_detail_prefers_json() {
        let detail = FailureDetail::from_body(r#"{"message":"Not Found"}"#);
        assert_eq!(detail, FailureDetail::Json(serde_json::json!({ "message": "Not Found" })));
    }

    #[test]
    fn test_detail_falls_back_to_text() {
        let detail = FailureDetail::from_body("404 Not Found Message");
        assert_eq!(detail, FailureDetail::Text("404 Not Found Message".to_string()));
        assert_eq!(detail.to_string(), "404 Not Found Message");
    }
}
