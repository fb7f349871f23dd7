//! Request/response logging middleware.
//!
//! Logs `Request: METHOD PATH` on entry and `Response: STATUS (N ms)` once the
//! downstream stage has produced a response. Applied router-wide, so it also
//! wraps the fallback for unmatched routes.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

use crate::http::request::request_id_of;
use crate::observability::metrics;

pub async fn log_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let request_id = request_id_of(request.headers()).to_string();

    tracing::info!(
        request_id = %request_id,
        "Request: {} {}",
        method,
        request.uri().path()
    );

    let response = next.run(request).await;

    let status = response.status().as_u16();
    tracing::info!(
        request_id = %request_id,
        "Response: {} ({} ms)",
        status,
        start.elapsed().as_millis()
    );
    metrics::record_request(method.as_str(), status, start);

    response
}

#[cfg(test)]
mod tests {
    use crate::http::test_support::{send, test_app};
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn lines(&self) -> Vec<String> {
            let buf = self.0.lock().unwrap();
            String::from_utf8_lossy(&buf)
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (logs, guard)
    }

    fn request_and_response_lines(logs: &CapturedLogs) -> Vec<String> {
        logs.lines()
            .into_iter()
            .filter(|l| l.contains("Request: ") || l.contains("Response: "))
            .collect()
    }

    #[tokio::test]
    async fn test_logs_request_then_response() {
        let (app, _) = test_app(&[("Alice", "a@x.com")]);
        let (logs, _guard) = capture();

        let res = send(&app, Method::GET, "/contacts/1", None).await;
        assert_eq!(res.status(), StatusCode::OK);

        let lines = request_and_response_lines(&logs);
        assert_eq!(lines.len(), 2, "{:?}", lines);
        assert!(lines[0].contains("Request: GET /contacts/1"));
        assert!(lines[1].contains("Response: 200 ("));
        assert!(lines[1].contains(" ms)"));
        assert!(lines[0].contains("request_id="));
    }

    #[tokio::test]
    async fn test_logs_unmatched_routes() {
        let (app, _) = test_app(&[]);
        let (logs, _guard) = capture();

        let res = send(&app, Method::GET, "/no/such/route", None).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let lines = request_and_response_lines(&logs);
        assert_eq!(lines.len(), 2, "{:?}", lines);
        assert!(lines[0].contains("Request: GET /no/such/route"));
        assert!(lines[1].contains("Response: 404"));
    }

    #[tokio::test]
    async fn test_one_pair_per_request() {
        let (app, _) = test_app(&[]);
        let (logs, _guard) = capture();

        send(&app, Method::GET, "/hello", None).await;
        send(
            &app,
            Method::POST,
            "/contacts",
            Some(json!({"name": "Bob", "email": "b@x.com"})),
        )
        .await;
        send(&app, Method::DELETE, "/contacts/42", None).await;

        let lines = request_and_response_lines(&logs);
        assert_eq!(lines.len(), 6, "{:?}", lines);
        for pair in lines.chunks(2) {
            assert!(pair[0].contains("Request: "));
            assert!(pair[1].contains("Response: "));
        }
        assert!(lines[3].contains("Response: 201"));
        assert!(lines[5].contains("Response: 404"));
    }
}
