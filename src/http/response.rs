//! HTTP response building module
//!
//! Every response is plain text and closes the connection, matching how a
//! CGI script's output is relayed.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build 200 OK carrying a script's output
pub fn build_text_response(body: String, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = body.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(body)
    };

    Response::builder()
        .status(200)
        .header("Content-Type", "text/plain")
        .header("Content-Length", content_length)
        .header("Connection", "close")
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    build_status_text(404, "404 Not Found", None)
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    build_status_text(405, "405 Method Not Allowed", Some("GET, HEAD, POST"))
}

/// Build 413 Payload Too Large response
pub fn build_413_response() -> Response<Full<Bytes>> {
    build_status_text(413, "413 Payload Too Large", None)
}

fn build_status_text(status: u16, text: &'static str, allow: Option<&str>) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(status)
        .header("Content-Type", "text/plain")
        .header("Connection", "close");
    if let Some(allow) = allow {
        builder = builder.header("Allow", allow);
    }

    builder
        .body(Full::new(Bytes::from(text)))
        .unwrap_or_else(|e| {
            log_build_error(&status.to_string(), &e);
            Response::new(Full::new(Bytes::from(text)))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_response_headers() {
        let resp = build_text_response("Hola Ana!\n".to_string(), false);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/plain");
        assert_eq!(resp.headers()["Content-Length"], "10");
        assert_eq!(resp.headers()["Connection"], "close");
    }

    #[test]
    fn test_head_keeps_length() {
        let resp = build_text_response("Hola Ana!\n".to_string(), true);
        assert_eq!(resp.headers()["Content-Length"], "10");
    }

    #[test]
    fn test_error_statuses() {
        assert_eq!(build_404_response().status(), 404);
        let resp = build_405_response();
        assert_eq!(resp.status(), 405);
        assert_eq!(resp.headers()["Allow"], "GET, HEAD, POST");
        assert_eq!(build_413_response().status(), 413);
    }
}
