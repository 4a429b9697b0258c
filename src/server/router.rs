//! Script request routing module
//!
//! Maps `GET|HEAD|POST <prefix><script>?<query>` onto a script invocation,
//! the way a CGI server hands a request to its script process.

use std::sync::Arc;
use std::time::Instant;

use http_body_util::{BodyExt, Full, Limited};
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;

use crate::cgi::InputSource;
use crate::config::Config;
use crate::handler::{self, Script};
use crate::http;
use crate::logger::{self, AccessLogEntry};

/// Parts of an HTTP request a script invocation needs
#[derive(Debug, Clone)]
pub struct ScriptRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub body: String,
}

impl ScriptRequest {
    /// Input source handed to the script
    ///
    /// A GET query is split on `&` into one argument per pair, dropping empty
    /// pieces; a POST query is passed whole as a single argument. Body-driven
    /// scripts get the request body.
    pub fn input_for(&self, script: Script) -> InputSource {
        match script.input_kind() {
            handler::InputKind::Body => InputSource::body(&self.body),
            handler::InputKind::Arguments(_) => {
                let query = self.query.as_deref().unwrap_or_default();
                if self.method == Method::POST {
                    InputSource::arguments([query].into_iter().filter(|q| !q.is_empty()))
                } else {
                    InputSource::arguments(query.split('&').filter(|p| !p.is_empty()))
                }
            }
        }
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    config: Arc<Config>,
    remote_addr: String,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let mut entry = AccessLogEntry::new(
        remote_addr,
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);

    let response = match read_request(req, config.server.max_body_size).await {
        Ok(script_req) => dispatch(&script_req, &config),
        Err(resp) => resp,
    };

    if config.logging.access_log {
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .headers()
            .get("content-length")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &config.logging.access_log_format);
    }

    Ok(response)
}

/// Collect the request, enforcing the body size limit
async fn read_request(
    req: Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Result<ScriptRequest, Response<Full<Bytes>>> {
    if let Some(resp) = check_body_size(&req, max_body_size) {
        return Err(resp);
    }

    let (parts, body) = req.into_parts();
    let limit = usize::try_from(max_body_size).unwrap_or(usize::MAX);
    let bytes = match Limited::new(body, limit).collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            logger::log_warning(&format!("Failed to read request body: {e}"));
            return Err(http::build_413_response());
        }
    };

    Ok(ScriptRequest {
        method: parts.method,
        path: parts.uri.path().to_string(),
        query: parts.uri.query().map(ToString::to_string),
        body: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let size = req
        .headers()
        .get("content-length")?
        .to_str()
        .ok()?
        .parse::<u64>()
        .ok()?;
    if size > max_body_size {
        logger::log_error(&format!(
            "Request body too large: {size} bytes (max: {max_body_size})"
        ));
        return Some(http::build_413_response());
    }
    None
}

/// Route a collected request to its script
pub fn dispatch(req: &ScriptRequest, config: &Config) -> Response<Full<Bytes>> {
    if !matches!(req.method, Method::GET | Method::HEAD | Method::POST) {
        logger::log_warning(&format!("Method not allowed: {}", req.method));
        return http::build_405_response();
    }

    let Some(script) = req
        .path
        .strip_prefix(config.server.script_prefix.as_str())
        .and_then(Script::from_name)
    else {
        logger::log_debug(&format!("No script for path {}", req.path));
        return http::build_404_response();
    };

    let output = handler::handle(script, &req.input_for(script), &config.scripts);
    http::build_text_response(output.body(), req.method == Method::HEAD)
}
