use crate::dispatcher::HeaderVec;
use crate::router::ParamVec;
use may_minihttp::Request;
use serde_json::Value;
use std::io::Read;
use std::sync::Arc;
use tracing::{debug, info};

/// Parsed HTTP request data used by `AppService`.
#[derive(Debug, PartialEq)]
pub struct ParsedRequest {
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Request path without the query string
    pub path: String,
    /// HTTP headers (lowercase names)
    pub headers: HeaderVec,
    /// Decoded query string parameters, in order of appearance
    pub query_params: ParamVec,
    /// JSON body; `None` when the body is empty or not valid JSON
    pub body: Option<Value>,
}

/// Split `/pet/findByTags?tags=a,b` into path and decoded query parameters.
pub fn split_path_and_query(raw_path: &str) -> (String, ParamVec) {
    match raw_path.split_once('?') {
        Some((path, query)) => {
            let params = url::form_urlencoded::parse(query.as_bytes())
                .map(|(k, v)| (Arc::from(k.as_ref()), v.into_owned()))
                .collect();
            (path.to_string(), params)
        }
        None => (raw_path.to_string(), ParamVec::new()),
    }
}

/// Parse a JSON body. Empty or malformed bodies yield `None`.
pub fn parse_json_body(raw: &str) -> Option<Value> {
    if raw.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(raw) {
        Ok(json) => Some(json),
        Err(e) => {
            debug!(error = %e, body_size_bytes = raw.len(), "JSON body parse failed");
            None
        }
    }
}

/// Extract method, path, headers, query and JSON body from a raw request.
pub fn parse_request(req: Request) -> ParsedRequest {
    let method = req.method().to_string();
    let (path, query_params) = split_path_and_query(req.path());

    let headers: HeaderVec = req
        .headers()
        .iter()
        .map(|h| {
            (
                Arc::from(h.name.to_ascii_lowercase().as_str()),
                String::from_utf8_lossy(h.value).to_string(),
            )
        })
        .collect();

    let body = {
        let mut raw = String::new();
        match req.body().read_to_string(&mut raw) {
            Ok(size) if size > 0 => {
                debug!(body_size_bytes = size, "Request body read");
                parse_json_body(&raw)
            }
            _ => None,
        }
    };

    info!(
        method = %method,
        path = %path,
        headers_count = headers.len(),
        query_count = query_params.len(),
        has_body = body.is_some(),
        "HTTP request parsed"
    );

    ParsedRequest {
        method,
        path,
        headers,
        query_params,
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_path_and_query() {
        let (path, q) = split_path_and_query("/pet/findByStatus?status=available%2Csold&x=1");
        assert_eq!(path, "/pet/findByStatus");
        assert_eq!(q.len(), 2);
        assert_eq!(q[0].0.as_ref(), "status");
        assert_eq!(q[0].1, "available,sold");
    }

    #[test]
    fn test_split_without_query() {
        let (path, q) = split_path_and_query("/pet/1");
        assert_eq!(path, "/pet/1");
        assert!(q.is_empty());
    }

    #[test]
    fn test_parse_json_body() {
        assert_eq!(parse_json_body(r#"{"id": 1}"#), Some(json!({"id": 1})));
        assert_eq!(parse_json_body("  "), None);
        assert_eq!(parse_json_body("{not json"), None);
    }
}
