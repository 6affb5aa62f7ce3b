use crate::error::ApiError;
use crate::ids::RequestId;
use crate::middleware::Middleware;
use crate::router::{ParamVec, RouteMatch};
use http::Method;
use serde::Serialize;
use serde_json::Value;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Maximum inline headers before heap allocation
pub const MAX_INLINE_HEADERS: usize = 16;

/// Header storage for requests and responses (lowercase names).
pub type HeaderVec = SmallVec<[(Arc<str>, String); MAX_INLINE_HEADERS]>;

/// Request data passed to a handler
#[derive(Debug, Clone)]
pub struct HandlerRequest {
    /// Unique request ID for tracing and correlation
    pub request_id: RequestId,
    pub method: Method,
    /// Path pattern of the matched route (e.g. `/pet/{petId}`)
    pub path: String,
    /// Name of the handler that should process this request
    pub handler_name: String,
    pub path_params: ParamVec,
    pub query_params: ParamVec,
    pub headers: HeaderVec,
    /// Request body parsed as JSON; `None` when absent or not valid JSON
    pub body: Option<Value>,
}

impl HandlerRequest {
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    #[inline]
    #[must_use]
    pub fn get_query_param(&self, name: &str) -> Option<&str> {
        self.query_params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Get a header by name (case-insensitive per RFC 7230)
    #[inline]
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Response data produced by a handler.
///
/// Always sent as `application/json`; the HTTP layer writes no other
/// per-response headers.
#[derive(Debug, Clone, Serialize)]
pub struct HandlerResponse {
    pub status: u16,
    /// JSON body; `Value::Null` with status 204 means no body at all
    pub body: Value,
}

impl HandlerResponse {
    #[must_use]
    pub fn json(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// `200 OK` with `body` serialized as JSON, or 500 if serialization fails.
    #[must_use]
    pub fn ok<T: Serialize>(body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => Self::json(200, value),
            Err(e) => {
                error!(error = %e, "Response serialization failed");
                Self::error(500, "Response serialization failed")
            }
        }
    }

    /// `204 No Content`
    #[must_use]
    pub fn no_content() -> Self {
        Self::json(204, Value::Null)
    }

    /// Create an error response
    #[must_use]
    pub fn error(status: u16, message: &str) -> Self {
        Self::json(status, serde_json::json!({ "error": message }))
    }
}

/// Handler signature: errors are converted to responses by the dispatcher.
pub type HandlerFn = Arc<dyn Fn(&HandlerRequest) -> Result<HandlerResponse, ApiError> + Send + Sync>;

/// Dispatcher that routes matched requests to registered handlers
///
/// Handlers run inline on the calling coroutine: every operation here is a
/// short in-memory step, so there is nothing to gain from a channel hop.
#[derive(Clone, Default)]
pub struct Dispatcher {
    /// Map of handler names to handlers
    pub handlers: HashMap<String, HandlerFn>,
    /// Ordered list of middleware to apply to requests/responses
    pub middlewares: Vec<Arc<dyn Middleware>>,
}

impl Dispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`, replacing any previous registration.
    pub fn register<F>(&mut self, name: &str, handler: F)
    where
        F: Fn(&HandlerRequest) -> Result<HandlerResponse, ApiError> + Send + Sync + 'static,
    {
        if self.handlers.insert(name.to_string(), Arc::new(handler)).is_some() {
            warn!(handler_name = %name, "Replaced existing handler");
        } else {
            info!(
                handler_name = %name,
                total_handlers = self.handlers.len(),
                "Handler registered successfully"
            );
        }
    }

    /// Add middleware to the processing pipeline. Middleware runs in the
    /// order it was added.
    pub fn add_middleware(&mut self, mw: Arc<dyn Middleware>) {
        self.middlewares.push(mw);
    }

    /// Run the handler registered for `route_match`.
    ///
    /// Returns `None` when no handler is registered under the route's name.
    /// Handler errors become their HTTP error responses; panics become 500.
    pub fn dispatch(
        &self,
        route_match: RouteMatch,
        body: Option<Value>,
        headers: HeaderVec,
        request_id: RequestId,
    ) -> Option<HandlerResponse> {
        let Some(handler) = self.handlers.get(&route_match.handler_name) else {
            error!(
                request_id = %request_id,
                handler_name = %route_match.handler_name,
                "No handler registered"
            );
            return None;
        };

        let request = HandlerRequest {
            request_id,
            method: route_match.route.method.clone(),
            path: route_match.route.path_pattern.clone(),
            handler_name: route_match.handler_name,
            path_params: route_match.path_params,
            query_params: route_match.query_params,
            headers,
            body,
        };

        let mut early_resp: Option<HandlerResponse> = None;
        for mw in &self.middlewares {
            let resp = mw.before(&request);
            if early_resp.is_none() {
                early_resp = resp;
            }
        }

        let (mut resp, latency) = match early_resp {
            Some(r) => (r, Duration::from_millis(0)),
            None => {
                let start = Instant::now();
                let r = Self::run(handler, &request);
                (r, start.elapsed())
            }
        };

        for mw in &self.middlewares {
            mw.after(&request, &mut resp, latency);
        }

        Some(resp)
    }

    fn run(handler: &HandlerFn, request: &HandlerRequest) -> HandlerResponse {
        match catch_unwind(AssertUnwindSafe(|| handler(request))) {
            Ok(Ok(resp)) => resp,
            Ok(Err(err)) => {
                info!(
                    request_id = %request.request_id,
                    handler_name = %request.handler_name,
                    status = err.status(),
                    error = %err,
                    "Handler rejected request"
                );
                err.into_response()
            }
            Err(panic) => {
                error!(
                    request_id = %request.request_id,
                    handler_name = %request.handler_name,
                    panic = ?panic,
                    "Handler panicked"
                );
                HandlerResponse::error(500, "Handler panicked")
            }
        }
    }
}
