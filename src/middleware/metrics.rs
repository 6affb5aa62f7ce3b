use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use super::Middleware;
use crate::dispatcher::{HandlerRequest, HandlerResponse};

/// In-process request counters, rendered as Prometheus text at `/metrics`.
///
/// All counters are relaxed atomics: they are monotonic tallies, never used
/// to order other memory operations.
#[derive(Default)]
pub struct MetricsMiddleware {
    request_count: AtomicUsize,
    client_errors: AtomicUsize,
    server_errors: AtomicUsize,
    total_latency_ns: AtomicU64,
    top_level_requests: AtomicUsize,
}

impl MetricsMiddleware {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of dispatched requests
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Dispatched requests answered with a 4xx status
    pub fn client_errors(&self) -> usize {
        self.client_errors.load(Ordering::Relaxed)
    }

    /// Dispatched requests answered with a 5xx status
    pub fn server_errors(&self) -> usize {
        self.server_errors.load(Ordering::Relaxed)
    }

    /// Mean handler latency; zero before the first request.
    pub fn average_latency(&self) -> Duration {
        let count = self.request_count.load(Ordering::Relaxed) as u64;
        if count == 0 {
            Duration::from_nanos(0)
        } else {
            Duration::from_nanos(self.total_latency_ns.load(Ordering::Relaxed) / count)
        }
    }

    /// Count a request served outside the dispatcher (`/health`, `/metrics`, `/openapi.*`).
    pub fn inc_top_level_request(&self) {
        self.top_level_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn top_level_request_count(&self) -> usize {
        self.top_level_requests.load(Ordering::Relaxed)
    }

    /// Prometheus text exposition of all counters.
    pub fn render(&self) -> String {
        format!(
            "# HELP petstore_requests_total Total number of dispatched requests\n\
             # TYPE petstore_requests_total counter\n\
             petstore_requests_total {}\n\
             # HELP petstore_client_errors_total Dispatched requests answered with 4xx\n\
             # TYPE petstore_client_errors_total counter\n\
             petstore_client_errors_total {}\n\
             # HELP petstore_server_errors_total Dispatched requests answered with 5xx\n\
             # TYPE petstore_server_errors_total counter\n\
             petstore_server_errors_total {}\n\
             # HELP petstore_top_level_requests_total Requests served by built-in endpoints\n\
             # TYPE petstore_top_level_requests_total counter\n\
             petstore_top_level_requests_total {}\n\
             # HELP petstore_request_latency_seconds Average handler latency in seconds\n\
             # TYPE petstore_request_latency_seconds gauge\n\
             petstore_request_latency_seconds {}\n",
            self.request_count(),
            self.client_errors(),
            self.server_errors(),
            self.top_level_request_count(),
            self.average_latency().as_secs_f64(),
        )
    }
}

impl Middleware for MetricsMiddleware {
    fn before(&self, _req: &HandlerRequest) -> Option<HandlerResponse> {
        self.request_count.fetch_add(1, Ordering::Relaxed);
        None
    }

    fn after(&self, _req: &HandlerRequest, res: &mut HandlerResponse, latency: Duration) {
        self.total_latency_ns
            .fetch_add(latency.as_nanos() as u64, Ordering::Relaxed);
        match res.status {
            400..=499 => {
                self.client_errors.fetch_add(1, Ordering::Relaxed);
            }
            500..=599 => {
                self.server_errors.fetch_add(1, Ordering::Relaxed);
            }
            _ => {}
        }
    }
}
