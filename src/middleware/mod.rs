//! Middleware run by the [`Dispatcher`](crate::dispatcher::Dispatcher) around each handler.

mod core;
mod metrics;
mod tracing;

pub use self::core::Middleware;
pub use metrics::MetricsMiddleware;
pub use self::tracing::TracingMiddleware;
