//! HTTP surface: request parsing, response writing and the `may_minihttp`
//! service tying router and dispatcher together.
//!
//! Built-in endpoints answered before routing:
//!
//! | Path | Body |
//! |---|---|
//! | `GET /health` | `{"status":"ok"}` |
//! | `GET /metrics` | Prometheus text |
//! | `GET /openapi.json` | OpenAPI 3.1 document |
//! | `GET /openapi.yaml` | same, as YAML |

pub mod http_server;
pub mod request;
pub mod response;
pub mod service;

pub use http_server::{HttpServer, ServerHandle};
pub use request::{parse_request, ParsedRequest};
pub use service::{health_endpoint, metrics_endpoint, AppService};
