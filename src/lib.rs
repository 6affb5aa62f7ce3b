//! # petstore
//!
//! A small pet-store HTTP service: CRUD and lookup operations on pet records
//! held in an in-memory store, served by a coroutine-powered HTTP server and
//! documented by an [OpenAPI 3.1.0](https://spec.openapis.org/oas/v3.1.0)
//! document generated from the route table.
//!
//! ## Architecture
//!
//! - **[`pet`]** - The `Pet` record, its status and category
//! - **[`store`]** - `PetRepository` trait and the in-memory implementation
//! - **[`validator`]** - JSON Schema validation of request bodies
//! - **[`spec`]** - Route metadata for the six operations and the OpenAPI document
//! - **[`router`]** - Path matching and route resolution using regex-based matchers
//! - **[`dispatcher`]** - Handler registry, middleware chain and error boundary
//! - **[`handlers`]** - One module per pet operation
//! - **[`error`]** - `ApiError` and its HTTP mapping
//! - **[`middleware`]** - Tracing and Prometheus metrics middleware
//! - **[`server`]** - HTTP server built on `may_minihttp`
//! - **[`config`]** / **[`runtime_config`]** / **[`telemetry`]** - YAML config, env tuning, logging
//! - **[`cli`]** - The `petstore` binary's commands
//!
//! ### Request Handling Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Client
//!     participant Server as AppService<br/>(may_minihttp)
//!     participant Router as Router
//!     participant Dispatcher as Dispatcher
//!     participant Middleware as Middleware
//!     participant Handler as Handler
//!     participant Store as PetRepository
//!
//!     Client->>Server: HTTP Request<br/>GET /pet/3
//!     Server->>Server: Parse HTTP<br/>(headers, body, query)
//!     alt Built-in endpoint
//!         Server-->>Client: /health, /metrics, /openapi.*
//!     end
//!     Server->>Router: route(GET, "/pet/3")
//!     alt No match
//!         Router-->>Client: 404 Not Found
//!     end
//!     Router-->>Server: RouteMatch { petId: "3" }
//!     Server->>Dispatcher: dispatch(route_match, body, headers, request_id)
//!     Dispatcher->>Middleware: before()
//!     Dispatcher->>Handler: handle(request)
//!     Handler->>Store: get(3)
//!     Store-->>Handler: Option<Pet>
//!     alt ApiError
//!         Handler-->>Dispatcher: Err(NotFound)
//!         Dispatcher->>Dispatcher: 404 {"code":404,"message":"Pet not found"}
//!     end
//!     Handler-->>Dispatcher: Ok(HandlerResponse)
//!     Dispatcher->>Middleware: after(latency)
//!     Dispatcher-->>Server: HandlerResponse
//!     Server-->>Client: HTTP Response (JSON)
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use petstore::server::{AppService, HttpServer};
//! use petstore::store::InMemoryPetStore;
//! use std::sync::Arc;
//!
//! let service = AppService::for_store(Arc::new(InMemoryPetStore::with_demo_data()));
//! let handle = HttpServer(service).start("127.0.0.1:8080").unwrap();
//! handle.wait_ready().unwrap();
//! ```
//!
//! ## Runtime Considerations
//!
//! The service uses the `may` coroutine runtime, not tokio. Each connection
//! runs in a coroutine whose stack size is set by `PETSTORE_STACK_SIZE`.
//! Handlers run inline on the connection coroutine and never block on I/O.

pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod ids;
pub mod middleware;
pub mod pet;
pub mod router;
pub mod runtime_config;
pub mod server;
pub mod spec;
pub mod store;
pub mod telemetry;
pub mod validator;

pub use error::ApiError;
pub use pet::{Category, Pet, PetId, PetStatus};
pub use spec::{routes, ParameterLocation, ParameterMeta, RouteMeta};
pub use store::{InMemoryPetStore, PetRepository};
