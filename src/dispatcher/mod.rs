//! # Dispatcher Module
//!
//! Connects matched routes to resource handlers.
//!
//! Handlers are registered by name (the `handler_name` of their route) and
//! return `Result<HandlerResponse, ApiError>`. The dispatcher is the error
//! boundary: it runs the middleware chain, calls the handler, and turns an
//! [`ApiError`](crate::error::ApiError) into its status and JSON body.
//!
//! ## Request Flow
//!
//! 1. Router matches incoming request → [`RouteMatch`](crate::router::RouteMatch)
//! 2. Dispatcher looks up the handler by name (`None` if unregistered)
//! 3. Middleware `before` hooks run; any of them may answer early
//! 4. Handler runs; errors are mapped, panics become 500
//! 5. Middleware `after` hooks see the final response and latency
//!
//! ```rust
//! use petstore::dispatcher::{Dispatcher, HandlerResponse};
//! use petstore::error::ApiError;
//!
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.register("find_pet_by_id", |req| {
//!     let id = req.get_path_param("petId").ok_or_else(|| ApiError::invalid_parameter("id"))?;
//!     Ok(HandlerResponse::json(200, serde_json::json!({ "id": id })))
//! });
//! ```

mod core;

pub use self::core::{
    Dispatcher, HandlerFn, HandlerRequest, HandlerResponse, HeaderVec, MAX_INLINE_HEADERS,
};
