//! # Spec Module
//!
//! Route metadata for the pet resource and the OpenAPI 3.1 document rendered
//! from it.
//!
//! Each operation is described once, as a [`RouteMeta`]. The router compiles
//! the `method` and `path_pattern`, the dispatcher keys handlers by
//! `handler_name`, and [`openapi_document`] turns the rest (summary, notes,
//! parameters, response messages) into the document served at
//! `/openapi.json` and `/openapi.yaml`.

mod openapi;
mod routes;
mod types;

pub use openapi::*;
pub use routes::*;
pub use types::*;
