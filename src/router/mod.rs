//! # Router Module
//!
//! Path matching for the pet resource. Route patterns such as `/pet/{petId}`
//! are compiled once into anchored regexes; each request is tested against
//! the compiled table and the first match yields a [`RouteMatch`] carrying
//! the route metadata and the extracted path parameters.
//!
//! ## Example
//!
//! ```
//! use http::Method;
//! use petstore::router::Router;
//! use petstore::spec::routes;
//!
//! let router = Router::new(routes());
//! let m = router.route(Method::GET, "/pet/42").unwrap();
//! assert_eq!(m.handler_name, "find_pet_by_id");
//! assert_eq!(m.get_path_param("petId"), Some("42"));
//!
//! let m = router.route(Method::GET, "/pet/findByTags").unwrap();
//! assert_eq!(m.handler_name, "find_pets_by_tags");
//! ```

mod core;
#[cfg(test)]
mod tests;

pub use self::core::{ParamVec, RouteMatch, Router, MAX_INLINE_PARAMS};
