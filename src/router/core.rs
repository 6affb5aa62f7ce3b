use crate::spec::RouteMeta;
use http::Method;
use regex::Regex;
use smallvec::SmallVec;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Maximum number of path/query parameters before heap allocation.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Parameter storage for a matched request. Names are shared with the route
/// table, values are per request.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// Result of successfully matching a request path to a route
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// The matched route metadata
    pub route: Arc<RouteMeta>,
    /// Path parameters extracted from the URL (e.g., `{petId}` → `("petId", "123")`)
    pub path_params: ParamVec,
    /// Name of the handler that should process this request
    pub handler_name: String,
    /// Query string parameters (populated by the server)
    pub query_params: ParamVec,
}

impl RouteMatch {
    /// Get a path parameter by name. Last occurrence wins.
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Get a query parameter by name. Last occurrence wins (`?tags=a&tags=b` → `b`).
    #[inline]
    #[must_use]
    pub fn get_query_param(&self, name: &str) -> Option<&str> {
        self.query_params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }
}

struct CompiledRoute {
    method: Method,
    regex: Regex,
    meta: Arc<RouteMeta>,
    param_names: Vec<Arc<str>>,
}

/// Router to match HTTP requests to handlers.
///
/// Routes are tried in order: fewer path parameters first, then longer
/// patterns first, so `/pet/findByStatus` wins over `/pet/{petId}`.
#[derive(Clone)]
pub struct Router {
    routes: Arc<Vec<CompiledRoute>>,
}

impl Router {
    /// Compile the route table. Patterns that fail to compile are logged and skipped.
    #[must_use]
    pub fn new(routes: Vec<RouteMeta>) -> Self {
        let mut routes = routes;
        routes.sort_by(|a, b| {
            let params = |r: &RouteMeta| r.path_pattern.matches('{').count();
            params(a)
                .cmp(&params(b))
                .then_with(|| b.path_pattern.len().cmp(&a.path_pattern.len()))
        });

        let compiled: Vec<CompiledRoute> = routes
            .into_iter()
            .filter_map(|route| match Self::path_to_regex(&route.path_pattern) {
                Ok((regex, param_names)) => Some(CompiledRoute {
                    method: route.method.clone(),
                    regex,
                    param_names: param_names.into_iter().map(Arc::from).collect(),
                    meta: Arc::new(route),
                }),
                Err(e) => {
                    warn!(
                        path = %route.path_pattern,
                        error = %e,
                        "Skipping route with invalid path pattern"
                    );
                    None
                }
            })
            .collect();

        info!(routes_count = compiled.len(), "Routing table loaded");
        for r in &compiled {
            debug!(
                method = %r.method,
                path = %r.meta.path_pattern,
                handler = %r.meta.handler_name,
                "Route registered"
            );
        }

        Self {
            routes: Arc::new(compiled),
        }
    }

    /// Match `method` and `path` (without query string) against the table.
    #[must_use]
    pub fn route(&self, method: Method, path: &str) -> Option<RouteMatch> {
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        for r in self.routes.iter() {
            if r.method != method {
                continue;
            }
            if let Some(captures) = r.regex.captures(path) {
                let mut params = ParamVec::new();
                for (i, name) in r.param_names.iter().enumerate() {
                    if let Some(val) = captures.get(i + 1) {
                        params.push((Arc::clone(name), val.as_str().to_string()));
                    }
                }
                return Some(RouteMatch {
                    route: Arc::clone(&r.meta),
                    path_params: params,
                    handler_name: r.meta.handler_name.clone(),
                    query_params: ParamVec::new(),
                });
            }
        }
        None
    }

    /// All routes in match order.
    pub fn routes(&self) -> impl Iterator<Item = &RouteMeta> {
        self.routes.iter().map(|r| r.meta.as_ref())
    }

    pub(crate) fn path_to_regex(path: &str) -> Result<(Regex, Vec<String>), regex::Error> {
        if path == "/" {
            return Ok((Regex::new(r"^/$")?, Vec::new()));
        }

        let mut pattern = String::with_capacity(path.len() + 5);
        pattern.push('^');
        let mut param_names = Vec::with_capacity(path.matches('{').count());

        for segment in path.split('/') {
            if segment.starts_with('{') && segment.ends_with('}') {
                let param_name = segment
                    .trim_start_matches('{')
                    .trim_end_matches('}')
                    .to_string();
                pattern.push_str("/([^/]+)");
                param_names.push(param_name);
            } else if !segment.is_empty() {
                pattern.push('/');
                pattern.push_str(&regex::escape(segment));
            }
        }

        pattern.push('$');
        Ok((Regex::new(&pattern)?, param_names))
    }
}
