use super::request::{parse_request, ParsedRequest};
use super::response::{write_handler_response, write_json_error, write_text};
use crate::dispatcher::Dispatcher;
use crate::handlers;
use crate::ids::{RequestId, REQUEST_ID_HEADER};
use crate::middleware::{MetricsMiddleware, Middleware, TracingMiddleware};
use crate::router::Router;
use crate::spec::{openapi_document, routes, RouteMeta};
use crate::store::PetRepository;
use http::Method;
use may_minihttp::{HttpService, Request, Response};
use serde_json::json;
use std::io;
use std::sync::Arc;
use tracing::{error, warn};

/// Pre-rendered OpenAPI document in both formats.
struct OpenApiDocs {
    json: Vec<u8>,
    yaml: Option<Vec<u8>>,
}

impl OpenApiDocs {
    fn render<'a>(routes: impl Iterator<Item = &'a RouteMeta>) -> Self {
        let routes: Vec<RouteMeta> = routes.cloned().collect();
        let doc = openapi_document(&routes);
        let yaml = match serde_yaml::to_string(&doc) {
            Ok(s) => Some(s.into_bytes()),
            Err(e) => {
                error!(error = %e, "OpenAPI YAML rendering failed");
                None
            }
        };
        Self {
            json: doc.to_string().into_bytes(),
            yaml,
        }
    }
}

/// The HTTP service: built-in endpoints first, then routed pet operations.
#[derive(Clone)]
pub struct AppService {
    pub router: Router,
    pub dispatcher: Arc<Dispatcher>,
    pub metrics: Option<Arc<MetricsMiddleware>>,
    docs: Arc<OpenApiDocs>,
}

impl AppService {
    /// Wrap an already configured router and dispatcher. The OpenAPI document
    /// is rendered from the router's table.
    pub fn new(router: Router, dispatcher: Dispatcher) -> Self {
        let docs = Arc::new(OpenApiDocs::render(router.routes()));
        Self {
            router,
            dispatcher: Arc::new(dispatcher),
            metrics: None,
            docs,
        }
    }

    /// Full pet-store service over `store`: every handler registered, with
    /// tracing and metrics middleware.
    pub fn for_store(store: Arc<dyn PetRepository>) -> Self {
        let router = Router::new(routes());
        let metrics = Arc::new(MetricsMiddleware::new());
        let mut dispatcher = Dispatcher::new();
        handlers::register_all(&mut dispatcher, store);
        dispatcher.add_middleware(Arc::new(TracingMiddleware));
        dispatcher.add_middleware(Arc::clone(&metrics) as Arc<dyn Middleware>);
        let mut service = Self::new(router, dispatcher);
        service.set_metrics_middleware(metrics);
        service
    }

    pub fn set_metrics_middleware(&mut self, metrics: Arc<MetricsMiddleware>) {
        self.metrics = Some(metrics);
    }

    fn top_level(&self) {
        if let Some(metrics) = &self.metrics {
            metrics.inc_top_level_request();
        }
    }
}

/// Basic health check endpoint returning `{ "status": "ok" }`.
pub fn health_endpoint(res: &mut Response) -> io::Result<()> {
    write_handler_response(res, 200, json!({ "status": "ok" }));
    Ok(())
}

/// Metrics endpoint returning Prometheus text format statistics.
pub fn metrics_endpoint(res: &mut Response, metrics: &MetricsMiddleware) -> io::Result<()> {
    write_text(
        res,
        "Content-Type: text/plain; version=0.0.4",
        metrics.render().into_bytes(),
    );
    Ok(())
}

fn not_found(res: &mut Response, method: &str, path: &str) {
    write_json_error(
        res,
        404,
        json!({ "error": "Not Found", "method": method, "path": path }),
    );
}

impl HttpService for AppService {
    fn call(&mut self, req: Request, res: &mut Response) -> io::Result<()> {
        let ParsedRequest {
            method,
            path,
            headers,
            query_params,
            body,
        } = parse_request(req);

        if method == "GET" {
            match path.as_str() {
                "/health" => {
                    self.top_level();
                    return health_endpoint(res);
                }
                "/metrics" => {
                    if let Some(metrics) = &self.metrics {
                        metrics.inc_top_level_request();
                        return metrics_endpoint(res, metrics);
                    }
                }
                "/openapi.json" => {
                    self.top_level();
                    write_text(res, "Content-Type: application/json", self.docs.json.clone());
                    return Ok(());
                }
                "/openapi.yaml" => {
                    self.top_level();
                    match &self.docs.yaml {
                        Some(yaml) => write_text(res, "Content-Type: text/yaml", yaml.clone()),
                        None => write_json_error(
                            res,
                            500,
                            json!({ "error": "OpenAPI YAML unavailable" }),
                        ),
                    }
                    return Ok(());
                }
                _ => {}
            }
        }

        let Ok(parsed_method) = Method::from_bytes(method.as_bytes()) else {
            warn!(method = %method, "Unparseable HTTP method");
            write_json_error(res, 400, json!({ "error": "Bad Request", "method": method }));
            return Ok(());
        };

        let Some(mut route_match) = self.router.route(parsed_method, &path) else {
            not_found(res, &method, &path);
            return Ok(());
        };
        route_match.query_params = query_params;

        let request_id = RequestId::from_header_or_new(
            headers
                .iter()
                .find(|(k, _)| k.as_ref() == REQUEST_ID_HEADER)
                .map(|(_, v)| v.as_str()),
        );

        match self.dispatcher.dispatch(route_match, body, headers, request_id) {
            Some(hr) => write_handler_response(res, hr.status, hr.body),
            None => write_json_error(
                res,
                500,
                json!({
                    "error": "Handler failed or not registered",
                    "method": method,
                    "path": path
                }),
            ),
        }
        Ok(())
    }
}
