use http::Method;
use serde_json::Value;

/// Where a documented parameter is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterLocation {
    Path,
    Query,
}

impl ParameterLocation {
    /// Lowercase name as used in OpenAPI `in` fields.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
        }
    }
}

/// Documentation metadata for one request parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterMeta {
    pub name: String,
    pub location: ParameterLocation,
    pub description: String,
    pub required: bool,
    pub schema: Value,
}

/// Documented request body.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyMeta {
    pub description: String,
    /// Name of a schema under `components.schemas`
    pub schema_ref: String,
}

/// Shape of the success response of an operation.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseKind {
    /// A single component schema, e.g. `Pet`
    Object(String),
    /// An array of a component schema
    ArrayOf(String),
    /// No body, e.g. `204 No Content`
    Empty,
}

/// A documented non-success response, e.g. `400 Invalid ID supplied`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMessage {
    pub code: u16,
    pub message: String,
}

impl ResponseMessage {
    /// `400 Invalid <field> supplied`
    pub fn invalid(field: &str) -> Self {
        Self {
            code: 400,
            message: format!("Invalid {} supplied", field),
        }
    }

    /// `404 <Entity> not found`
    pub fn not_found(entity: &str) -> Self {
        let mut chars = entity.chars();
        let capitalised = match chars.next() {
            Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
            None => String::new(),
        };
        Self {
            code: 404,
            message: format!("{} not found", capitalised),
        }
    }
}

/// Route metadata: everything the router needs to match a request and
/// everything the OpenAPI builder needs to document it.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMeta {
    pub method: Method,
    pub path_pattern: String,
    /// Dispatcher key
    pub handler_name: String,
    pub operation_id: String,
    pub summary: String,
    pub notes: String,
    pub parameters: Vec<ParameterMeta>,
    pub request_body: Option<BodyMeta>,
    pub success_status: u16,
    pub response: ResponseKind,
    pub response_messages: Vec<ResponseMessage>,
    pub produces: Vec<String>,
}

impl RouteMeta {
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&ParameterMeta> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Names of the `{...}` segments of the path pattern, in order.
    #[must_use]
    pub fn path_param_names(&self) -> Vec<&str> {
        self.path_pattern
            .split('/')
            .filter_map(|s| s.strip_prefix('{').and_then(|s| s.strip_suffix('}')))
            .collect()
    }
}
