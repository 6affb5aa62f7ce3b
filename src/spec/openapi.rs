use serde_json::{json, Map, Value};

use super::types::{ResponseKind, RouteMeta};
use crate::validator::pet_schema;

pub const OPENAPI_VERSION: &str = "3.1.0";

fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{}", name) })
}

fn success_response(route: &RouteMeta) -> Value {
    let description = match route.success_status {
        204 => "No Content",
        _ => "successful operation",
    };
    let schema = match &route.response {
        ResponseKind::Object(name) => schema_ref(name),
        ResponseKind::ArrayOf(name) => json!({ "type": "array", "items": schema_ref(name) }),
        ResponseKind::Empty => return json!({ "description": description }),
    };
    let mut content = Map::new();
    for mime in &route.produces {
        content.insert(mime.clone(), json!({ "schema": schema }));
    }
    json!({ "description": description, "content": content })
}

fn operation(route: &RouteMeta) -> Value {
    let parameters: Vec<Value> = route
        .parameters
        .iter()
        .map(|p| {
            json!({
                "name": p.name,
                "in": p.location.as_str(),
                "description": p.description,
                "required": p.required,
                "schema": p.schema,
            })
        })
        .collect();

    let mut responses = Map::new();
    responses.insert(route.success_status.to_string(), success_response(route));
    for msg in &route.response_messages {
        responses.insert(
            msg.code.to_string(),
            json!({
                "description": msg.message,
                "content": { "application/json": { "schema": schema_ref("Error") } }
            }),
        );
    }

    let mut op = json!({
        "operationId": route.operation_id,
        "summary": route.summary,
        "description": route.notes,
        "tags": ["pet"],
        "responses": responses,
    });
    if !parameters.is_empty() {
        op["parameters"] = Value::Array(parameters);
    }
    if let Some(body) = &route.request_body {
        op["requestBody"] = json!({
            "description": body.description,
            "required": true,
            "content": { "application/json": { "schema": schema_ref(&body.schema_ref) } }
        });
    }
    op
}

/// Render an OpenAPI 3.1 document describing `routes`.
///
/// Operations sharing a path are grouped under one path item, keyed by the
/// lowercase method name.
#[must_use]
pub fn openapi_document(routes: &[RouteMeta]) -> Value {
    let mut paths = Map::new();
    for route in routes {
        let item = paths
            .entry(route.path_pattern.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(item) = item {
            item.insert(route.method.as_str().to_ascii_lowercase(), operation(route));
        }
    }

    json!({
        "openapi": OPENAPI_VERSION,
        "info": {
            "title": "Pet Store",
            "description": "Operations about pets",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "tags": [{ "name": "pet", "description": "Operations about pets" }],
        "paths": paths,
        "components": {
            "schemas": {
                "Pet": pet_schema(),
                "Category": {
                    "oneOf": [
                        { "type": "string" },
                        {
                            "type": "object",
                            "properties": {
                                "id": { "type": "integer", "format": "int64" },
                                "name": { "type": "string" }
                            }
                        }
                    ]
                },
                "Error": {
                    "type": "object",
                    "required": ["code", "message"],
                    "properties": {
                        "code": { "type": "integer" },
                        "message": { "type": "string" },
                        "details": { "type": "array", "items": { "type": "string" } }
                    }
                },
                "Acknowledgement": {
                    "type": "object",
                    "required": ["success"],
                    "properties": { "success": { "type": "boolean" } }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::routes;

    #[test]
    fn test_document_groups_operations_by_path() {
        let doc = openapi_document(&routes());
        let paths = doc["paths"].as_object().unwrap();
        assert_eq!(paths.len(), 5);
        assert!(paths["/pet"]["post"].is_object());
        assert!(paths["/pet"]["put"].is_object());
        assert_eq!(paths["/pet/{petId}"]["get"]["operationId"], "getPetById");
        assert_eq!(doc["openapi"], OPENAPI_VERSION);
    }

    #[test]
    fn test_document_responses() {
        let doc = openapi_document(&routes());
        let by_status = &doc["paths"]["/pet/findByStatus"]["get"];
        assert_eq!(by_status["parameters"][0]["in"], "query");
        assert_eq!(
            by_status["parameters"][0]["schema"]["enum"],
            json!(["available", "pending", "sold"])
        );
        assert_eq!(
            by_status["responses"]["200"]["content"]["application/json"]["schema"]["type"],
            "array"
        );
        assert_eq!(
            by_status["responses"]["400"]["description"],
            "Invalid status supplied"
        );

        let delete = &doc["paths"]["/pet/{id}"]["delete"];
        assert_eq!(delete["responses"]["204"]["description"], "No Content");
        assert!(delete["responses"]["204"].get("content").is_none());
    }

    #[test]
    fn test_request_body_refs_pet_schema() {
        let doc = openapi_document(&routes());
        let add = &doc["paths"]["/pet"]["post"];
        assert_eq!(
            add["requestBody"]["content"]["application/json"]["schema"]["$ref"],
            "#/components/schemas/Pet"
        );
        assert_eq!(doc["components"]["schemas"]["Pet"]["required"], json!(["id"]));
    }
}
