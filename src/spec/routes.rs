use http::Method;
use serde_json::json;

use super::types::{
    BodyMeta, ParameterLocation, ParameterMeta, ResponseKind, ResponseMessage, RouteMeta,
};

pub const FIND_PET_BY_ID: &str = "find_pet_by_id";
pub const FIND_PETS_BY_STATUS: &str = "find_pets_by_status";
pub const FIND_PETS_BY_TAGS: &str = "find_pets_by_tags";
pub const ADD_PET: &str = "add_pet";
pub const UPDATE_PET: &str = "update_pet";
pub const DELETE_PET: &str = "delete_pet";

const JSON: &str = "application/json";

fn path_param(name: &str, description: &str) -> ParameterMeta {
    ParameterMeta {
        name: name.to_string(),
        location: ParameterLocation::Path,
        description: description.to_string(),
        required: true,
        schema: json!({"type": "string"}),
    }
}

fn pet_body(description: &str) -> Option<BodyMeta> {
    Some(BodyMeta {
        description: description.to_string(),
        schema_ref: "Pet".to_string(),
    })
}

/// Route table for the pet resource.
#[must_use]
pub fn routes() -> Vec<RouteMeta> {
    let produces = vec![JSON.to_string()];
    vec![
        RouteMeta {
            method: Method::GET,
            path_pattern: "/pet/{petId}".to_string(),
            handler_name: FIND_PET_BY_ID.to_string(),
            operation_id: "getPetById".to_string(),
            summary: "Find pet by ID".to_string(),
            notes: "Returns a pet based on ID".to_string(),
            parameters: vec![path_param("petId", "ID of pet that needs to be fetched")],
            request_body: None,
            success_status: 200,
            response: ResponseKind::Object("Pet".to_string()),
            response_messages: vec![ResponseMessage::invalid("id"), ResponseMessage::not_found("pet")],
            produces: produces.clone(),
        },
        RouteMeta {
            method: Method::GET,
            path_pattern: "/pet/findByStatus".to_string(),
            handler_name: FIND_PETS_BY_STATUS.to_string(),
            operation_id: "findPetsByStatus".to_string(),
            summary: "Find pets by status".to_string(),
            notes: "Multiple status values can be provided with comma-separated strings"
                .to_string(),
            parameters: vec![ParameterMeta {
                name: "status".to_string(),
                location: ParameterLocation::Query,
                description: "Status in the store".to_string(),
                required: true,
                schema: json!({
                    "type": "string",
                    "enum": ["available", "pending", "sold"],
                    "default": "available"
                }),
            }],
            request_body: None,
            success_status: 200,
            response: ResponseKind::ArrayOf("Pet".to_string()),
            response_messages: vec![ResponseMessage::invalid("status")],
            produces: produces.clone(),
        },
        RouteMeta {
            method: Method::GET,
            path_pattern: "/pet/findByTags".to_string(),
            handler_name: FIND_PETS_BY_TAGS.to_string(),
            operation_id: "findPetsByTags".to_string(),
            summary: "Find pets by tags".to_string(),
            notes: "Multiple tags can be provided with comma-separated strings. \
                    Use tag1, tag2, tag3 for testing."
                .to_string(),
            parameters: vec![ParameterMeta {
                name: "tags".to_string(),
                location: ParameterLocation::Query,
                description: "Tags to filter by".to_string(),
                required: true,
                schema: json!({"type": "string"}),
            }],
            request_body: None,
            success_status: 200,
            response: ResponseKind::ArrayOf("Pet".to_string()),
            response_messages: vec![ResponseMessage::invalid("tag")],
            produces: produces.clone(),
        },
        RouteMeta {
            method: Method::POST,
            path_pattern: "/pet".to_string(),
            handler_name: ADD_PET.to_string(),
            operation_id: "addPet".to_string(),
            summary: "Add a new pet to the store".to_string(),
            notes: "adds a pet to the store".to_string(),
            parameters: Vec::new(),
            request_body: pet_body("Pet object that needs to be added to the store"),
            success_status: 200,
            response: ResponseKind::Object("Pet".to_string()),
            response_messages: vec![ResponseMessage::invalid("input")],
            produces: produces.clone(),
        },
        RouteMeta {
            method: Method::PUT,
            path_pattern: "/pet".to_string(),
            handler_name: UPDATE_PET.to_string(),
            operation_id: "updatePet".to_string(),
            summary: "Update an existing pet".to_string(),
            notes: "updates a pet in the store".to_string(),
            parameters: Vec::new(),
            request_body: pet_body("Pet object that needs to be updated in the store"),
            success_status: 200,
            response: ResponseKind::Object("Acknowledgement".to_string()),
            response_messages: vec![ResponseMessage::invalid("input")],
            produces: produces.clone(),
        },
        RouteMeta {
            method: Method::DELETE,
            path_pattern: "/pet/{id}".to_string(),
            handler_name: DELETE_PET.to_string(),
            operation_id: "deletePet".to_string(),
            summary: "Remove an existing pet".to_string(),
            notes: "removes a pet from the store".to_string(),
            parameters: vec![path_param("id", "ID of pet that needs to be removed")],
            request_body: None,
            success_status: 204,
            response: ResponseKind::Empty,
            response_messages: vec![ResponseMessage::invalid("id")],
            produces,
        },
    ]
}
