//! Request body validation.
//!
//! Bodies for `POST /pet` and `PUT /pet` are checked against the Pet JSON
//! Schema before being deserialized, so the client sees every violation at
//! once instead of the first serde error. The same schema is published under
//! `components.schemas.Pet` in the OpenAPI document.

use jsonschema::Validator;
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use tracing::error;

use crate::pet::Pet;

/// JSON Schema for a pet record. Only `id` is required.
#[must_use]
pub fn pet_schema() -> Value {
    json!({
        "type": "object",
        "required": ["id"],
        "properties": {
            "id": { "type": "integer", "format": "int64" },
            "name": { "type": "string" },
            "status": {
                "type": "string",
                "description": "pet status in the store",
                "enum": ["available", "pending", "sold"]
            },
            "tags": { "type": "array", "items": { "type": "string" } },
            "category": {
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
            }
        }
    })
}

static PET_VALIDATOR: Lazy<Result<Validator, String>> =
    Lazy::new(|| jsonschema::validator_for(&pet_schema()).map_err(|e| e.to_string()));

/// Validate a request body and convert it into a [`Pet`].
///
/// # Errors
///
/// Returns every violation found. A missing body is reported as a single
/// violation.
pub fn validate_pet(body: Option<&Value>) -> Result<Pet, Vec<String>> {
    let Some(body) = body else {
        return Err(vec!["request body is required".to_string()]);
    };

    match PET_VALIDATOR.as_ref() {
        Ok(validator) => {
            let violations: Vec<String> =
                validator.iter_errors(body).map(|e| e.to_string()).collect();
            if !violations.is_empty() {
                return Err(violations);
            }
        }
        // Fall through to serde, which still rejects malformed bodies.
        Err(e) => error!(error = %e, "Pet schema failed to compile"),
    }

    serde_json::from_value(body.clone()).map_err(|e| vec![e.to_string()])
}
