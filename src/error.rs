use std::fmt;

use serde_json::{json, Value};

use crate::dispatcher::HandlerResponse;

/// Error raised by a resource handler.
///
/// Handlers return these instead of writing error responses themselves; the
/// dispatcher converts them with [`ApiError::into_response`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A required path or query parameter is missing or malformed.
    InvalidParameter {
        /// Parameter as named in the error message (e.g. `id`, `status`, `tag`)
        name: String,
    },
    /// The referenced entity does not exist.
    NotFound {
        /// Entity kind (e.g. `pet`)
        entity: String,
    },
    /// The request body did not validate.
    InvalidInput {
        /// What the body was supposed to describe (e.g. `pet`)
        subject: String,
        /// Every violation found, in schema order
        violations: Vec<String>,
    },
}

impl ApiError {
    pub fn invalid_parameter(name: impl Into<String>) -> Self {
        ApiError::InvalidParameter { name: name.into() }
    }

    pub fn not_found(entity: impl Into<String>) -> Self {
        ApiError::NotFound {
            entity: entity.into(),
        }
    }

    pub fn invalid_input(subject: impl Into<String>, violations: Vec<String>) -> Self {
        ApiError::InvalidInput {
            subject: subject.into(),
            violations,
        }
    }

    /// HTTP status for this error kind.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            ApiError::InvalidParameter { .. } | ApiError::InvalidInput { .. } => 400,
            ApiError::NotFound { .. } => 404,
        }
    }

    /// JSON body sent to the client.
    #[must_use]
    pub fn body(&self) -> Value {
        let mut body = json!({
            "code": self.status(),
            "message": self.to_string(),
        });
        if let ApiError::InvalidInput { violations, .. } = self {
            body["details"] = json!(violations);
        }
        body
    }

    #[must_use]
    pub fn into_response(self) -> HandlerResponse {
        HandlerResponse::json(self.status(), self.body())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidParameter { name } => write!(f, "Invalid {} supplied", name),
            ApiError::NotFound { entity } => {
                let mut chars = entity.chars();
                match chars.next() {
                    Some(first) => write!(
                        f,
                        "{}{} not found",
                        first.to_uppercase(),
                        chars.as_str()
                    ),
                    None => write!(f, "Not found"),
                }
            }
            ApiError::InvalidInput { subject, .. } => write!(f, "Invalid input for {}", subject),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::invalid_parameter("id").status(), 400);
        assert_eq!(ApiError::not_found("pet").status(), 404);
        assert_eq!(ApiError::invalid_input("pet", vec![]).status(), 400);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ApiError::invalid_parameter("status").to_string(),
            "Invalid status supplied"
        );
        assert_eq!(ApiError::not_found("pet").to_string(), "Pet not found");
        assert_eq!(ApiError::not_found("").to_string(), "Not found");
    }

    #[test]
    fn test_invalid_input_body_lists_violations() {
        let err = ApiError::invalid_input("pet", vec!["a".into(), "b".into()]);
        let resp = err.into_response();
        assert_eq!(resp.status, 400);
        assert_eq!(resp.body["message"], "Invalid input for pet");
        assert_eq!(resp.body["details"], json!(["a", "b"]));
    }

    #[test]
    fn test_not_found_body_has_no_details() {
        let body = ApiError::not_found("pet").body();
        assert_eq!(body, json!({"code": 404, "message": "Pet not found"}));
    }
}
