//! `PUT /pet`

use serde_json::json;
use tracing::info;

use crate::dispatcher::{HandlerRequest, HandlerResponse};
use crate::error::ApiError;
use crate::store::PetRepository;
use crate::validator::validate_pet;

/// Replace the pet with the body's id and acknowledge.
///
/// Same upsert as `add_pet`: an unknown id is inserted rather than rejected.
/// Unlike `add_pet` the response is `{"success": true}`, not the record.
pub fn handle(req: &HandlerRequest, store: &dyn PetRepository) -> Result<HandlerResponse, ApiError> {
    let pet = validate_pet(req.body.as_ref()).map_err(|v| ApiError::invalid_input("pet", v))?;
    info!(request_id = %req.request_id, pet_id = pet.id, "Updating pet");
    store.upsert(pet);
    Ok(HandlerResponse::json(200, json!({ "success": true })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::*;
    use crate::pet::{Pet, PetStatus};
    use crate::store::InMemoryPetStore;
    use http::Method;

    #[test]
    fn test_replaces_and_acknowledges() {
        let store = InMemoryPetStore::with_pets([Pet::new(1, "Rex", PetStatus::Available)]);
        let req = with_body(
            request(Method::PUT, "/pet"),
            json!({"id": 1, "name": "Rex", "status": "sold", "tags": ["old"]}),
        );
        let resp = handle(&req, &store).unwrap();
        assert_eq!(resp.body, json!({"success": true}));
        let stored = store.get(1).unwrap();
        assert_eq!(stored.status, Some(PetStatus::Sold));
        assert_eq!(stored.tags, Some(vec!["old".to_string()]));
    }

    #[test]
    fn test_unknown_id_is_inserted() {
        let store = InMemoryPetStore::new();
        let req = with_body(request(Method::PUT, "/pet"), json!({"id": 5}));
        handle(&req, &store).unwrap();
        assert!(store.get(5).is_some());
    }

    #[test]
    fn test_invalid_body_leaves_store_untouched() {
        let store = InMemoryPetStore::with_pets([Pet::new(1, "Rex", PetStatus::Available)]);
        let req = with_body(request(Method::PUT, "/pet"), json!({"id": "one", "status": "sold"}));
        assert!(handle(&req, &store).is_err());
        assert_eq!(store.get(1).unwrap().status, Some(PetStatus::Available));
    }
}
