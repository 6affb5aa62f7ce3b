//! `POST /pet`

use tracing::info;

use crate::dispatcher::{HandlerRequest, HandlerResponse};
use crate::error::ApiError;
use crate::store::PetRepository;
use crate::validator::validate_pet;

/// Store the pet from the body and echo it back.
///
/// An existing record with the same id is replaced.
pub fn handle(req: &HandlerRequest, store: &dyn PetRepository) -> Result<HandlerResponse, ApiError> {
    let pet = validate_pet(req.body.as_ref()).map_err(|v| ApiError::invalid_input("pet", v))?;
    info!(request_id = %req.request_id, pet_id = pet.id, "Adding pet");
    let resp = HandlerResponse::ok(&pet);
    store.upsert(pet);
    Ok(resp)
}
