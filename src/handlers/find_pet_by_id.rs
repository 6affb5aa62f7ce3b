//! `GET /pet/{petId}`

use tracing::debug;

use super::id_param;
use crate::dispatcher::{HandlerRequest, HandlerResponse};
use crate::error::ApiError;
use crate::store::PetRepository;

/// Return the pet with the given id, or `NotFound`.
pub fn handle(req: &HandlerRequest, store: &dyn PetRepository) -> Result<HandlerResponse, ApiError> {
    let id = id_param(req, "petId", "id")?;
    let pet = store.get(id).ok_or_else(|| ApiError::not_found("pet"))?;
    debug!(pet_id = id, "Pet found");
    Ok(HandlerResponse::ok(&pet))
}
