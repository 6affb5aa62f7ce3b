//! `DELETE /pet/{id}`

use tracing::info;

use super::id_param;
use crate::dispatcher::{HandlerRequest, HandlerResponse};
use crate::error::ApiError;
use crate::store::PetRepository;

/// Remove the pet. Answers 204 whether or not it existed.
pub fn handle(req: &HandlerRequest, store: &dyn PetRepository) -> Result<HandlerResponse, ApiError> {
    let id = id_param(req, "id", "id")?;
    info!(request_id = %req.request_id, pet_id = id, "Deleting pet");
    store.delete(id);
    Ok(HandlerResponse::no_content())
}
