//! `GET /pet/findByStatus?status=available,sold`

use super::required_query;
use crate::dispatcher::{HandlerRequest, HandlerResponse};
use crate::error::ApiError;
use crate::store::PetRepository;

pub fn handle(req: &HandlerRequest, store: &dyn PetRepository) -> Result<HandlerResponse, ApiError> {
    let status = required_query(req, "status", "status")?;
    Ok(HandlerResponse::ok(&store.find_by_status(status)))
}
