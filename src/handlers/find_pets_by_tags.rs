//! `GET /pet/findByTags?tags=tag1,tag2`

use super::required_query;
use crate::dispatcher::{HandlerRequest, HandlerResponse};
use crate::error::ApiError;
use crate::store::PetRepository;

pub fn handle(req: &HandlerRequest, store: &dyn PetRepository) -> Result<HandlerResponse, ApiError> {
    let tags = required_query(req, "tags", "tag")?;
    Ok(HandlerResponse::ok(&store.find_by_tags(tags)))
}
