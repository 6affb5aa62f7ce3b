//! # Resource Handlers
//!
//! One module per pet operation. Each handler is a plain function
//! `fn(&HandlerRequest, &dyn PetRepository) -> Result<HandlerResponse, ApiError>`:
//! it checks its inputs, calls the store and builds the response. Errors are
//! returned, never written; the dispatcher maps them to HTTP statuses.
//!
//! [`register_all`] binds every handler to a shared store and registers it
//! under the handler name used in the route table.

pub mod add_pet;
pub mod delete_pet;
pub mod find_pet_by_id;
pub mod find_pets_by_status;
pub mod find_pets_by_tags;
pub mod update_pet;

use std::sync::Arc;

use crate::dispatcher::{Dispatcher, HandlerRequest, HandlerResponse};
use crate::error::ApiError;
use crate::pet::PetId;
use crate::spec;
use crate::store::PetRepository;

type Handler = fn(&HandlerRequest, &dyn PetRepository) -> Result<HandlerResponse, ApiError>;

const HANDLERS: [(&str, Handler); 6] = [
    (spec::FIND_PET_BY_ID, find_pet_by_id::handle),
    (spec::FIND_PETS_BY_STATUS, find_pets_by_status::handle),
    (spec::FIND_PETS_BY_TAGS, find_pets_by_tags::handle),
    (spec::ADD_PET, add_pet::handle),
    (spec::UPDATE_PET, update_pet::handle),
    (spec::DELETE_PET, delete_pet::handle),
];

/// Register every pet handler with `dispatcher`, all sharing `store`.
pub fn register_all(dispatcher: &mut Dispatcher, store: Arc<dyn PetRepository>) {
    for (name, handler) in HANDLERS {
        let store = Arc::clone(&store);
        dispatcher.register(name, move |req| handler(req, store.as_ref()));
    }
}

/// Integer path parameter `param`; missing or non-numeric values are reported
/// as `InvalidParameter(error_name)`.
pub(crate) fn id_param(
    req: &HandlerRequest,
    param: &str,
    error_name: &str,
) -> Result<PetId, ApiError> {
    req.get_path_param(param)
        .and_then(|raw| raw.trim().parse::<PetId>().ok())
        .ok_or_else(|| ApiError::invalid_parameter(error_name))
}

/// Non-blank query parameter `param`, else `InvalidParameter(error_name)`.
pub(crate) fn required_query<'a>(
    req: &'a HandlerRequest,
    param: &str,
    error_name: &str,
) -> Result<&'a str, ApiError> {
    req.get_query_param(param)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ApiError::invalid_parameter(error_name))
}
