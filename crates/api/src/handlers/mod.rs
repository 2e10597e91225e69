//! HTTP handler modules, one per resource.

pub mod articles;
pub mod comments;
pub mod general;
pub mod topics;
pub mod users;

use newswire_core::error::CoreError;
use newswire_core::types::DbId;

/// Parse a path identifier that must be a positive integer.
///
/// Path parameters are taken as raw strings so a malformed id produces this
/// API's own "Bad request" body rather than the framework's rejection.
pub(crate) fn parse_id(raw: &str) -> Result<DbId, CoreError> {
    match raw.parse::<DbId>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(CoreError::BadRequest),
    }
}

/// Deserialize a JSON body into a request DTO.
///
/// Unknown fields are ignored; a missing or wrong-typed field is a
/// "Bad request". Taking `serde_json::Value` in the handler signature keeps
/// the 400 classification here instead of in the extractor.
pub(crate) fn parse_body<T: serde::de::DeserializeOwned>(
    payload: serde_json::Value,
) -> Result<T, CoreError> {
    serde_json::from_value(payload).map_err(|_| CoreError::BadRequest)
}
