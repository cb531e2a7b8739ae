//! Type conversions for GatewayError

use super::types::GatewayError;
use actix_web::error::JsonPayloadError;

// Request body rejections from actix's JSON extractor. The serde message
// names the offending field, e.g. "missing field `city_ids`".
impl From<JsonPayloadError> for GatewayError {
    fn from(err: JsonPayloadError) -> Self {
        match err {
            JsonPayloadError::Deserialize(e) => GatewayError::Validation(e.to_string()),
            JsonPayloadError::ContentType => {
                GatewayError::Validation("Content type must be application/json".to_string())
            }
            other => GatewayError::Validation(other.to_string()),
        }
    }
}
