use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON body for every error response.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Acknowledgement body for delete operations.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SuccessDto {
    pub success: bool,
}
