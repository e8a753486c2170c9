//! Session Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::extensions::*;

/// Session Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SessionResponse {
    /// Id of the user the token belongs to
    pub user_id: i64,

    pub message: String,
}

/// Session Handler
///
/// Reports whether the presented bearer token is still valid. Expired or unknown
/// tokens are turned away by the auth middleware before reaching this handler.
#[endpoint(
    tags("users"),
    summary = "Check Session",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Session is active"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<SessionResponse>, StatusError> {
    let user = depot.user_id_or_401()?;

    Ok(Json(SessionResponse {
        user_id: user.get(),
        message: "Session active".to_string(),
    }))
}
