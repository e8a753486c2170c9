//! Register User Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use galactic_app::domain::users::{UsersServiceError, data::NewUser};

use crate::{extensions::*, state::State, users::errors::into_status_error};

/// Register User Request
#[derive(Deserialize, ToSchema)]
pub(crate) struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl TryFrom<RegisterRequest> for NewUser {
    type Error = UsersServiceError;

    fn try_from(request: RegisterRequest) -> Result<Self, Self::Error> {
        let user = NewUser {
            username: request.username.trim().to_string(),
            email: request.email.trim().to_string(),
            password: request.password,
        };

        user.validate()?;

        Ok(user)
    }
}

/// User Registered Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserRegisteredResponse {
    /// Id of the new user
    pub user_id: i64,
}

/// Register User Handler
#[endpoint(
    tags("users"),
    summary = "Register User",
    responses(
        (status_code = StatusCode::CREATED, description = "User registered"),
        (status_code = StatusCode::CONFLICT, description = "Username is already taken"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "users.register",
    skip(json, depot, res),
    fields(username = tracing::field::Empty, user_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<RegisterRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<UserRegisteredResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = NewUser::try_from(json.into_inner()).map_err(into_status_error)?;

    let span = tracing::Span::current();

    span.record("username", tracing::field::display(&user.username));

    let user_id = state
        .app
        .users
        .register(user)
        .await
        .map_err(into_status_error)?
        .id;

    span.record("user_id", user_id.get());

    res.status_code(StatusCode::CREATED);

    tracing::info!(user_id = user_id.get(), "registered user");

    Ok(Json(UserRegisteredResponse {
        user_id: user_id.get(),
    }))
}
