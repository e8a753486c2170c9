//! User Data

use crate::domain::users::errors::UsersServiceError;

/// Registration details.
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    /// # Errors
    ///
    /// Returns [`UsersServiceError::MissingRequiredData`] when any field is blank.
    pub fn validate(&self) -> Result<(), UsersServiceError> {
        if [&self.username, &self.email, &self.password]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(UsersServiceError::MissingRequiredData);
        }

        Ok(())
    }
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"**redacted**")
            .finish()
    }
}
