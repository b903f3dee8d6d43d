use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Covers both an unknown username and a wrong password.
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("User ID {0} does not have the admin role required for this operation")]
    AdminRequired(i32),
}
