use crate::ReadError;

/// Source of the bearer token of the logged-in viewer.
pub trait SessionRepository {
    fn read_auth_token(&self) -> Result<String, ReadError>;
}
