use crate::domain::shared::value_objects::UserId;

/// A user as published by the user master data. Read only for this service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: UserId,
        first_name: String,
        last_name: String,
        email: String,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
        }
    }
}
