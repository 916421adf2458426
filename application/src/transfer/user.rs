use uuid::Uuid;

use kernel::prelude::entity::{DestructUser, User};

#[derive(Debug, Clone)]
pub struct UserDto {
    pub id: Uuid,
    pub login: String,
    pub name: String,
    pub email: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let DestructUser {
            id,
            login,
            name,
            email,
            ..
        } = value.into_destruct();
        Self {
            id: id.into(),
            login: login.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

pub struct GetUserDto {
    pub id: Uuid,
}

/// Absent `login` or `password` is rejected; absent `name` and `email` become empty.
pub struct CreateUserDto {
    pub login: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}
