mod email;
mod id;
mod login;
mod name;
mod password;

pub use self::{email::*, id::*, login::*, name::*, password::*};
use destructure::Destructure;
use std::hash::{Hash, Hasher};
use vodca::References;

/// Registered account. Two users are the same user when their ids match.
#[derive(Debug, Clone, Destructure, References)]
pub struct User {
    id: UserId,
    login: UserLogin,
    password: UserPassword,
    name: UserName,
    email: UserEmail,
}

impl User {
    pub fn new(
        id: UserId,
        login: UserLogin,
        password: UserPassword,
        name: UserName,
        email: UserEmail,
    ) -> Self {
        Self {
            id,
            login,
            password,
            name,
            email,
        }
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
