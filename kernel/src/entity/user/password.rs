use vodca::{AsRefln, Fromln};

/// Stored as given; hashing happens outside this crate.
#[derive(Clone, PartialEq, Eq, Fromln, AsRefln)]
pub struct UserPassword(String);

impl UserPassword {
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }
}

impl std::fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("UserPassword(***)")
    }
}
