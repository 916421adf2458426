use error_stack::Report;

use kernel::interface::query::UserQuery;
use kernel::interface::update::UserModifier;
use kernel::prelude::entity::{User, UserId};
use kernel::KernelError;

use crate::database::memory::MemoryConnection;

pub struct MemoryUserRepository;

#[async_trait::async_trait]
impl UserQuery for MemoryUserRepository {
    type Transaction = MemoryConnection;
    async fn find_by_id(
        &self,
        con: &mut MemoryConnection,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        let found = con.working.users.iter().find(|user| user.id() == id);
        Ok(found.cloned())
    }
}

#[async_trait::async_trait]
impl UserModifier for MemoryUserRepository {
    type Transaction = MemoryConnection;
    async fn create(
        &self,
        con: &mut MemoryConnection,
        user: &User,
    ) -> error_stack::Result<(), KernelError> {
        let users = &mut con.working.users;
        if users.iter().any(|stored| stored.id() == user.id()) {
            return Err(Report::new(KernelError::Internal)
                .attach_printable(format!("user {} already exists", user.id().as_ref())));
        }
        if users.iter().any(|stored| stored.login() == user.login()) {
            return Err(Report::new(KernelError::Validation).attach_printable(format!(
                "login {} is already taken",
                user.login().as_ref()
            )));
        }
        users.push(user.clone());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::update::UserModifier;
    use kernel::prelude::entity::{User, UserEmail, UserId, UserLogin, UserName, UserPassword};
    use kernel::KernelError;

    use crate::database::memory::{MemoryDatabase, MemoryUserRepository};

    fn user(login: &str) -> User {
        User::new(
            UserId::new(Uuid::new_v4()),
            UserLogin::new(login),
            UserPassword::new("password"),
            UserName::new("name"),
            UserEmail::new(format!("{login}@ggg.net")),
        )
    }

    #[tokio::test]
    async fn taken_login_is_validation_error() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let mut con = db.transact().await?;
        MemoryUserRepository
            .create(&mut con, &user("bestsilver"))
            .await?;

        let report = MemoryUserRepository
            .create(&mut con, &user("bestsilver"))
            .await
            .unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Validation);
        Ok(())
    }
}
