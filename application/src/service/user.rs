use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{DependOnUserQuery, UserQuery};
use kernel::interface::update::{DependOnUserModifier, UserModifier};
use kernel::prelude::entity::{User, UserEmail, UserId, UserLogin, UserName, UserPassword};
use kernel::{KernelError, Required};

use crate::transfer::{CreateUserDto, GetUserDto, UserDto};

#[async_trait::async_trait]
pub trait GetUserService: 'static + Sync + Send + DependOnUserQuery {
    async fn get_user(&self, dto: GetUserDto) -> error_stack::Result<Option<UserDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = UserId::new(dto.id);
        let user = self.user_query().find_by_id(&mut connection, &id).await?;
        connection.commit().await?;

        Ok(user.map(UserDto::from))
    }
}

impl<T> GetUserService for T where T: DependOnUserQuery {}

#[async_trait::async_trait]
pub trait CreateUserService: 'static + Sync + Send + DependOnUserModifier {
    async fn create_user(&self, dto: CreateUserDto) -> error_stack::Result<Uuid, KernelError> {
        let login = dto.login.required("login")?;
        let password = dto.password.required("password")?;

        let uuid = Uuid::new_v4();
        let user = User::new(
            UserId::new(uuid),
            UserLogin::new(login),
            UserPassword::new(password),
            UserName::new(dto.name.unwrap_or_default()),
            UserEmail::new(dto.email.unwrap_or_default()),
        );

        let mut connection = self.database_connection().transact().await?;
        self.user_modifier().create(&mut connection, &user).await?;
        connection.commit().await?;

        tracing::info!(user = %uuid, "user created");
        Ok(uuid)
    }
}

impl<T> CreateUserService for T where T: DependOnUserModifier {}
