use crate::controller::Intake;
use application::transfer::{CreateUserDto, GetDeleteHistoryDto, GetUserDto};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    login: Option<String>,
    password: Option<String>,
    name: Option<String>,
    email: Option<String>,
}

#[derive(Debug)]
pub struct GetUserRequest {
    id: Uuid,
}

impl GetUserRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct GetDeleteHistoryRequest {
    deleted_by: Uuid,
}

impl GetDeleteHistoryRequest {
    pub fn new(deleted_by: Uuid) -> Self {
        Self { deleted_by }
    }
}

pub struct UserTransformer;

impl Intake<CreateUserRequest> for UserTransformer {
    type To = CreateUserDto;
    fn emit(&self, input: CreateUserRequest) -> Self::To {
        CreateUserDto {
            login: input.login,
            password: input.password,
            name: input.name,
            email: input.email,
        }
    }
}

impl Intake<GetUserRequest> for UserTransformer {
    type To = GetUserDto;
    fn emit(&self, input: GetUserRequest) -> Self::To {
        GetUserDto { id: input.id }
    }
}

impl Intake<GetDeleteHistoryRequest> for UserTransformer {
    type To = GetDeleteHistoryDto;
    fn emit(&self, input: GetDeleteHistoryRequest) -> Self::To {
        GetDeleteHistoryDto {
            deleted_by: input.deleted_by,
        }
    }
}
