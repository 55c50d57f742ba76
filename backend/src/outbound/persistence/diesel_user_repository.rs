//! PostgreSQL-backed `UserRepository` using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserId};

use super::error_mapping::StoreFailure;
use super::models::{UserRow, UserUpdate};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_port_error(failure: impl Into<StoreFailure>) -> UserRepositoryError {
    failure
        .into()
        .into_port_error(UserRepositoryError::connection, UserRepositoryError::query)
}

fn row_to_user(row: UserRow) -> Result<User, UserRepositoryError> {
    let id = UserId::new(row.id)
        .map_err(|err| UserRepositoryError::query(format!("stored user {}: {err}", row.id)))?;
    Ok(User::builder(id, row.name, row.email)
        .role(row.role)
        .profile_message(row.profile_message)
        .build())
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(to_port_error)?;

        let row: Option<UserRow> = users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(to_port_error)?;

        row.map(row_to_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(to_port_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::email.eq(email))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(to_port_error)?;

        row.map(row_to_user).transpose()
    }

    async fn save(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(to_port_error)?;

        let update = UserUpdate {
            name: user.name(),
            email: user.email(),
            role: user.role(),
            profile_message: user.profile_message(),
        };
        let updated = diesel::update(users::table.find(user.id().get()))
            .set(&update)
            .execute(&mut conn)
            .await
            .map_err(to_port_error)?;

        if updated == 0 {
            return Err(UserRepositoryError::query(format!(
                "user {} does not exist",
                user.id()
            )));
        }
        Ok(())
    }
}
