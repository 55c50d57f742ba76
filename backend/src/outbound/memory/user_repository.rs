use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserId};

/// Mutex-guarded map implementing [`UserRepository`].
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        let users = users.into_iter().map(|user| (user.id(), user)).collect();
        Self {
            users: Mutex::new(users),
        }
    }

    /// Copy of the stored user, bypassing the port.
    pub fn snapshot(&self, id: UserId) -> Option<User> {
        self.lock().ok()?.get(&id).cloned()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<UserId, User>>, UserRepositoryError> {
        self.users
            .lock()
            .map_err(|_| UserRepositoryError::connection("user store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.lock()?.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        Ok(self
            .lock()?
            .values()
            .find(|user| user.email() == email)
            .cloned())
    }

    async fn save(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut users = self.lock()?;
        match users.get_mut(&user.id()) {
            Some(stored) => {
                *stored = user.clone();
                Ok(())
            }
            None => Err(UserRepositoryError::query(format!(
                "user {} does not exist",
                user.id()
            ))),
        }
    }
}
