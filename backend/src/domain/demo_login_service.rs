//! Demo authenticator backed by the user store.
//!
//! Accounts are looked up by email; every account shares one configured demo
//! password. This keeps the login flow realistic enough to drive role
//! selection without introducing password hashing.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use zeroize::Zeroizing;

use crate::domain::ports::{LoginService, UserRepository};
use crate::domain::visitor::map_user_repository_error;
use crate::domain::{Error, LoginCredentials, UserId};

/// [`LoginService`] accepting any known email with the shared demo password.
#[derive(Clone)]
pub struct DemoLoginService<U> {
    users: Arc<U>,
    demo_password: Arc<Zeroizing<String>>,
}

impl<U> DemoLoginService<U> {
    pub fn new(users: Arc<U>, demo_password: impl Into<String>) -> Self {
        Self {
            users,
            demo_password: Arc::new(Zeroizing::new(demo_password.into())),
        }
    }
}

#[async_trait]
impl<U> LoginService for DemoLoginService<U>
where
    U: UserRepository,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        let user = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(map_user_repository_error)?;

        match user {
            Some(user) if credentials.password() == self.demo_password.as_str() => Ok(user.id()),
            Some(_) => {
                debug!("login rejected: wrong password");
                Err(Error::unauthorized("invalid credentials"))
            }
            None => {
                debug!("login rejected: unknown email");
                Err(Error::unauthorized("invalid credentials"))
            }
        }
    }
}
