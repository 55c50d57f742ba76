//! Driving port for logging visitors in.
//!
//! Inbound adapters authenticate credentials through this port and store the
//! returned identifier in the session; they never see the user store.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, UserId};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user id.
    ///
    /// Unknown emails and wrong passwords both fail with
    /// [`ErrorCode::Unauthorized`](crate::domain::ErrorCode::Unauthorized).
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error>;
}
