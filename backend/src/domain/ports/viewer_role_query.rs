//! Driving port resolving the role claim of the current viewer.

use async_trait::async_trait;

use crate::domain::{Error, UserId};

/// Domain use-case port for role lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ViewerRoleQuery: Send + Sync {
    /// Return the stored role claim for `user_id`.
    ///
    /// An identifier with no backing user yields `Ok(None)`; the claim is
    /// returned verbatim otherwise.
    async fn current_role(&self, user_id: &UserId) -> Result<Option<String>, Error>;
}
