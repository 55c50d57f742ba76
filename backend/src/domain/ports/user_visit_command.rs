//! Driving port for visiting a user record.
//!
//! No route exposes this yet; it completes the visitor capability set so the
//! user half of every role can be exercised through the same service.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId, VisitResult};

/// Request to visit one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitUserRequest {
    pub user_id: UserId,
    /// Raw role claim of the viewer; `None` for anonymous visitors.
    pub role: Option<String>,
}

/// Outcome of a user visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserVisitView {
    pub user: User,
    pub result: VisitResult,
}

/// Domain use-case port for visiting users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserVisitCommand: Send + Sync {
    async fn visit_user(&self, request: &VisitUserRequest) -> Result<UserVisitView, Error>;
}
