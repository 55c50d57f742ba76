//! User entity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Validation errors returned when constructing user values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The identifier was not a positive integer.
    #[error("user id must be a positive integer")]
    InvalidId,
}

/// Stable numeric user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct UserId(i64);

impl UserId {
    /// Validate and wrap a raw identifier.
    pub fn new(id: i64) -> Result<Self, UserValidationError> {
        if id <= 0 {
            return Err(UserValidationError::InvalidId);
        }
        Ok(Self(id))
    }

    /// Raw integer value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for UserId {
    type Error = UserValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl FromStr for UserId {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.parse::<i64>().map_err(|_| UserValidationError::InvalidId)?;
        Self::new(raw)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Application user.
///
/// `role` is stored verbatim; interpretation happens in
/// [`Role::from_claim`](crate::domain::Role::from_claim), so unknown values
/// survive a load/save round trip untouched.
///
/// # Examples
/// ```
/// use courier::domain::{User, UserId};
///
/// let id = UserId::new(3).expect("valid id");
/// let user = User::builder(id, "Grace", "grace@example.com")
///     .role("customer")
///     .build();
/// assert_eq!(user.role(), "customer");
/// assert!(user.profile_message().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    role: String,
    profile_message: Option<String>,
}

impl User {
    /// Start building a user; the role defaults to `guest`.
    pub fn builder(id: UserId, name: impl Into<String>, email: impl Into<String>) -> UserBuilder {
        UserBuilder {
            id,
            name: name.into(),
            email: email.into(),
            role: "guest".to_owned(),
            profile_message: None,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Raw role claim as stored.
    pub fn role(&self) -> &str {
        self.role.as_str()
    }

    pub fn profile_message(&self) -> Option<&str> {
        self.profile_message.as_deref()
    }

    /// Return a copy carrying `message` as its profile message.
    pub fn with_profile_message(&self, message: impl Into<String>) -> Self {
        Self {
            profile_message: Some(message.into()),
            ..self.clone()
        }
    }
}

/// Builder for [`User`].
#[derive(Debug, Clone)]
pub struct UserBuilder {
    id: UserId,
    name: String,
    email: String,
    role: String,
    profile_message: Option<String>,
}

impl UserBuilder {
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn profile_message(mut self, message: Option<String>) -> Self {
        self.profile_message = message;
        self
    }

    pub fn build(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
            profile_message: self.profile_message,
        }
    }
}
