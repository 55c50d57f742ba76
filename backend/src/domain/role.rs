//! Viewer roles and the handler selector.
//!
//! Role claims arrive as free-form strings from the session and user store.
//! [`Role::from_claim`] is the only place that compares strings; everything
//! downstream matches on the closed [`Role`] enum.

use std::fmt;

use super::visitor::RoleVisitor;

/// Closed set of roles the service distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Customer,
    /// Least-privileged role; also the fallback for unknown claims.
    Guest,
}

impl Role {
    /// Interpret a raw role claim.
    ///
    /// Matching is exact. Absent, empty or unrecognised claims map to
    /// [`Role::Guest`]; this function never fails.
    ///
    /// # Examples
    /// ```
    /// use courier::domain::Role;
    ///
    /// assert_eq!(Role::from_claim(Some("admin")), Role::Admin);
    /// assert_eq!(Role::from_claim(Some("Admin")), Role::Guest);
    /// assert_eq!(Role::from_claim(None), Role::Guest);
    /// ```
    pub fn from_claim(claim: Option<&str>) -> Self {
        match claim {
            Some("admin") => Self::Admin,
            Some("customer") => Self::Customer,
            _ => Self::Guest,
        }
    }

    /// Canonical claim string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Customer => "customer",
            Self::Guest => "guest",
        }
    }

    /// Visitor implementing this role's behaviour.
    pub fn visitor(self) -> RoleVisitor {
        match self {
            Self::Admin => RoleVisitor::Admin,
            Self::Customer => RoleVisitor::Customer,
            Self::Guest => RoleVisitor::Guest,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Select the visitor for a raw role claim.
///
/// # Examples
/// ```
/// use courier::domain::{select_visitor, RoleVisitor};
///
/// assert_eq!(select_visitor(Some("customer")), RoleVisitor::Customer);
/// assert_eq!(select_visitor(Some("")), RoleVisitor::Guest);
/// ```
pub fn select_visitor(role: Option<&str>) -> RoleVisitor {
    Role::from_claim(role).visitor()
}
