//! Session handed to a form when it is opened.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An opaque session token issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    /// Token forwarded as a bearer credential.
    pub token: String,
    /// Authenticated user ID, if the backend disclosed it.
    pub user_id: Option<i64>,
    /// Expiration timestamp, if known.
    pub expire_date: Option<DateTime<Utc>>,
}

impl SessionToken {
    /// Creates a token without user or expiry information.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_id: None,
            expire_date: None,
        }
    }

    /// Returns whether this token has expired.
    pub fn is_expired(&self) -> bool {
        self.expire_date.is_some_and(|at| Utc::now() > at)
    }
}

/// Authentication state injected into a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthSession {
    /// No user is signed in.
    #[default]
    Unauthenticated,
    /// A user is signed in with this token.
    Authenticated(SessionToken),
}

impl AuthSession {
    /// Creates an authenticated session from a raw token.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Authenticated(SessionToken::new(token))
    }

    /// Returns whether the session holds a token that has not expired.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(token) if !token.is_expired())
    }

    /// Returns the token to forward, or `None` when unauthenticated or expired.
    pub fn bearer_token(&self) -> Option<&str> {
        match self {
            Self::Authenticated(token) if !token.is_expired() => Some(&token.token),
            _ => None,
        }
    }
}
