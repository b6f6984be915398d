//! Session state persisted across runs
//!
//! A [`Session`] holds the JWT access/refresh pair and the signed-in user.
//! Tokens are issued as a pair, so the only constructor that sets them takes
//! both; a session with an access token but no refresh token is
//! unrepresentable.

use crate::models::UserSummary;

/// Fixed credential store keys
pub mod keys {
    /// Short-lived bearer credential
    pub const ACCESS_TOKEN: &str = "access_token";
    /// Longer-lived credential exchanged for new access tokens
    pub const REFRESH_TOKEN: &str = "refresh_token";
    /// JSON-encoded [`UserSummary`](crate::models::UserSummary)
    pub const USER: &str = "user";
    /// Every key the client persists
    pub const ALL: [&str; 3] = [ACCESS_TOKEN, REFRESH_TOKEN, USER];
}

/// The persisted client session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    access_token: Option<String>,
    refresh_token: Option<String>,
    user: Option<UserSummary>,
}

impl Session {
    /// The logged-out session: no tokens, no user
    #[must_use]
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// An authenticated session holding a full token pair
    #[must_use]
    pub fn authenticated(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        user: Option<UserSummary>,
    ) -> Self {
        Self {
            access_token: Some(access_token.into()),
            refresh_token: Some(refresh_token.into()),
            user,
        }
    }

    /// Reassemble a session from raw store values
    ///
    /// A lone access token without its refresh counterpart violates the
    /// pair invariant and is treated as logged out.
    #[must_use]
    pub(crate) fn from_parts(
        access_token: Option<String>,
        refresh_token: Option<String>,
        user: Option<UserSummary>,
    ) -> Self {
        match (access_token, refresh_token) {
            (Some(access), Some(refresh)) => {
                Self { access_token: Some(access), refresh_token: Some(refresh), user }
            }
            _ => Self { access_token: None, refresh_token: None, user },
        }
    }

    /// Current access token, if authenticated
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Current refresh token, if authenticated
    #[must_use]
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// The signed-in user record, when one was persisted
    #[must_use]
    pub fn user(&self) -> Option<&UserSummary> {
        self.user.as_ref()
    }

    /// Whether a token pair is present
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logged_out_has_nothing() {
        let session = Session::logged_out();
        assert!(!session.is_authenticated());
        assert!(session.access_token().is_none());
        assert!(session.user().is_none());
    }

    #[test]
    fn authenticated_holds_the_pair() {
        let session = Session::authenticated("t1", "r1", None);
        assert!(session.is_authenticated());
        assert_eq!(session.access_token(), Some("t1"));
        assert_eq!(session.refresh_token(), Some("r1"));
    }

    #[test]
    fn lone_access_token_is_treated_as_logged_out() {
        let session = Session::from_parts(Some("t1".into()), None, None);
        assert!(!session.is_authenticated());
        assert!(session.refresh_token().is_none());
    }
}
