//! User identity as written into ledger lines.

use std::fmt;

use crate::error::{GbpError, Result};

/// A contributor: stable numeric ID plus display login.
///
/// The ID is the only key used for matching ledger lines. The login only
/// appears in the trailing comment and must stay on a single line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserIdentity {
    id: u64,
    login: String,
}

impl UserIdentity {
    /// Create an identity, rejecting logins that would break the line format.
    ///
    /// # Errors
    ///
    /// Returns `GbpError::InvalidIdentity` if the login is empty, has leading
    /// or trailing whitespace, or contains a control character other than tab.
    /// TOML comments cannot hold those, and record lines carry no trailing
    /// whitespace.
    pub fn new(id: u64, login: impl Into<String>) -> Result<Self> {
        let login = login.into();
        if login.trim().is_empty() {
            return Err(GbpError::InvalidIdentity(format!(
                "login for user {} is empty",
                id
            )));
        }
        if login.trim() != login {
            return Err(GbpError::InvalidIdentity(format!(
                "login for user {} has leading or trailing whitespace",
                id
            )));
        }
        if let Some(c) = login.chars().find(|c| c.is_control() && *c != '\t') {
            return Err(GbpError::InvalidIdentity(format!(
                "login for user {} contains control character {:?}",
                id, c
            )));
        }
        Ok(Self { id, login })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn login(&self) -> &str {
        &self.login
    }
}

impl fmt::Display for UserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.login, self.id)
    }
}
