//! Authenticator port
//!
//! The login gate is a placeholder; the store never sees it.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login email
    pub email: String,
    /// Stable user id derived from the email
    pub uid: String,
}

/// Verifies an email/password pair
pub trait Authenticator {
    /// Return the user on success, [`crate::error::ChittyError::Auth`] otherwise
    fn sign_in(&self, email: &str, password: &str) -> Result<User>;
}
