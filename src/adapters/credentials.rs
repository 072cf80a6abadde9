//! Placeholder login gate
//!
//! Checks an email/password pair against a plaintext `email:password` line
//! file. Not a security boundary: passwords are stored and compared in the
//! clear.
//!
//! A successful sign-in is remembered in a small JSON session file.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::core::ports::{Authenticator, User};
use crate::error::{ChittyError, Result};

/// Parse `email:password` lines
///
/// Blank lines and lines missing either part are skipped. Both parts are
/// trimmed. Later duplicates win.
#[must_use]
pub fn parse_credentials(text: &str) -> HashMap<String, String> {
    text.lines()
        .filter_map(|line| {
            let (email, password) = line.trim().split_once(':')?;
            let (email, password) = (email.trim(), password.trim());
            (!email.is_empty() && !password.is_empty())
                .then(|| (email.to_string(), password.to_string()))
        })
        .collect()
}

/// Stable user id for an email (base64 of the address)
#[must_use]
pub fn user_id(email: &str) -> String {
    STANDARD.encode(email)
}

/// Authenticator backed by a plaintext credential file
#[derive(Debug, Clone)]
pub struct CredentialFileAuthenticator {
    path: PathBuf,
}

impl CredentialFileAuthenticator {
    /// Use the credential file at `path`
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Authenticator for CredentialFileAuthenticator {
    fn sign_in(&self, email: &str, password: &str) -> Result<User> {
        let text = fs::read_to_string(&self.path).map_err(|e| ChittyError::io(&self.path, e))?;
        let credentials = parse_credentials(&text);

        match credentials.get(email) {
            Some(stored) if stored == password => Ok(User {
                email: email.to_string(),
                uid: user_id(email),
            }),
            _ => Err(ChittyError::Auth),
        }
    }
}

/// Remember the signed-in user
pub fn save_session(path: &Path, user: &User) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ChittyError::io(parent, e))?;
    }
    let content = serde_json::to_string_pretty(user)?;
    fs::write(path, content).map_err(|e| ChittyError::io(path, e))
}

/// The signed-in user, if any
///
/// An unreadable or corrupt session counts as signed out.
#[must_use]
pub fn load_session(path: &Path) -> Option<User> {
    fs::read_to_string(path).ok().and_then(|content| serde_json::from_str(&content).ok())
}

/// Forget the signed-in user
pub fn clear_session(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ChittyError::io(path, e)),
    }
}
