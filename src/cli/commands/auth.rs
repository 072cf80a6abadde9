//! Login, logout and whoami
//!
//! The credential list is a placeholder gate; other commands do not require
//! a session.

use super::Context;
use chitty::adapters::CredentialFileAuthenticator;
use chitty::adapters::credentials::{clear_session, load_session, save_session};
use chitty::core::ports::Authenticator;
use chitty::output::{OperationResult, OutputMode, Render};
use chitty::paths;

/// Sign in and remember the session
pub fn login(email: &str, password: &str, ctx: &Context) -> anyhow::Result<()> {
    let auth = CredentialFileAuthenticator::new(ctx.config().credentials_file());
    let user = auth.sign_in(email.trim(), password)?;

    save_session(&paths::session_file(), &user)?;
    log::debug!("Signed in as {} ({})", user.email, user.uid);

    OperationResult::ok_with_id(format!("Signed in as {}", user.email), user.uid).render(ctx.mode());
    Ok(())
}

/// Forget the session
pub fn logout(ctx: &Context) -> anyhow::Result<()> {
    clear_session(&paths::session_file())?;
    OperationResult::ok("Signed out").render(ctx.mode());
    Ok(())
}

/// Show the signed-in user
pub fn whoami(ctx: &Context) -> anyhow::Result<()> {
    let user = load_session(&paths::session_file());

    match ctx.mode() {
        OutputMode::Json => {
            println!("{}", serde_json::json!({ "signed_in": user.is_some(), "user": user }));
        },
        OutputMode::Human => match user {
            Some(user) => println!("{} ({})", user.email, user.uid),
            None => println!("Not signed in."),
        },
    }
    Ok(())
}
