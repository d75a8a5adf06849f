use dialoguer::Password;

use crate::cli::{self, Context};
use crate::error::Result;
use crate::session;

/// Log in and store the session; prompts for the password when omitted
pub fn login(ctx: &Context, user: &str, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let session = session::login(&ctx.api, &ctx.store, user, &password)?;

    println!("Login succeeded!");
    cli::print_login(&session);
    Ok(())
}

/// Remove the stored session
pub fn logout() -> Result<()> {
    let store = cli::session_store()?;

    if store.clear()? {
        println!("Logged out");
    } else {
        println!("Logged out (no stored session)");
    }
    Ok(())
}
