// ABOUTME: CLI auth commands - signin, signout and whoami over the mocked
// file-backed session store

use anyhow::Result;
use serde_json::json;

use super::{OutputFormat, SigninArgs};
use crate::session::{Credentials, FileSessionStore, SessionStore};

/// Execute the signin command
pub fn signin(args: SigninArgs, format: OutputFormat) -> Result<()> {
    let mut store = FileSessionStore::open_default()?;
    let session = store.sign_in(&Credentials {
        email: args.email,
        password: args.password,
    })?;

    match format {
        OutputFormat::Json => {
            let payload = json!({
                "authenticated": true,
                "email": session.email,
                "role": session.role,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Text => {
            println!("Signed in as {} ({})", session.email, session.role);
        }
    }

    Ok(())
}

/// Execute the signout command
pub fn signout(format: OutputFormat) -> Result<()> {
    let mut store = FileSessionStore::open_default()?;
    store.sign_out()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({"authenticated": false}))?);
        }
        OutputFormat::Text => println!("Signed out."),
    }

    Ok(())
}

/// Execute the whoami command
pub fn whoami(format: OutputFormat) -> Result<()> {
    let store = FileSessionStore::open_default()?;

    match store.current_user() {
        Some(user) => match format {
            OutputFormat::Json => {
                let payload = json!({
                    "authenticated": true,
                    "email": user.email,
                    "role": user.role,
                    "signedInAt": user.signed_in_at,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            }
            OutputFormat::Text => {
                println!("{} ({}), signed in {}", user.email, user.role, user.signed_in_at);
            }
        },
        None => match format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&json!({"authenticated": false}))?);
            }
            OutputFormat::Text => println!("Not signed in."),
        },
    }

    Ok(())
}
