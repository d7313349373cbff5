//! Login, logout and session inspection.

use creator_portal::constants::{ERR_LOGIN_FAILED, MSG_LOGIN_SUCCESS, MSG_LOGOUT_SUCCESS};
use creator_portal::models::LoginRequest;
use creator_portal::services::{resolve_role, AuthService};

use super::{page_error, Context, PageResult};

pub async fn login(ctx: &Context, email: String, password: String) -> PageResult {
    let auth = AuthService::new(ctx.api.clone(), &ctx.config);
    let outcome = auth
        .login(LoginRequest::new(email, password))
        .await
        .map_err(page_error(ERR_LOGIN_FAILED))?;

    println!("{} (role: {})", MSG_LOGIN_SUCCESS, outcome.role);
    println!("Continue at {}", outcome.landing);
    Ok(())
}

/// Best-effort server logout, then local teardown through the guard.
pub async fn logout(ctx: &Context) -> PageResult {
    AuthService::new(ctx.api.clone(), &ctx.config).logout().await;

    let mut guard = match ctx.mount(&ctx.config.dashboard_path, false) {
        Some(guard) => guard,
        // Nothing to tear down.
        None => return Ok(()),
    };
    guard.logout();
    println!("{}", MSG_LOGOUT_SUCCESS);
    Ok(())
}

pub fn whoami(ctx: &Context) -> PageResult {
    let credential = ctx.session.read();
    let role = resolve_role(credential.as_deref());
    match credential {
        Some(_) => println!("Logged in (role: {}, stored: {})", role, ctx.session.stored_role()),
        None => println!("Not logged in"),
    }
    Ok(())
}
