//! Login and logout.

use anyhow::Result;
use plant_auth::{AuthSession, User};
use tracing::info;

use super::LoginArgs;
use crate::context::Context;
use crate::output::format_timestamp;
use crate::store;

/// Start a customer session.
pub async fn login(args: LoginArgs, ctx: &Context) -> Result<()> {
    let user = User::customer(args.email, args.name)?;
    let session = AuthSession::authenticated(user);
    store::save_session(&ctx.session_path()?, &session)?;
    info!(session = %session.id, "customer signed in");

    if ctx.output.is_json() {
        ctx.output.json(&session);
        return Ok(());
    }

    ctx.output
        .success(&format!("Signed in as {}", session.user.display_name()));
    ctx.output
        .kv("Expires", &format_timestamp(session.expires_at));
    Ok(())
}

/// End the stored session, if any.
pub async fn logout(ctx: &Context) -> Result<()> {
    if store::clear_session(&ctx.session_path()?)? {
        ctx.output.success("Signed out");
    } else {
        ctx.output.info("Not signed in.");
    }
    Ok(())
}
