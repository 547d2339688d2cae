//! Generic contextual-menu action pipeline.
use interaction_core::menu::{normalize, primary_entry};
use interaction_core::{MenuActionTarget, MenuQuery};
use tracing::debug;

use super::Context;
use super::session::MenuSession;
use crate::api::Result;

pub(crate) async fn run(ctx: &Context<'_>, target: &MenuActionTarget) -> Result<()> {
    target.validate()?;

    let query = target.query();
    if target.primary_shortcut && primary_matches(ctx, &query) {
        debug!("'{}' is the primary action; clicking {}", query, target.hitbox);
        return ctx.click_inside(&target.hitbox).await;
    }

    let session = MenuSession::open(ctx, target.hitbox).await?;
    session.choose(&query).await
}

fn primary_matches(ctx: &Context<'_>, query: &MenuQuery) -> bool {
    let entries = ctx.state.menu_entries();
    let Some(primary) = primary_entry(&entries) else {
        return false;
    };

    query.matches_entry(
        ctx.locator.policy(),
        &normalize(&primary.action_text),
        &normalize(&primary.target_text),
        primary.identifier,
    )
}
