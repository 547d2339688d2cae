//! Scoped contextual-menu session.
//!
//! Opening a menu yields a [`MenuSession`], and the only way to finish one is
//! [`MenuSession::choose`], which either clicks the wanted entry or dismisses
//! the menu before returning. A session dropped unresolved (its future was
//! cancelled mid-flight) logs a warning since the menu may be left open.
use interaction_core::{Hitbox, InteractionConfig, MenuQuery};
use tracing::{debug, warn};

use super::Context;
use crate::api::{DelayProfile, Dismissal, InteractionError, Result};

#[must_use = "an opened menu must be resolved with `choose`"]
pub(crate) struct MenuSession<'c, 'a> {
    ctx: &'c Context<'a>,
    anchor: Hitbox,
    open: bool,
}

impl<'c, 'a> MenuSession<'c, 'a> {
    /// Secondary-clicks `hitbox` and waits for the menu to settle.
    ///
    /// If the secondary click itself faults no menu was opened and no session
    /// is returned.
    pub async fn open(ctx: &'c Context<'a>, hitbox: Hitbox) -> Result<Self> {
        ctx.device.right_click(hitbox).await?;
        let session = Self {
            ctx,
            anchor: hitbox,
            open: true,
        };

        ctx.scheduler.sleep(DelayProfile::MenuSelect).await;
        session.wait_until_ready().await;
        Ok(session)
    }

    /// Clicks the entry matching `query`, or dismisses the menu on any failure.
    pub async fn choose(mut self, query: &MenuQuery) -> Result<()> {
        let result = self.select(query).await;
        if result.is_ok() {
            self.open = false;
            return result;
        }

        let via = self.dismiss().await;
        self.open = false;

        result.map_err(|err| match err {
            InteractionError::EntryNotFound { query } => InteractionError::Dismissed { query, via },
            other => other,
        })
    }

    async fn select(&self, query: &MenuQuery) -> Result<()> {
        let Some(entry) = self.ctx.locator.locate(self.ctx.state, query) else {
            return Err(InteractionError::EntryNotFound {
                query: query.to_string(),
            });
        };

        debug!("selecting '{}' at {} ({} bounds)", query, entry.hitbox, entry.tier);
        self.ctx.click_inside(&entry.hitbox).await
    }

    /// Clicks "Cancel" when it can be located, otherwise presses the dismiss key.
    async fn dismiss(&self) -> Dismissal {
        let cancel = MenuQuery::new(InteractionConfig::CANCEL_ACTION);
        if let Some(entry) = self.ctx.locator.locate(self.ctx.state, &cancel) {
            match self.ctx.click_inside(&entry.hitbox).await {
                Ok(()) => {
                    debug!("dismissed menu at {} via cancel entry", self.anchor);
                    return Dismissal::CancelEntry;
                }
                Err(err) => warn!("clicking cancel entry failed, pressing dismiss key: {}", err),
            }
        }

        match self.ctx.device.press_dismiss_key().await {
            Ok(()) => {
                debug!("dismissed menu at {} via dismiss key", self.anchor);
                Dismissal::DismissKey
            }
            Err(err) => {
                warn!("could not dismiss menu at {}: {}", self.anchor, err);
                Dismissal::Failed
            }
        }
    }

    /// Polls until the menu is open and populated, bounded by the configured
    /// timeout. Returns whether it became ready.
    async fn wait_until_ready(&self) -> bool {
        let state = self.ctx.state;
        let interval = self.ctx.config.menu_poll_interval;
        let poll = async {
            while !state.is_menu_ready() {
                tokio::time::sleep(interval).await;
            }
        };

        match tokio::time::timeout(self.ctx.config.menu_ready_timeout, poll).await {
            Ok(()) => true,
            Err(_) => {
                warn!(
                    "menu at {} not ready after {:?}",
                    self.anchor, self.ctx.config.menu_ready_timeout
                );
                false
            }
        }
    }
}

impl Drop for MenuSession<'_, '_> {
    fn drop(&mut self) {
        if self.open {
            warn!(
                "menu session at {} dropped unresolved; the menu may still be open",
                self.anchor
            );
        }
    }
}
