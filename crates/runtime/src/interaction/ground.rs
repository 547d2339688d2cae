//! Ground-target pipeline: visibility, stack order, then a primary click or a
//! "Take" through the contextual menu.
use interaction_core::{CanvasPoint, GroundTarget, Hitbox, StackOrder, WorldPosition, project_visible};
use tracing::debug;

use super::Context;
use super::session::MenuSession;
use crate::api::{InteractionError, Result};

pub(crate) async fn run(ctx: &Context<'_>, target: &GroundTarget) -> Result<()> {
    target.validate()?;

    let name = target.display_name();
    let anchor = visible_point(ctx, target.position).await?;
    let region = Hitbox::centered_square(anchor, ctx.config.interaction.ground_click_size);

    let order = ctx.resolver.stack_order(ctx.state, target.position, target.entity);
    let assume_top = ctx.resolver.assumes_top_when_unresolved();

    if order.is_actionable(assume_top) {
        if order == StackOrder::Unresolved {
            debug!("stack at {} unresolved; treating {} as top", target.position, name);
        } else {
            debug!("{} is top of stack at {}; primary click", name, target.position);
        }
        return ctx.click_inside(&region).await;
    }

    debug!(
        "{} is covered at {} ({:?}); taking it through the menu",
        name, target.position, order
    );
    let aim = ctx.sampler.click_point(&region);
    ctx.device.move_to(aim).await?;

    let session = MenuSession::open(ctx, region).await?;
    session.choose(&target.take_query()).await
}

/// Projected point of `position`, giving the camera one chance to bring it
/// into view.
async fn visible_point(ctx: &Context<'_>, position: WorldPosition) -> Result<CanvasPoint> {
    if let Some(point) = project_visible(ctx.state, position) {
        return Ok(point);
    }

    let Some(camera) = ctx.camera else {
        return Err(InteractionError::NotVisible {
            position,
            camera_retried: false,
        });
    };

    debug!("tile {} not visible; repositioning camera", position);
    camera.ensure_visible(position).await;

    project_visible(ctx.state, position).ok_or(InteractionError::NotVisible {
        position,
        camera_retried: true,
    })
}
