use crate::geometry::{CanvasPoint, Viewport};
use crate::target::WorldPosition;

/// Projection of world tiles onto the rendering canvas.
pub trait ProjectionOracle: Send + Sync {
    /// Canvas point of the tile's ground level, or `None` when the projection
    /// cannot be computed (tile not loaded, behind the camera, ...).
    fn project(&self, position: WorldPosition) -> Option<CanvasPoint>;

    /// Current canvas bounds, or `None` when no canvas exists.
    fn viewport(&self) -> Option<Viewport>;
}

/// Projects `position` and keeps it only if it lands inside the viewport.
pub fn project_visible<O>(oracle: &O, position: WorldPosition) -> Option<CanvasPoint>
where
    O: ProjectionOracle + ?Sized,
{
    let point = oracle.project(position)?;
    let viewport = oracle.viewport()?;

    if viewport.contains(point) {
        Some(point)
    } else {
        tracing::debug!(
            "tile {} projects off-screen to {} (viewport {}x{})",
            position,
            point,
            viewport.width,
            viewport.height
        );
        None
    }
}
