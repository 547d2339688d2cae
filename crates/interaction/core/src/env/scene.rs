use crate::target::{EntityId, WorldPosition};

/// Spatial index of entities lying on loaded tiles.
pub trait SceneOracle: Send + Sync {
    /// Origin and extent of the currently loaded region, or `None` when no
    /// spatial index is available.
    fn scene_base(&self) -> Option<SceneBase>;

    /// Entities on `cell`, front-most first. `None` when the cell holds no data.
    fn ground_stack(&self, cell: SceneCell) -> Option<Vec<EntityId>>;
}

/// Loaded region anchored at a world coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneBase {
    pub base_x: i32,
    pub base_y: i32,
    /// Width and height of the loaded square, in tiles.
    pub size: i32,
    /// Number of loaded floor planes.
    pub planes: i32,
}

impl SceneBase {
    pub const fn new(base_x: i32, base_y: i32, size: i32, planes: i32) -> Self {
        Self {
            base_x,
            base_y,
            size,
            planes,
        }
    }

    /// Maps a world position into the loaded grid, if it falls inside it.
    pub fn cell_for(&self, position: WorldPosition) -> Option<SceneCell> {
        let x = position.x - self.base_x;
        let y = position.y - self.base_y;

        let in_range = (0..self.size).contains(&x)
            && (0..self.size).contains(&y)
            && (0..self.planes).contains(&position.plane);

        in_range.then_some(SceneCell {
            x,
            y,
            plane: position.plane,
        })
    }
}

/// Tile coordinate relative to the loaded region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneCell {
    pub x: i32,
    pub y: i32,
    pub plane: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_is_relative_to_base() {
        let base = SceneBase::new(3200, 3200, 104, 4);
        assert_eq!(
            base.cell_for(WorldPosition::new(3222, 3218, 1)),
            Some(SceneCell { x: 22, y: 18, plane: 1 })
        );
    }

    #[test]
    fn positions_outside_loaded_region_do_not_resolve() {
        let base = SceneBase::new(3200, 3200, 104, 4);
        assert_eq!(base.cell_for(WorldPosition::new(3199, 3210, 0)), None);
        assert_eq!(base.cell_for(WorldPosition::new(3304, 3210, 0)), None);
        assert_eq!(base.cell_for(WorldPosition::new(3210, 3210, 4)), None);
    }
}
