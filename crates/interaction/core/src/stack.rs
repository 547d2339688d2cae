//! Front-to-back ordering of entities sharing a tile.
//!
//! Only the front-most entity reacts to a primary click; anything beneath it
//! must be reached through the contextual menu.
use crate::env::SceneOracle;
use crate::target::{EntityId, WorldPosition};

/// Where an entity sits in its tile's stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackOrder {
    /// The entity is front-most.
    Top,
    /// Another entity is in front. `depth` is the entity's index in the stack,
    /// or `None` when it is not on the tile at all.
    Covered { top: EntityId, depth: Option<usize> },
    /// The tile resolved but holds nothing.
    Empty,
    /// The tile could not be resolved (no spatial index, or outside the loaded
    /// region).
    Unresolved,
}

impl StackOrder {
    /// Whether a primary click reaches the entity.
    pub fn is_actionable(self, assume_top_when_unresolved: bool) -> bool {
        match self {
            StackOrder::Top | StackOrder::Empty => true,
            StackOrder::Covered { .. } => false,
            StackOrder::Unresolved => assume_top_when_unresolved,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct StackOrderResolver {
    assume_top_when_unresolved: bool,
}

impl StackOrderResolver {
    pub fn new(assume_top_when_unresolved: bool) -> Self {
        Self {
            assume_top_when_unresolved,
        }
    }

    pub fn stack_order<O>(&self, oracle: &O, position: WorldPosition, entity: EntityId) -> StackOrder
    where
        O: SceneOracle + ?Sized,
    {
        let Some(cell) = oracle.scene_base().and_then(|base| base.cell_for(position)) else {
            return StackOrder::Unresolved;
        };
        // A loaded cell without data holds nothing.
        let stack = oracle.ground_stack(cell).unwrap_or_default();

        match stack.first() {
            None => StackOrder::Empty,
            Some(&top) if top == entity => StackOrder::Top,
            Some(&top) => StackOrder::Covered {
                top,
                depth: stack.iter().position(|&id| id == entity),
            },
        }
    }

    /// Whether `entity` is front-most on the tile at `position`.
    pub fn is_top_of_stack<O>(&self, oracle: &O, position: WorldPosition, entity: EntityId) -> bool
    where
        O: SceneOracle + ?Sized,
    {
        self.stack_order(oracle, position, entity)
            .is_actionable(self.assume_top_when_unresolved)
    }

    pub fn assumes_top_when_unresolved(&self) -> bool {
        self.assume_top_when_unresolved
    }
}

impl Default for StackOrderResolver {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::env::{SceneBase, SceneCell};

    const BONES: EntityId = EntityId(526);
    const COINS: EntityId = EntityId(995);
    const TILE: WorldPosition = WorldPosition::new(3222, 3218, 0);

    struct Tiles {
        base: Option<SceneBase>,
        stacks: HashMap<SceneCell, Vec<EntityId>>,
    }

    impl Tiles {
        fn loaded(stack: Vec<EntityId>) -> Self {
            let base = SceneBase::new(3200, 3200, 104, 4);
            let cell = base.cell_for(TILE).expect("tile inside scene");
            Self {
                base: Some(base),
                stacks: HashMap::from([(cell, stack)]),
            }
        }
    }

    impl SceneOracle for Tiles {
        fn scene_base(&self) -> Option<SceneBase> {
            self.base
        }

        fn ground_stack(&self, cell: SceneCell) -> Option<Vec<EntityId>> {
            self.stacks.get(&cell).cloned()
        }
    }

    #[test]
    fn empty_stack_is_actionable() {
        let resolver = StackOrderResolver::default();
        let tiles = Tiles::loaded(vec![]);
        assert_eq!(resolver.stack_order(&tiles, TILE, BONES), StackOrder::Empty);
        assert!(resolver.is_top_of_stack(&tiles, TILE, BONES));
    }

    #[test]
    fn front_most_entity_is_top() {
        let resolver = StackOrderResolver::default();
        let tiles = Tiles::loaded(vec![BONES, COINS]);
        assert!(resolver.is_top_of_stack(&tiles, TILE, BONES));
    }

    #[test]
    fn buried_entity_is_not_top() {
        let resolver = StackOrderResolver::default();
        let tiles = Tiles::loaded(vec![COINS, BONES]);
        assert_eq!(
            resolver.stack_order(&tiles, TILE, BONES),
            StackOrder::Covered {
                top: COINS,
                depth: Some(1)
            }
        );
        assert!(!resolver.is_top_of_stack(&tiles, TILE, BONES));
    }

    #[test]
    fn missing_entity_is_not_top() {
        let resolver = StackOrderResolver::default();
        let tiles = Tiles::loaded(vec![COINS]);
        assert!(!resolver.is_top_of_stack(&tiles, TILE, BONES));
    }

    #[test]
    fn unresolved_tile_fails_open_by_default() {
        let no_index = Tiles {
            base: None,
            stacks: HashMap::new(),
        };
        let resolver = StackOrderResolver::default();
        assert_eq!(resolver.stack_order(&no_index, TILE, BONES), StackOrder::Unresolved);
        assert!(resolver.is_top_of_stack(&no_index, TILE, BONES));

        let far_away = WorldPosition::new(100, 100, 0);
        let tiles = Tiles::loaded(vec![COINS, BONES]);
        assert!(resolver.is_top_of_stack(&tiles, far_away, BONES));
    }

    #[test]
    fn loaded_cell_without_data_is_empty() {
        let tiles = Tiles {
            base: Some(SceneBase::new(3200, 3200, 104, 4)),
            stacks: HashMap::new(),
        };
        let resolver = StackOrderResolver::new(false);
        assert_eq!(resolver.stack_order(&tiles, TILE, BONES), StackOrder::Empty);
        assert!(resolver.is_top_of_stack(&tiles, TILE, BONES));
    }

    #[test]
    fn unresolved_tile_can_fail_closed() {
        let resolver = StackOrderResolver::new(false);
        let tiles = Tiles::loaded(vec![]);
        let far_away = WorldPosition::new(100, 100, 0);
        assert!(!resolver.is_top_of_stack(&tiles, far_away, BONES));
    }
}
