//! Interaction requests.
//!
//! A [`Target`] is built per request and never mutated. Validation happens up
//! front so a malformed request is rejected before the pointer moves.
use std::fmt;

use crate::config::InteractionConfig;
use crate::error::TargetError;
use crate::geometry::Hitbox;
use crate::menu::MenuQuery;

/// World tile coordinate including the floor plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPosition {
    pub x: i32,
    pub y: i32,
    pub plane: i32,
}

impl WorldPosition {
    pub const fn new(x: i32, y: i32, plane: i32) -> Self {
        Self { x, y, plane }
    }

    pub const fn is_valid(&self) -> bool {
        self.x >= 0 && self.y >= 0 && self.plane >= 0 && self.plane < InteractionConfig::MAX_PLANES
    }
}

impl fmt::Display for WorldPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.plane)
    }
}

/// Identifier of an interactive entity lying on a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub i32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the caller wants to interact with.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Target {
    Ground(GroundTarget),
    MenuAction(MenuActionTarget),
}

impl Target {
    pub fn validate(&self) -> Result<(), TargetError> {
        match self {
            Target::Ground(target) => target.validate(),
            Target::MenuAction(target) => target.validate(),
        }
    }
}

impl From<GroundTarget> for Target {
    fn from(target: GroundTarget) -> Self {
        Target::Ground(target)
    }
}

impl From<MenuActionTarget> for Target {
    fn from(target: MenuActionTarget) -> Self {
        Target::MenuAction(target)
    }
}

/// An entity lying on a world tile, possibly beneath others.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroundTarget {
    pub position: WorldPosition,
    pub entity: EntityId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
}

impl GroundTarget {
    pub fn new(position: WorldPosition, entity: EntityId) -> Self {
        Self {
            position,
            entity,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name used for menu matching and logs, falling back to the entity id.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => format!("item {}", self.entity.0),
        }
    }

    /// Query for the menu entry that picks this entity up.
    pub fn take_query(&self) -> MenuQuery {
        MenuQuery::new(InteractionConfig::TAKE_ACTION)
            .with_target(self.display_name())
            .with_identifier(self.entity.0)
    }

    pub fn validate(&self) -> Result<(), TargetError> {
        if !self.position.is_valid() {
            return Err(TargetError::InvalidPosition(self.position));
        }
        Ok(())
    }
}

/// A named action reachable through the contextual menu of `hitbox`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuActionTarget {
    pub hitbox: Hitbox,
    pub action: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub target_name: Option<String>,
    /// Click directly when the action is already the primary entry.
    #[cfg_attr(feature = "serde", serde(default))]
    pub primary_shortcut: bool,
}

impl MenuActionTarget {
    pub fn new(hitbox: Hitbox, action: impl Into<String>) -> Self {
        Self {
            hitbox,
            action: action.into(),
            target_name: None,
            primary_shortcut: false,
        }
    }

    pub fn with_target_name(mut self, target_name: impl Into<String>) -> Self {
        self.target_name = Some(target_name.into());
        self
    }

    pub fn with_primary_shortcut(mut self) -> Self {
        self.primary_shortcut = true;
        self
    }

    pub fn query(&self) -> MenuQuery {
        let query = MenuQuery::new(&self.action);
        match &self.target_name {
            Some(target) => query.with_target(target),
            None => query,
        }
    }

    pub fn validate(&self) -> Result<(), TargetError> {
        if self.action.trim().is_empty() {
            return Err(TargetError::EmptyAction);
        }
        if !self.hitbox.has_area() {
            return Err(TargetError::EmptyHitbox(self.hitbox));
        }
        Ok(())
    }
}
