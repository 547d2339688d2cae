//! Unified error types surfaced by the interaction pipeline.
//!
//! Every failure an interaction can hit is one of these variants. They are
//! propagated with `?` between pipeline steps and resolved into an
//! [`InteractionOutcome`] at the [`crate::Interactor`] boundary, so callers
//! only ever see an outcome or a boolean.
use std::fmt;

use thiserror::Error;

use interaction_core::{TargetError, WorldPosition};

use super::outcome::InteractionOutcome;

pub type Result<T> = std::result::Result<T, InteractionError>;

#[derive(Debug, Error)]
pub enum InteractionError {
    #[error("invalid target: {0}")]
    InvalidTarget(#[from] TargetError),

    #[error("target at {position} is not visible (camera retried: {camera_retried})")]
    NotVisible {
        position: WorldPosition,
        camera_retried: bool,
    },

    #[error("menu entry '{query}' not found")]
    EntryNotFound { query: String },

    #[error(transparent)]
    Device(#[from] DeviceError),

    #[error("menu entry '{query}' not found; menu dismissed via {via}")]
    Dismissed { query: String, via: Dismissal },

    #[error("interactor requires {0} to be configured before building")]
    MissingCollaborator(&'static str),
}

impl InteractionError {
    /// Outcome reported to callers for this failure.
    pub fn outcome(&self) -> InteractionOutcome {
        match self {
            InteractionError::Device(_) => InteractionOutcome::DeviceFailure,
            InteractionError::Dismissed { .. } => InteractionOutcome::Cancelled,
            InteractionError::InvalidTarget(_)
            | InteractionError::NotVisible { .. }
            | InteractionError::EntryNotFound { .. }
            | InteractionError::MissingCollaborator(_) => InteractionOutcome::NotFound,
        }
    }
}

/// Faults raised by an [`crate::InputDevice`].
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("{operation} failed: {message}")]
    Fault {
        operation: DeviceOperation,
        message: String,
    },

    #[error("input device disconnected")]
    Disconnected,
}

impl DeviceError {
    pub fn fault(operation: DeviceOperation, message: impl Into<String>) -> Self {
        DeviceError::Fault {
            operation,
            message: message.into(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DeviceOperation {
    Move,
    Click,
    RightClick,
    DismissKey,
}

impl fmt::Display for DeviceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DeviceOperation::Move => "pointer move",
            DeviceOperation::Click => "click",
            DeviceOperation::RightClick => "right click",
            DeviceOperation::DismissKey => "dismiss key",
        };
        write!(f, "{}", label)
    }
}

/// How an unwanted menu was closed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Dismissal {
    /// The menu's own "Cancel" entry was clicked.
    CancelEntry,
    /// The dismiss key was pressed.
    DismissKey,
    /// Every dismissal attempt faulted; the menu may still be open.
    Failed,
}

impl fmt::Display for Dismissal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Dismissal::CancelEntry => "cancel entry",
            Dismissal::DismissKey => "dismiss key",
            Dismissal::Failed => "nothing (dismissal failed)",
        };
        write!(f, "{}", label)
    }
}
