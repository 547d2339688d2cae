use std::fmt;

/// Terminal result of one interaction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum InteractionOutcome {
    Succeeded,
    /// The target or its menu entry could not be found (includes invalid
    /// requests and targets that stayed off-screen).
    NotFound,
    /// The input device faulted mid-interaction.
    DeviceFailure,
    /// The menu opened but lacked the entry and was dismissed.
    Cancelled,
}

impl InteractionOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, InteractionOutcome::Succeeded)
    }
}

impl fmt::Display for InteractionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InteractionOutcome::Succeeded => "succeeded",
            InteractionOutcome::NotFound => "not found",
            InteractionOutcome::DeviceFailure => "device failure",
            InteractionOutcome::Cancelled => "cancelled",
        };
        write!(f, "{}", label)
    }
}
