use std::fmt;

use super::text::{MatchPolicy, normalize};

/// Normalized description of the menu entry a caller wants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuQuery {
    action: String,
    target: Option<String>,
    identifier: Option<i32>,
}

impl MenuQuery {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: normalize(&action.into()),
            target: None,
            identifier: None,
        }
    }

    /// Restricts the match to entries acting on `target`.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        let target = normalize(&target.into());
        self.target = (!target.is_empty()).then_some(target);
        self
    }

    /// Accepts raw entries carrying this identifier as an alternative to the
    /// target text. Only the raw-entry tier exposes identifiers.
    pub fn with_identifier(mut self, identifier: i32) -> Self {
        self.identifier = Some(identifier);
        self
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn identifier(&self) -> Option<i32> {
        self.identifier
    }

    pub fn is_empty(&self) -> bool {
        self.action.is_empty()
    }

    /// Tests a normalized UI label, which carries action and target together.
    pub fn matches_label(&self, policy: MatchPolicy, label: &str) -> bool {
        match (&self.target, policy) {
            (None, _) => policy.matches(label, &self.action),
            (Some(target), MatchPolicy::Exact) => label == format!("{} {}", self.action, target),
            (Some(target), MatchPolicy::Contains) => {
                label.contains(self.action.as_str()) && label.contains(target.as_str())
            }
        }
    }

    /// Tests normalized option and target text of a raw entry.
    pub fn matches_entry(
        &self,
        policy: MatchPolicy,
        option: &str,
        target: &str,
        identifier: i32,
    ) -> bool {
        if !policy.matches(option, &self.action) {
            return false;
        }
        match &self.target {
            None => true,
            Some(expected) => {
                policy.matches(target, expected) || self.identifier == Some(identifier)
            }
        }
    }
}

impl fmt::Display for MenuQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            Some(target) => write!(f, "{} {}", self.action, target),
            None => write!(f, "{}", self.action),
        }
    }
}
