//! Controller state machine types.

use serde::{Deserialize, Serialize};

/// The lifecycle status the controller is currently driving toward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DesiredState {
    /// Push the broadcast to `live`.
    #[default]
    Live,

    /// Fall back to `testing` after a rejected live transition.
    Testing,
}

/// The current state of the publishing controller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub enum PublisherState {
    /// No active broadcast session.
    #[default]
    Idle,

    /// A session is armed and the broadcast is being reconciled toward live.
    Publishing {
        /// Identifier of the broadcast being published.
        broadcast_id: String,
    },

    /// The broadcast was last observed live (or going live).
    OnAir {
        /// Identifier of the broadcast on air.
        broadcast_id: String,
    },
}

impl PublisherState {
    /// Returns true if the controller has no active session.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a session is armed but not yet observed on air.
    pub fn is_publishing(&self) -> bool {
        matches!(self, Self::Publishing { .. })
    }

    /// Returns true if the broadcast was last observed on air.
    pub fn is_on_air(&self) -> bool {
        matches!(self, Self::OnAir { .. })
    }

    /// Returns a simple string representation of the state.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Publishing { .. } => "Publishing",
            Self::OnAir { .. } => "OnAir",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_predicates() {
        assert!(PublisherState::Idle.is_idle());

        let publishing = PublisherState::Publishing {
            broadcast_id: "B1".to_string(),
        };
        assert!(publishing.is_publishing());
        assert!(!publishing.is_on_air());
        assert_eq!(publishing.name(), "Publishing");

        let on_air = PublisherState::OnAir {
            broadcast_id: "B1".to_string(),
        };
        assert!(on_air.is_on_air());
        assert_eq!(on_air.name(), "OnAir");
    }

    #[test]
    fn test_desired_state_default() {
        assert_eq!(DesiredState::default(), DesiredState::Live);
    }
}
