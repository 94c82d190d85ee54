//! Query outcome errors.
//!
//! These describe why a start/end pair could not be resolved into a plan.
//! None of them are fatal: each maps to a user-facing message.

/// Errors from resolving a start/end stop pair.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// The stop is not on any loaded route
    #[error("no route found: unknown stop {0:?}")]
    UnknownStop(String),

    /// Both stops are known but nothing connects them
    #[error("transit not possible from {from:?} to {to:?}")]
    NoPathFound { from: String, to: String },
}

impl PlanError {
    pub fn no_path(from: &str, to: &str) -> Self {
        PlanError::NoPathFound {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Short machine-readable status for reporting.
    pub fn status(&self) -> &'static str {
        match self {
            PlanError::UnknownStop(_) => "no_route_found",
            PlanError::NoPathFound { .. } => "transit_not_possible",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PlanError::UnknownStop("Narnia".into());
        assert_eq!(err.to_string(), "no route found: unknown stop \"Narnia\"");

        let err = PlanError::no_path("Alewife", "Wonderland");
        assert_eq!(
            err.to_string(),
            "transit not possible from \"Alewife\" to \"Wonderland\""
        );
    }

    #[test]
    fn status_codes() {
        assert_eq!(PlanError::UnknownStop("X".into()).status(), "no_route_found");
        assert_eq!(PlanError::no_path("A", "B").status(), "transit_not_possible");
    }
}
