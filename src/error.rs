use crate::step::StepName;
use thiserror::Error;

/// Errors that can abort a wizard run.
///
/// Flow control (going back, retrying the current step, cancelling the
/// run) is not an error; see [`FlowSignal`](crate::FlowSignal). This
/// enum covers the fatal paths only: once one of these is returned, no
/// further steps execute.
///
/// # Non-Exhaustive
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code. When matching
/// on this error, always include a wildcard pattern:
///
/// ```
/// use annai::{StepName, WizardError};
///
/// fn handle_error(error: WizardError) {
///     match error {
///         WizardError::Step { step_name, details } => {
///             eprintln!("Step {} failed: {}", step_name, details);
///         }
///         WizardError::Surface(details) => {
///             eprintln!("Prompt surface failed: {}", details);
///         }
///         WizardError::Configuration(msg) => {
///             eprintln!("Configuration error: {}", msg);
///         }
///         _ => eprintln!("Unknown error: {}", error),
///     }
/// }
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WizardError {
    /// A step failed for a reason other than a flow signal.
    ///
    /// This is the hard path: a collaborator error or a programming
    /// error inside a step, not a validation failure (steps translate
    /// those into `Resume` signals).
    #[error("Step failed: {step_name}, details: {details}")]
    Step {
        /// The name of the step that failed
        step_name: StepName,
        /// Details about the failure
        details: String,
    },

    /// The prompt surface could not produce an outcome.
    ///
    /// Covers terminal/widget failures and surfaces replying outside
    /// their session contract.
    #[error("Prompt surface failed: {0}")]
    Surface(String),

    /// The wizard configuration is invalid.
    ///
    /// Returned by the builder when no steps were added, and by prompt
    /// operations used incorrectly (e.g. a choice prompt with no items).
    #[error("Invalid wizard configuration: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = WizardError::Step {
            step_name: StepName::new("GetAddress"),
            details: "store lookup failed".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Step failed: GetAddress, details: store lookup failed"
        );

        let error = WizardError::Surface("terminal closed".to_string());
        assert_eq!(error.to_string(), "Prompt surface failed: terminal closed");

        let error = WizardError::Configuration("at least one step is required".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid wizard configuration: at least one step is required"
        );
    }
}
