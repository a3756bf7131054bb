//! Flow control signals and the step error channel.

use crate::error::WizardError;
use std::fmt;
use thiserror::Error;

/// A control outcome raised by a step to redirect the wizard cursor.
///
/// Signals are not failures. The wizard loop consumes them to move the
/// cursor backward (`Back`), re-run the current step (`Resume`), or end
/// the run early (`Cancel`). Each may carry a message that is shown to
/// the user as a transient notice before the cursor moves.
///
/// Signals are transient: constructed by a step, consumed immediately
/// by the wizard, never stored.
///
/// # Examples
///
/// ```
/// use annai::FlowSignal;
///
/// let signal = FlowSignal::resume_with("Cannot be blank");
/// assert_eq!(signal.message(), Some("Cannot be blank"));
///
/// let signal = FlowSignal::back();
/// assert_eq!(signal.message(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowSignal {
    /// Re-execute the step immediately before the current one.
    Back {
        /// Optional notice shown before the cursor moves
        message: Option<String>,
    },
    /// Re-execute the current step, e.g. after a validation failure.
    Resume {
        /// Optional notice shown before the step re-runs
        message: Option<String>,
    },
    /// End the run immediately, skipping all later steps.
    Cancel {
        /// Optional notice shown before the run ends
        message: Option<String>,
    },
}

impl FlowSignal {
    /// Creates a `Back` signal without a message.
    pub fn back() -> Self {
        FlowSignal::Back { message: None }
    }

    /// Creates a `Back` signal carrying a notice.
    pub fn back_with(message: impl Into<String>) -> Self {
        FlowSignal::Back {
            message: Some(message.into()),
        }
    }

    /// Creates a `Resume` signal without a message.
    pub fn resume() -> Self {
        FlowSignal::Resume { message: None }
    }

    /// Creates a `Resume` signal carrying a notice.
    ///
    /// This is the signal for local validation failures: the user sees
    /// the notice and the same question again.
    pub fn resume_with(message: impl Into<String>) -> Self {
        FlowSignal::Resume {
            message: Some(message.into()),
        }
    }

    /// Creates a `Cancel` signal without a message.
    pub fn cancel() -> Self {
        FlowSignal::Cancel { message: None }
    }

    /// Creates a `Cancel` signal carrying a notice.
    pub fn cancel_with(message: impl Into<String>) -> Self {
        FlowSignal::Cancel {
            message: Some(message.into()),
        }
    }

    /// Returns the notice carried by the signal, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            FlowSignal::Back { message }
            | FlowSignal::Resume { message }
            | FlowSignal::Cancel { message } => message.as_deref(),
        }
    }
}

impl fmt::Display for FlowSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            FlowSignal::Back { .. } => "back",
            FlowSignal::Resume { .. } => "resume",
            FlowSignal::Cancel { .. } => "cancel",
        };
        match self.message() {
            Some(message) => write!(f, "{} ({})", kind, message),
            None => write!(f, "{}", kind),
        }
    }
}

/// The error channel for step execution.
///
/// Steps report two very different things through their `Result`: flow
/// control (expected, handled entirely inside the wizard loop) and
/// fatal failures (aborting the run). Keeping both in one channel lets
/// `?` do the right thing in step bodies: a dismissed prompt becomes a
/// `Cancel` signal and propagates unchanged, while a surface failure
/// becomes a fatal error, and the step code reads straight through.
///
/// # Examples
///
/// ```
/// use annai::{FlowSignal, StepError};
///
/// fn require_non_empty(answer: String) -> Result<String, StepError> {
///     if answer.is_empty() {
///         return Err(FlowSignal::resume_with("Cannot be blank").into());
///     }
///     Ok(answer)
/// }
///
/// assert!(require_non_empty(String::new()).is_err());
/// assert!(require_non_empty("ok".to_string()).is_ok());
/// ```
#[derive(Error, Debug)]
pub enum StepError {
    /// A flow control signal.
    ///
    /// Consumed by the wizard loop; never surfaced as a failure to the
    /// caller of a run.
    #[error("flow signal: {0}")]
    Signal(FlowSignal),

    /// A fatal failure.
    ///
    /// Aborts the run and propagates to the caller.
    #[error(transparent)]
    Fatal(#[from] WizardError),
}

impl From<FlowSignal> for StepError {
    fn from(signal: FlowSignal) -> Self {
        StepError::Signal(signal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_constructors() {
        assert_eq!(FlowSignal::back(), FlowSignal::Back { message: None });
        assert_eq!(
            FlowSignal::back_with("No nearby open stores"),
            FlowSignal::Back {
                message: Some("No nearby open stores".to_string())
            }
        );
        assert_eq!(FlowSignal::resume(), FlowSignal::Resume { message: None });
        assert_eq!(FlowSignal::cancel(), FlowSignal::Cancel { message: None });
    }

    #[test]
    fn test_signal_message() {
        assert_eq!(FlowSignal::resume().message(), None);
        assert_eq!(
            FlowSignal::resume_with("Cannot be blank").message(),
            Some("Cannot be blank")
        );
        assert_eq!(
            FlowSignal::cancel_with("done").message(),
            Some("done")
        );
    }

    #[test]
    fn test_signal_display() {
        assert_eq!(FlowSignal::back().to_string(), "back");
        assert_eq!(
            FlowSignal::resume_with("Cannot be blank").to_string(),
            "resume (Cannot be blank)"
        );
    }

    #[test]
    fn test_step_error_conversions() {
        let error: StepError = FlowSignal::cancel().into();
        assert!(matches!(
            error,
            StepError::Signal(FlowSignal::Cancel { message: None })
        ));

        let error: StepError = WizardError::Configuration("no steps".to_string()).into();
        assert!(matches!(error, StepError::Fatal(_)));
    }

    #[test]
    fn test_step_error_display() {
        let error: StepError = FlowSignal::back_with("Pick a product").into();
        assert_eq!(error.to_string(), "flow signal: back (Pick a product)");

        let error: StepError = WizardError::Surface("terminal closed".to_string()).into();
        assert_eq!(error.to_string(), "Prompt surface failed: terminal closed");
    }
}
