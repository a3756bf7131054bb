use crate::prompter::Prompter;
use crate::signal::StepError;
use async_trait::async_trait;
use std::fmt;

/// Type-safe step name wrapper.
///
/// Provides compile-time safety for step identifiers, preventing
/// typos and mismatched step names at the API level. Names appear in
/// logs and in [`WizardError::Step`](crate::WizardError::Step); the
/// wizard never dispatches on them.
///
/// # Examples
///
/// ```
/// use annai::StepName;
///
/// let name = StepName::new("PickProduct");
/// assert_eq!(name.as_str(), "PickProduct");
///
/// // From trait for ergonomic conversion
/// let name: StepName = "GetAddress".into();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StepName(String);

impl StepName {
    /// Creates a new StepName
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a StepName from a type's name (extracts last segment)
    pub fn from_type_name<T: ?Sized>() -> Self {
        let full_name = std::any::type_name::<T>();
        let short_name = full_name.split("::").last().unwrap_or("UnknownStep");
        Self::new(short_name)
    }

    /// Returns the step name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StepName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StepName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for StepName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for StepName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Result of one step invocation: the next accumulated state, or a
/// value on the error channel (a flow signal or a fatal failure).
pub type StepResult<S> = Result<S, StepError>;

/// One question or decision unit in a wizard.
///
/// Implement this trait to define the steps of your flow. Each step
/// receives a [`Prompter`] for opening prompt sessions and a reference
/// to the accumulated state, and returns the next state, or redirects
/// the cursor through the error channel.
///
/// # Type Parameter
///
/// * `S` - The accumulated state threaded through the run. Model
///   in-progress data with `Option` fields; the wizard never interprets
///   the state.
///
/// # Examples
///
/// ```
/// use annai::prelude::*;
/// use async_trait::async_trait;
///
/// #[derive(Debug, Clone, Default)]
/// struct Draft {
///     name: Option<String>,
///     email: Option<String>,
/// }
///
/// define_step!(GetName);
///
/// #[async_trait]
/// impl Step<Draft> for GetName {
///     async fn run(&self, input: &mut Prompter<'_>, state: &Draft) -> StepResult<Draft> {
///         let answer = input.ask_text("Enter your name").await?;
///         if answer.is_empty() {
///             return Err(FlowSignal::resume_with("Cannot be blank").into());
///         }
///         Ok(Draft {
///             name: Some(answer),
///             ..state.clone()
///         })
///     }
/// }
/// ```
#[async_trait]
pub trait Step<S>: Send + Sync {
    /// Executes the step.
    ///
    /// `state` is the accumulated state as it existed when the previous
    /// step completed. Implementations must build and return a new
    /// state value rather than patching shared storage, so that a
    /// replay after `Back` or `Resume` starts from an untouched
    /// snapshot.
    ///
    /// A step may perform any number of non-interactive async
    /// operations around its prompts; the wizard does not advance until
    /// the returned future settles.
    ///
    /// # Returns
    ///
    /// - `Ok(next)` - The step finished; the wizard replaces the state
    ///   with `next` and moves to the following step
    /// - `Err(StepError::Signal(_))` - Redirect the cursor (back,
    ///   resume, or cancel)
    /// - `Err(StepError::Fatal(_))` - Abort the run
    async fn run(&self, input: &mut Prompter<'_>, state: &S) -> StepResult<S>;

    /// Returns the step name.
    ///
    /// By default, uses the type name. Override to provide a custom name.
    fn name(&self) -> StepName {
        StepName::from_type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::define_step;
    use crate::error::WizardError;
    use crate::surface::{PromptItem, PromptSpec, PromptSurface, SelectOutcome, TextOutcome};

    struct NoopSurface;

    #[async_trait]
    impl PromptSurface for NoopSurface {
        async fn open_select(
            &mut self,
            _spec: PromptSpec<'_>,
            _items: &[PromptItem],
        ) -> Result<SelectOutcome, WizardError> {
            Ok(SelectOutcome::Dismissed)
        }

        async fn open_text(
            &mut self,
            _spec: PromptSpec<'_>,
            _prompt: &str,
        ) -> Result<TextOutcome, WizardError> {
            Ok(TextOutcome::Dismissed)
        }

        fn notify(&mut self, _message: &str) {}
    }

    define_step!(GreetStep);

    #[async_trait]
    impl Step<Vec<String>> for GreetStep {
        async fn run(
            &self,
            _input: &mut Prompter<'_>,
            state: &Vec<String>,
        ) -> StepResult<Vec<String>> {
            let mut next = state.clone();
            next.push("greeted".to_string());
            Ok(next)
        }
    }

    #[test]
    fn test_step_execution() {
        let step = GreetStep;
        let mut surface = NoopSurface;
        let mut prompter = Prompter::new(&mut surface, "Test", 1, 1);
        let result = tokio_test::block_on(step.run(&mut prompter, &Vec::new()));
        assert_eq!(result.unwrap(), vec!["greeted".to_string()]);
    }

    #[test]
    fn test_step_name() {
        let step = GreetStep;
        assert_eq!(step.name(), StepName::new("GreetStep"));
        assert_eq!(GreetStep::NAME, "GreetStep");
    }

    #[test]
    fn test_step_name_conversions() {
        let name = StepName::new("Approve");
        assert_eq!(name.as_str(), "Approve");
        assert_eq!(name.to_string(), "Approve");

        let name: StepName = "GetEmail".into();
        assert_eq!(name, StepName::new("GetEmail"));

        let name: StepName = String::from("GetPhone").into();
        assert_eq!(name.as_ref(), "GetPhone");
    }
}
