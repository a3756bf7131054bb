//! The wizard engine: step sequencing, cursor rules, and the builder.

use crate::error::WizardError;
use crate::prompter::Prompter;
use crate::signal::{FlowSignal, StepError};
use crate::step::{Step, StepName};
use crate::surface::PromptSurface;
use std::fmt;
use tracing::{debug, info, warn};

/// An ordered sequence of steps driven one at a time over a prompt
/// surface.
///
/// The wizard owns the only mutable control-flow state of a run: the
/// cursor. Steps move it indirectly by raising [`FlowSignal`]s; the
/// transition rules live entirely in [`Wizard::run`].
pub struct Wizard<S> {
    steps: Vec<Box<dyn Step<S>>>,
    title: String,
}

impl<S> fmt::Debug for Wizard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wizard")
            .field("title", &self.title)
            .field(
                "steps",
                &self.steps.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<S> Wizard<S> {
    /// Creates a new wizard builder.
    pub fn builder() -> WizardBuilder<S> {
        WizardBuilder::new()
    }

    /// The title shown on every prompt of a run.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the number of steps.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Returns the step names, in run order.
    pub fn step_names(&self) -> impl Iterator<Item = StepName> + '_ {
        self.steps.iter().map(|s| s.name())
    }

    /// Runs the wizard to completion and returns the accumulated state.
    ///
    /// Steps execute in strict cursor order, one at a time, starting
    /// from step 1. A step that completes replaces the state and moves
    /// the cursor forward; a step that raises a signal redirects it:
    /// `Back` re-executes the previous step, `Resume` re-executes the
    /// same step, `Cancel` ends the run immediately. Signal messages
    /// are shown through [`PromptSurface::notify`] before the cursor
    /// moves.
    ///
    /// The run does not distinguish "cancelled" from "finished": on
    /// both, the accumulated state is returned and callers check
    /// semantic completeness themselves. Going back from the first step
    /// likewise ends the run early, returning the state from run start.
    ///
    /// The surface's open session, if any, is disposed on every exit
    /// path, including fatal errors.
    ///
    /// # Errors
    ///
    /// Returns the first fatal [`WizardError`] a step or the surface
    /// reports; no further steps execute.
    pub async fn run(&self, surface: &mut dyn PromptSurface, initial: S) -> Result<S, WizardError> {
        let outcome = self.drive(surface, initial).await;
        surface.dispose();
        outcome
    }

    async fn drive(&self, surface: &mut dyn PromptSurface, mut state: S) -> Result<S, WizardError> {
        let total = self.steps.len();
        let mut cursor: usize = 1;
        let mut first = true;
        while cursor >= 1 && cursor <= total {
            let step = &self.steps[cursor - 1];
            // A session left open by the previous step must not stay
            // interactive while this step works.
            if !first {
                surface.set_busy(true);
            }
            first = false;

            let mut prompter = Prompter::new(surface, &self.title, cursor, total);
            match step.run(&mut prompter, &state).await {
                Ok(next) => {
                    debug!("Step '{}' completed", step.name());
                    state = next;
                    cursor += 1;
                }
                Err(StepError::Signal(signal)) => {
                    if let Some(message) = signal.message() {
                        surface.notify(message);
                    }
                    match signal {
                        FlowSignal::Back { .. } => {
                            info!("Step '{}' went back", step.name());
                            // From step 1 this lands on 0 and the loop
                            // ends early with the state from run start.
                            cursor -= 1;
                        }
                        FlowSignal::Resume { .. } => {
                            info!("Step '{}' will be retried", step.name());
                        }
                        FlowSignal::Cancel { .. } => {
                            info!("Run cancelled at step '{}'", step.name());
                            cursor = total + 1;
                        }
                    }
                }
                Err(StepError::Fatal(error)) => {
                    warn!("Step '{}' failed: {}", step.name(), error);
                    return Err(error);
                }
            }
        }
        Ok(state)
    }
}

/// Builder for constructing [`Wizard`] instances.
///
/// Steps run in the order they are added. Conditional omission (e.g.
/// skipping the prompt for a field already known from configuration)
/// happens here, before the run begins; the wizard itself only ever
/// sees the final ordered list.
pub struct WizardBuilder<S> {
    steps: Vec<Box<dyn Step<S>>>,
    title: String,
}

impl<S> Default for WizardBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> WizardBuilder<S> {
    /// Creates a new empty wizard builder.
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            title: String::new(),
        }
    }

    /// Sets the title shown on every prompt of the run.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Adds a step.
    pub fn add_step<St: Step<S> + 'static>(mut self, step: St) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Adds a step only when `condition` holds.
    pub fn add_step_if<St: Step<S> + 'static>(self, condition: bool, step: St) -> Self {
        if condition {
            self.add_step(step)
        } else {
            self
        }
    }

    /// Adds a step using its `Default` value.
    pub fn step<St: Step<S> + Default + 'static>(self) -> Self {
        self.add_step(St::default())
    }

    /// Adds an already boxed step.
    pub fn add_boxed(mut self, step: Box<dyn Step<S>>) -> Self {
        self.steps.push(step);
        self
    }

    /// Builds the wizard.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::Configuration`] when no steps were added.
    pub fn build(self) -> Result<Wizard<S>, WizardError> {
        if self.steps.is_empty() {
            return Err(WizardError::Configuration(
                "at least one step is required".to_string(),
            ));
        }
        Ok(Wizard {
            steps: self.steps,
            title: self.title,
        })
    }
}

/// Runs a one-off wizard over an ordered list of steps.
///
/// Builds a wizard titled `title` from `steps`, runs it against
/// `surface` starting from `initial`, and returns the accumulated
/// state.
///
/// # Errors
///
/// Returns [`WizardError::Configuration`] when `steps` is empty, or
/// the first fatal error of the run.
pub async fn collect_inputs<S>(
    title: impl Into<String>,
    steps: Vec<Box<dyn Step<S>>>,
    surface: &mut dyn PromptSurface,
    initial: S,
) -> Result<S, WizardError> {
    let mut builder = Wizard::builder().title(title);
    for step in steps {
        builder = builder.add_boxed(step);
    }
    builder.build()?.run(surface, initial).await
}
