//! # Annai (案内)
//!
//! An interactive multi-step wizard engine for Rust.
//!
//! The name "Annai" (案内) means "guidance" in Japanese: the engine
//! guides a user through an ordered sequence of prompts, collecting a
//! partially-filled result along the way.
//!
//! ## Features
//!
//! - **Resumable control flow**: steps redirect the cursor with
//!   [`FlowSignal`]s to go back one step, retry the current step after
//!   a validation failure, or cancel the whole run
//! - **Type-safe**: the accumulated state is your own type, threaded by
//!   value through [`Step`] implementations; [`StepName`] newtypes keep
//!   logs and errors honest
//! - **Async First**: built with `async-trait`; steps may await domain
//!   work (lookups, pricing) around their prompts
//! - **Swappable prompt surface**: the interactive widget layer is a
//!   trait ([`PromptSurface`]); a line-oriented [`ConsoleSurface`] ships
//!   in the box, and tests script entire runs with surface doubles
//! - **Error Handling**: structured fatal errors with `thiserror`, kept
//!   strictly apart from flow control
//!
//! ## Quick Start
//!
//! ```no_run
//! use annai::prelude::*;
//! use async_trait::async_trait;
//!
//! #[derive(Debug, Clone, Default)]
//! struct Signup {
//!     name: Option<String>,
//!     plan: Option<String>,
//! }
//!
//! define_step!(GetName);
//!
//! #[async_trait]
//! impl Step<Signup> for GetName {
//!     async fn run(&self, input: &mut Prompter<'_>, state: &Signup) -> StepResult<Signup> {
//!         let answer = input.ask_text("Enter your name").await?;
//!         if answer.is_empty() {
//!             return Err(FlowSignal::resume_with("Cannot be blank").into());
//!         }
//!         Ok(Signup {
//!             name: Some(answer),
//!             ..state.clone()
//!         })
//!     }
//! }
//!
//! define_step!(PickPlan);
//!
//! #[async_trait]
//! impl Step<Signup> for PickPlan {
//!     async fn run(&self, input: &mut Prompter<'_>, state: &Signup) -> StepResult<Signup> {
//!         let plans = [PromptItem::new("Free"), PromptItem::new("Pro")];
//!         let plan = input.ask_choice(&plans).await?;
//!         Ok(Signup {
//!             plan: Some(plan.label),
//!             ..state.clone()
//!         })
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), WizardError> {
//!     let wizard = Wizard::builder()
//!         .title("Sign Up")
//!         .add_step(GetName)
//!         .add_step(PickPlan)
//!         .build()?;
//!
//!     let mut surface = ConsoleSurface::new();
//!     let signup = wizard.run(&mut surface, Signup::default()).await?;
//!
//!     match (signup.name, signup.plan) {
//!         (Some(name), Some(plan)) => println!("Welcome, {}! ({})", name, plan),
//!         _ => println!("Signup abandoned."),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Flow control
//!
//! A step reports flow control through its error channel, so `?` does
//! the right thing: a prompt dismissed by the user becomes a `Cancel`
//! signal, the back affordance becomes `Back`, and the step's own
//! validation can raise `Resume`:
//!
//! ```
//! use annai::{FlowSignal, StepError};
//!
//! fn require_non_empty(answer: String) -> Result<String, StepError> {
//!     if answer.is_empty() {
//!         return Err(FlowSignal::resume_with("Cannot be blank").into());
//!     }
//!     Ok(answer)
//! }
//!
//! assert!(require_non_empty(String::new()).is_err());
//! assert!(require_non_empty("ok".to_string()).is_ok());
//! ```
//!
//! The wizard consumes signals and moves its cursor: `Back` re-executes
//! the previous step, `Resume` re-executes the current one, `Cancel`
//! ends the run. Everything else aborts the run as a fatal
//! [`WizardError`].
//!
//! ## Cancellation and partial results
//!
//! A cancelled run is not an error: [`Wizard::run`] returns whatever
//! state was accumulated before the cancelling step. Callers decide
//! whether the result is complete enough to act on.

mod console;
mod error;
mod prompter;
mod signal;
mod step;
mod surface;
mod wizard;

pub mod prelude;

pub use console::ConsoleSurface;
pub use error::WizardError;
pub use prompter::Prompter;
pub use signal::{FlowSignal, StepError};
pub use step::{Step, StepName, StepResult};
pub use surface::{PromptItem, PromptSpec, PromptSurface, SelectOutcome, TextOutcome};
pub use wizard::{collect_inputs, Wizard, WizardBuilder};

/// Macro to define a step with minimal boilerplate
///
/// This macro creates a step struct with:
/// - `const NAME: &'static str` - compile-time step name
/// - `Debug` derive
/// - `Default` implementation
///
/// # Example
///
/// ```rust
/// use annai::define_step;
///
/// define_step!(GetEmail);
/// assert_eq!(GetEmail::NAME, "GetEmail");
/// ```
#[macro_export]
macro_rules! define_step {
    ($name:ident) => {
        #[derive(Debug)]
        pub struct $name;

        impl $name {
            /// Step name as a compile-time constant
            #[allow(dead_code)]
            pub const NAME: &'static str = stringify!($name);
        }

        impl Default for $name {
            fn default() -> Self {
                Self
            }
        }
    };
}
