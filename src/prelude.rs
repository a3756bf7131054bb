//! Commonly used types and traits

pub use crate::console::ConsoleSurface;
pub use crate::define_step;
pub use crate::error::WizardError;
pub use crate::prompter::Prompter;
pub use crate::signal::{FlowSignal, StepError};
pub use crate::step::{Step, StepName, StepResult};
pub use crate::surface::{PromptItem, PromptSpec, PromptSurface, SelectOutcome, TextOutcome};
pub use crate::wizard::{collect_inputs, Wizard, WizardBuilder};
