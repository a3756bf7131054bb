//! The session capability handle steps use to prompt the user.

use crate::error::WizardError;
use crate::signal::{FlowSignal, StepError};
use crate::surface::{PromptItem, PromptSpec, PromptSurface, SelectOutcome, TextOutcome};

/// Capability handle for opening prompt sessions from inside a step.
///
/// The wizard creates a fresh `Prompter` for every step invocation,
/// carrying the display metadata of the step about to run. A step only
/// ever holds this handle for the duration of one invocation; the
/// session itself stays with the surface, owned by the wizard.
///
/// Going back and dismissing arrive as [`FlowSignal`]s on the error
/// channel, so a step forwards them to the wizard with `?`.
pub struct Prompter<'a> {
    surface: &'a mut dyn PromptSurface,
    title: &'a str,
    step: usize,
    total_steps: usize,
}

impl<'a> Prompter<'a> {
    pub(crate) fn new(
        surface: &'a mut dyn PromptSurface,
        title: &'a str,
        step: usize,
        total_steps: usize,
    ) -> Self {
        Self {
            surface,
            title,
            step,
            total_steps,
        }
    }

    /// 1-based number of the running step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Total number of steps in the run.
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// The wizard title shown on every prompt.
    pub fn title(&self) -> &str {
        self.title
    }

    /// Opens a single-select prompt and resolves to the chosen item.
    ///
    /// A "go back" affordance is offered whenever the run has more than
    /// one step. Going back and dismissing the prompt become `Back` and
    /// `Cancel` signals on the error channel.
    ///
    /// # Errors
    ///
    /// Fatal when `items` is empty or when the surface fails.
    pub async fn ask_choice(&mut self, items: &[PromptItem]) -> Result<PromptItem, StepError> {
        if items.is_empty() {
            return Err(WizardError::Configuration(
                "choice prompt requires at least one item".to_string(),
            )
            .into());
        }
        let spec = PromptSpec {
            title: self.title,
            step: self.step,
            total_steps: self.total_steps,
            offer_back: self.total_steps > 1,
        };
        match self.surface.open_select(spec, items).await? {
            SelectOutcome::Picked(index) => items.get(index).cloned().ok_or_else(|| {
                WizardError::Surface(format!("selected index {} out of range", index)).into()
            }),
            SelectOutcome::Back => Err(FlowSignal::back().into()),
            SelectOutcome::Dismissed => Err(FlowSignal::cancel().into()),
        }
    }

    /// Opens a free-text prompt and resolves to the entered text,
    /// verbatim.
    ///
    /// The empty string is a valid submission; whether it is acceptable
    /// is the step's decision. A "go back" affordance is offered from
    /// the second step onward.
    ///
    /// # Errors
    ///
    /// Fatal when the surface fails.
    pub async fn ask_text(&mut self, prompt: &str) -> Result<String, StepError> {
        let spec = PromptSpec {
            title: self.title,
            step: self.step,
            total_steps: self.total_steps,
            offer_back: self.step > 1,
        };
        match self.surface.open_text(spec, prompt).await? {
            TextOutcome::Submitted(text) => Ok(text),
            TextOutcome::Back => Err(FlowSignal::back().into()),
            TextOutcome::Dismissed => Err(FlowSignal::cancel().into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct ScriptedSurface {
        selects: VecDeque<SelectOutcome>,
        texts: VecDeque<TextOutcome>,
        specs: Vec<(usize, usize, bool)>,
    }

    #[async_trait]
    impl PromptSurface for ScriptedSurface {
        async fn open_select(
            &mut self,
            spec: PromptSpec<'_>,
            _items: &[PromptItem],
        ) -> Result<SelectOutcome, WizardError> {
            self.specs.push((spec.step, spec.total_steps, spec.offer_back));
            self.selects
                .pop_front()
                .ok_or_else(|| WizardError::Surface("select script exhausted".to_string()))
        }

        async fn open_text(
            &mut self,
            spec: PromptSpec<'_>,
            _prompt: &str,
        ) -> Result<TextOutcome, WizardError> {
            self.specs.push((spec.step, spec.total_steps, spec.offer_back));
            self.texts
                .pop_front()
                .ok_or_else(|| WizardError::Surface("text script exhausted".to_string()))
        }

        fn notify(&mut self, _message: &str) {}
    }

    #[tokio::test]
    async fn test_ask_choice_resolves_picked_item() {
        let mut surface = ScriptedSurface::default();
        surface.selects.push_back(SelectOutcome::Picked(1));

        let mut prompter = Prompter::new(&mut surface, "Test", 2, 3);
        let items = [PromptItem::new("Small"), PromptItem::new("Large")];
        let item = prompter.ask_choice(&items).await.unwrap();

        assert_eq!(item, PromptItem::new("Large"));
        assert_eq!(surface.specs, vec![(2, 3, true)]);
    }

    #[tokio::test]
    async fn test_ask_choice_maps_back_and_dismiss_to_signals() {
        let mut surface = ScriptedSurface::default();
        surface.selects.push_back(SelectOutcome::Back);
        surface.selects.push_back(SelectOutcome::Dismissed);
        let items = [PromptItem::new("Small"), PromptItem::new("Large")];

        let mut prompter = Prompter::new(&mut surface, "Test", 2, 3);
        let error = prompter.ask_choice(&items).await.unwrap_err();
        assert!(matches!(
            error,
            StepError::Signal(FlowSignal::Back { message: None })
        ));

        let error = prompter.ask_choice(&items).await.unwrap_err();
        assert!(matches!(
            error,
            StepError::Signal(FlowSignal::Cancel { message: None })
        ));
    }

    #[tokio::test]
    async fn test_ask_choice_rejects_empty_items() {
        let mut surface = ScriptedSurface::default();
        let mut prompter = Prompter::new(&mut surface, "Test", 1, 1);

        let error = prompter.ask_choice(&[]).await.unwrap_err();
        assert!(matches!(
            error,
            StepError::Fatal(WizardError::Configuration(_))
        ));
        assert!(surface.specs.is_empty());
    }

    #[tokio::test]
    async fn test_ask_choice_omits_back_for_single_step_run() {
        let mut surface = ScriptedSurface::default();
        surface.selects.push_back(SelectOutcome::Picked(0));

        let mut prompter = Prompter::new(&mut surface, "Test", 1, 1);
        let items = [PromptItem::new("Only")];
        let item = prompter.ask_choice(&items).await.unwrap();

        assert_eq!(item.label, "Only");
        assert_eq!(surface.specs, vec![(1, 1, false)]);
    }

    #[tokio::test]
    async fn test_ask_text_passes_empty_submission_through() {
        let mut surface = ScriptedSurface::default();
        surface.texts.push_back(TextOutcome::Submitted(String::new()));

        let mut prompter = Prompter::new(&mut surface, "Test", 1, 2);
        let answer = prompter.ask_text("Enter your name").await.unwrap();

        assert_eq!(answer, "");
        // First step: no back affordance on text prompts.
        assert_eq!(surface.specs, vec![(1, 2, false)]);
    }

    #[tokio::test]
    async fn test_ask_text_offers_back_after_first_step() {
        let mut surface = ScriptedSurface::default();
        surface.texts.push_back(TextOutcome::Back);

        let mut prompter = Prompter::new(&mut surface, "Test", 2, 2);
        let error = prompter.ask_text("Enter your email").await.unwrap_err();

        assert!(matches!(
            error,
            StepError::Signal(FlowSignal::Back { message: None })
        ));
        assert_eq!(surface.specs, vec![(2, 2, true)]);
    }

    #[tokio::test]
    async fn test_prompter_accessors() {
        let mut surface = ScriptedSurface::default();
        let prompter = Prompter::new(&mut surface, "Order Pizza", 3, 8);
        assert_eq!(prompter.title(), "Order Pizza");
        assert_eq!(prompter.step(), 3);
        assert_eq!(prompter.total_steps(), 8);
    }
}
