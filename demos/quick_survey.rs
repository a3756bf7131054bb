//! Minimal two-step wizard: a name and a favorite language.

use annai::prelude::*;
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
struct Survey {
    name: Option<String>,
    language: Option<String>,
}

define_step!(GetName);

#[async_trait]
impl Step<Survey> for GetName {
    async fn run(&self, input: &mut Prompter<'_>, state: &Survey) -> StepResult<Survey> {
        let answer = input.ask_text("What is your name?").await?;
        if answer.is_empty() {
            return Err(FlowSignal::resume_with("Cannot be blank").into());
        }
        Ok(Survey {
            name: Some(answer),
            ..state.clone()
        })
    }
}

define_step!(PickLanguage);

#[async_trait]
impl Step<Survey> for PickLanguage {
    async fn run(&self, input: &mut Prompter<'_>, state: &Survey) -> StepResult<Survey> {
        let languages = [
            PromptItem::new("Rust"),
            PromptItem::new("TypeScript"),
            PromptItem::new("Python"),
        ];
        let choice = input.ask_choice(&languages).await?;
        Ok(Survey {
            language: Some(choice.label),
            ..state.clone()
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), WizardError> {
    tracing_subscriber::fmt::init();

    let wizard = Wizard::builder()
        .title("Quick Survey")
        .add_step(GetName)
        .add_step(PickLanguage)
        .build()?;

    let mut surface = ConsoleSurface::new();
    let survey = wizard.run(&mut surface, Survey::default()).await?;

    match (survey.name, survey.language) {
        (Some(name), Some(language)) => println!("Thanks {}! Enjoy {}.", name, language),
        _ => println!("Survey abandoned."),
    }

    Ok(())
}
