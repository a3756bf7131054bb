//! Line-oriented terminal implementation of [`PromptSurface`].
//!
//! Renders each session as plain text on stdout and reads replies from
//! stdin. Reads run on the blocking thread pool so the wizard's async
//! loop is never parked on terminal input.
//!
//! Reply grammar:
//!
//! - choice prompts: the item number, `b` to go back (when offered),
//!   `q` to dismiss
//! - text prompts: the answer verbatim, `:back` (when offered),
//!   `:cancel` to dismiss
//! - end of input (ctrl-d) dismisses the session

use crate::error::WizardError;
use crate::surface::{PromptItem, PromptSpec, PromptSurface, SelectOutcome, TextOutcome};
use async_trait::async_trait;
use std::io::{self, BufRead, Write};

/// A [`PromptSurface`] for plain terminals.
///
/// Every session resolves before `open_select`/`open_text` returns, so
/// there is never a still-open session to lock or dispose; `set_busy`
/// and `dispose` keep their no-op defaults.
#[derive(Debug, Default)]
pub struct ConsoleSurface;

impl ConsoleSurface {
    /// Creates a new console surface.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PromptSurface for ConsoleSurface {
    async fn open_select(
        &mut self,
        spec: PromptSpec<'_>,
        items: &[PromptItem],
    ) -> Result<SelectOutcome, WizardError> {
        render_header(&spec);
        for (index, item) in items.iter().enumerate() {
            println!("  {}. {}", index + 1, item);
        }
        let hint = if spec.offer_back {
            "Choose a number, 'b' to go back, 'q' to quit"
        } else {
            "Choose a number, 'q' to quit"
        };
        loop {
            print!("{}: ", hint);
            flush_stdout()?;
            let line = match read_line().await? {
                Some(line) => line,
                None => return Ok(SelectOutcome::Dismissed),
            };
            match parse_select(&line, items.len(), spec.offer_back) {
                Some(outcome) => return Ok(outcome),
                None => println!("Please enter a number between 1 and {}.", items.len()),
            }
        }
    }

    async fn open_text(
        &mut self,
        spec: PromptSpec<'_>,
        prompt: &str,
    ) -> Result<TextOutcome, WizardError> {
        render_header(&spec);
        println!("{}", prompt);
        if spec.offer_back {
            println!("(':back' returns to the previous step, ':cancel' quits)");
        }
        print!("> ");
        flush_stdout()?;
        match read_line().await? {
            Some(line) => Ok(parse_text(line, spec.offer_back)),
            None => Ok(TextOutcome::Dismissed),
        }
    }

    fn notify(&mut self, message: &str) {
        println!("[!] {}", message);
    }
}

fn render_header(spec: &PromptSpec<'_>) {
    if spec.title.is_empty() {
        println!("-- step {}/{} --", spec.step, spec.total_steps);
    } else {
        println!("-- {} (step {}/{}) --", spec.title, spec.step, spec.total_steps);
    }
}

fn flush_stdout() -> Result<(), WizardError> {
    io::stdout()
        .flush()
        .map_err(|e| WizardError::Surface(e.to_string()))
}

/// Reads one line from stdin without blocking the async runtime.
/// `None` means end of input.
async fn read_line() -> Result<Option<String>, WizardError> {
    tokio::task::spawn_blocking(|| {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => {
                while line.ends_with('\n') || line.ends_with('\r') {
                    line.pop();
                }
                Ok(Some(line))
            }
            Err(e) => Err(WizardError::Surface(e.to_string())),
        }
    })
    .await
    .map_err(|e| WizardError::Surface(e.to_string()))?
}

fn parse_select(line: &str, item_count: usize, offer_back: bool) -> Option<SelectOutcome> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") {
        return Some(SelectOutcome::Dismissed);
    }
    if offer_back && trimmed.eq_ignore_ascii_case("b") {
        return Some(SelectOutcome::Back);
    }
    match trimmed.parse::<usize>() {
        Ok(n) if n >= 1 && n <= item_count => Some(SelectOutcome::Picked(n - 1)),
        _ => None,
    }
}

fn parse_text(line: String, offer_back: bool) -> TextOutcome {
    if offer_back && line == ":back" {
        return TextOutcome::Back;
    }
    if line == ":cancel" {
        return TextOutcome::Dismissed;
    }
    // Everything else is the answer, verbatim. Emptiness is the step's
    // concern, not the surface's.
    TextOutcome::Submitted(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_select_numbers() {
        assert_eq!(parse_select("2", 3, false), Some(SelectOutcome::Picked(1)));
        assert_eq!(parse_select(" 1 ", 3, false), Some(SelectOutcome::Picked(0)));
        assert_eq!(parse_select("0", 3, false), None);
        assert_eq!(parse_select("4", 3, false), None);
        assert_eq!(parse_select("two", 3, false), None);
    }

    #[test]
    fn test_parse_select_commands() {
        assert_eq!(parse_select("q", 3, false), Some(SelectOutcome::Dismissed));
        assert_eq!(parse_select("Q", 3, true), Some(SelectOutcome::Dismissed));
        assert_eq!(parse_select("b", 3, true), Some(SelectOutcome::Back));
        // Back is only a command when the affordance is offered.
        assert_eq!(parse_select("b", 3, false), None);
    }

    #[test]
    fn test_parse_text_verbatim() {
        assert_eq!(
            parse_text("123 Main St".to_string(), true),
            TextOutcome::Submitted("123 Main St".to_string())
        );
        assert_eq!(
            parse_text(String::new(), true),
            TextOutcome::Submitted(String::new())
        );
        // Leading/trailing whitespace is preserved.
        assert_eq!(
            parse_text("  spaced  ".to_string(), false),
            TextOutcome::Submitted("  spaced  ".to_string())
        );
    }

    #[test]
    fn test_parse_text_commands() {
        assert_eq!(parse_text(":back".to_string(), true), TextOutcome::Back);
        assert_eq!(parse_text(":cancel".to_string(), true), TextOutcome::Dismissed);
        assert_eq!(parse_text(":cancel".to_string(), false), TextOutcome::Dismissed);
        // Without the affordance, ':back' is just text.
        assert_eq!(
            parse_text(":back".to_string(), false),
            TextOutcome::Submitted(":back".to_string())
        );
    }
}
