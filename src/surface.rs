//! The prompt surface boundary: session metadata, items, outcomes, and
//! the surface trait the wizard drives.

use crate::error::WizardError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display metadata for one prompt session.
///
/// `step` and `total_steps` are 1-based and display-only: surfaces
/// render them as progress (e.g. `step 2/7`) and must not derive
/// behavior from them beyond honoring `offer_back`, which the wizard
/// computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptSpec<'a> {
    /// Wizard title shown on every prompt of the run
    pub title: &'a str,
    /// 1-based number of the step about to run
    pub step: usize,
    /// Total number of steps in the run
    pub total_steps: usize,
    /// Whether the session offers a "go back" affordance
    pub offer_back: bool,
}

/// One selectable entry in a choice prompt.
///
/// # Examples
///
/// ```
/// use annai::PromptItem;
///
/// let plain = PromptItem::new("Hand Tossed");
/// assert_eq!(plain.to_string(), "Hand Tossed");
///
/// let priced = PromptItem::with_detail("Large (14\")", "$15.99");
/// assert_eq!(priced.to_string(), "Large (14\") - $15.99");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptItem {
    /// Primary text shown in the list
    pub label: String,
    /// Optional secondary text, e.g. a price or an explanation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl PromptItem {
    /// Creates an item with a label only.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: None,
        }
    }

    /// Creates an item with a label and secondary text.
    pub fn with_detail(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: Some(detail.into()),
        }
    }
}

impl fmt::Display for PromptItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{} - {}", self.label, detail),
            None => write!(f, "{}", self.label),
        }
    }
}

impl From<&str> for PromptItem {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for PromptItem {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

/// Outcome of a single-select session. Exactly one per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The user activated the item at this index
    Picked(usize),
    /// The user activated the "go back" affordance
    Back,
    /// The session was dismissed without a selection
    Dismissed,
}

/// Outcome of a free-text session. Exactly one per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextOutcome {
    /// The user submitted this text, verbatim.
    ///
    /// May be empty: whether an empty answer is acceptable is the
    /// step's decision, not the surface's.
    Submitted(String),
    /// The user activated the "go back" affordance
    Back,
    /// The session was dismissed without submitting
    Dismissed,
}

/// The interactive widget layer a wizard drives but does not implement.
///
/// A surface shows at most one session at a time. The contract:
///
/// - every opened session produces exactly one outcome
/// - all per-session resources are released before the opening call
///   returns or errors
/// - opening a new session first disposes any session the same run
///   still has open
///
/// [`ConsoleSurface`](crate::ConsoleSurface) is the built-in terminal
/// implementation; tests drive the wizard with scripted surfaces.
#[async_trait]
pub trait PromptSurface: Send {
    /// Opens a single-select list session and waits for its outcome.
    async fn open_select(
        &mut self,
        spec: PromptSpec<'_>,
        items: &[PromptItem],
    ) -> Result<SelectOutcome, WizardError>;

    /// Opens a free-text session and waits for its outcome.
    async fn open_text(
        &mut self,
        spec: PromptSpec<'_>,
        prompt: &str,
    ) -> Result<TextOutcome, WizardError>;

    /// Marks the open session disabled and busy while the wizard works.
    ///
    /// Called before every step except the first, so a step never
    /// observes a stale interactive session. Surfaces whose sessions
    /// resolve before `open_*` returns may keep the default no-op.
    fn set_busy(&mut self, _busy: bool) {}

    /// Disposes the open session, if any.
    ///
    /// Called once when the run ends, on every exit path (normal
    /// completion, cancellation, early exit, and fatal failure).
    fn dispose(&mut self) {}

    /// Shows a non-blocking notice carried by a flow signal.
    fn notify(&mut self, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_item_display() {
        assert_eq!(PromptItem::new("Thin Crust").to_string(), "Thin Crust");
        assert_eq!(
            PromptItem::with_detail("Small (10\")", "$11.99").to_string(),
            "Small (10\") - $11.99"
        );
    }

    #[test]
    fn test_prompt_item_from() {
        let item: PromptItem = "Rust".into();
        assert_eq!(item, PromptItem::new("Rust"));

        let item: PromptItem = String::from("Go").into();
        assert_eq!(item.label, "Go");
        assert_eq!(item.detail, None);
    }

    #[test]
    fn test_prompt_spec_is_display_only_data() {
        let spec = PromptSpec {
            title: "Order Pizza",
            step: 2,
            total_steps: 7,
            offer_back: true,
        };
        let copy = spec;
        assert_eq!(spec, copy);
    }
}
