//! Onboarding wizard step machine.
//!
//! The wizard nominally has four steps. In the terminal semester the OEHM
//! selection step is hidden, so steps 2 and 4 become adjacent. The current
//! step is persisted per user so a returning session resumes instead of
//! restarting.

use serde::{Deserialize, Serialize};

use crate::catalog::Semester;
use crate::error::CoreError;

/// Minimum step number (1-based).
pub const MIN_STEP: u8 = 1;

/// Maximum step number (1-based).
pub const MAX_STEP: u8 = 4;

/// The steps of the onboarding wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Roll number, branch, and semester entry.
    Details,
    /// OET course selection.
    OetSelection,
    /// OEHM course selection. Hidden in the terminal semester.
    OehmSelection,
    /// Selection summary and submission.
    Summary,
}

impl WizardStep {
    /// Convert a 1-based step number to a `WizardStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::Details),
            2 => Ok(Self::OetSelection),
            3 => Ok(Self::OehmSelection),
            4 => Ok(Self::Summary),
            _ => Err(CoreError::Validation(format!(
                "Invalid step number {n}. Must be between {MIN_STEP} and {MAX_STEP}"
            ))),
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::Details => 1,
            Self::OetSelection => 2,
            Self::OehmSelection => 3,
            Self::Summary => 4,
        }
    }

    /// Human-readable label for the step.
    pub fn label(self) -> &'static str {
        match self {
            Self::Details => "Academic Details",
            Self::OetSelection => "OET Selection",
            Self::OehmSelection => "OEHM Selection",
            Self::Summary => "Summary",
        }
    }
}

/// Whether a step is shown for the given semester. Before the semester is
/// known (step 1 not yet submitted) every step is considered visible.
pub fn is_step_visible(step: u8, semester: Option<Semester>) -> bool {
    match semester {
        Some(s) if s.is_terminal() => step != WizardStep::OehmSelection.to_number(),
        _ => true,
    }
}

/// Number of steps visible for the given semester.
pub fn visible_steps(semester: Option<Semester>) -> u8 {
    match semester {
        Some(s) if s.is_terminal() => MAX_STEP - 1,
        _ => MAX_STEP,
    }
}

/// Validate a step transition.
///
/// A transition is valid when the target is the adjacent visible step in
/// either direction. Hidden steps are skipped over, so in the terminal
/// semester step 2 and step 4 are adjacent. Jumps of more than one
/// visible step are rejected.
pub fn validate_step_transition(
    current: u8,
    next: u8,
    semester: Option<Semester>,
) -> Result<(), CoreError> {
    if !(MIN_STEP..=MAX_STEP).contains(&current) {
        return Err(CoreError::Validation(format!(
            "Current step {current} is out of range ({MIN_STEP}..{MAX_STEP})"
        )));
    }
    if !(MIN_STEP..=MAX_STEP).contains(&next) {
        return Err(CoreError::Validation(format!(
            "Next step {next} is out of range ({MIN_STEP}..{MAX_STEP})"
        )));
    }
    if !is_step_visible(next, semester) {
        return Err(CoreError::Validation(format!(
            "Step {next} is not available in this semester"
        )));
    }

    let sequence: Vec<u8> = (MIN_STEP..=MAX_STEP)
        .filter(|&s| is_step_visible(s, semester))
        .collect();
    let pos = |step: u8| sequence.iter().position(|&s| s == step);

    match (pos(current), pos(next)) {
        (Some(a), Some(b)) if a.abs_diff(b) == 1 => Ok(()),
        _ => Err(CoreError::Validation(format!(
            "Cannot transition from step {current} to step {next}. \
             Must advance or go back exactly one step."
        ))),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
