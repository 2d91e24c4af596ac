use thiserror::Error;

use super::record::LeadField;
use super::wizard::{SubmitTicket, WizardStep};

/// Why a wizard operation refused to change state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("{step} step is missing {}", field_list(.missing))]
    StepIncomplete {
        step: WizardStep,
        missing: Vec<LeadField>,
    },

    #[error("{value:?} is not a valid choice for {field}")]
    InvalidOption { field: LeadField, value: String },

    // Only raised by the string-keyed setField entry point.
    #[cfg_attr(not(test), allow(dead_code))]
    #[error("unknown lead field {0:?}")]
    UnknownField(String),

    #[error("not on the review step (currently on {0})")]
    NotOnReviewStep(WizardStep),

    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error("this lead has already been submitted")]
    AlreadySubmitted,

    #[error("result for {0} no longer applies")]
    StaleSubmission(SubmitTicket),
}

/// Failures reported by the lead intake.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("the request timed out after {after_ms}ms")]
    TimedOut { after_ms: u32 },

    #[error("the request was rejected: {0}")]
    Rejected(String),
}

fn field_list(fields: &[LeadField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}
