//! The lead-capture wizard: four linear steps, each gated on its required
//! fields, ending in a submission that moves through Idle → Pending → Completed.
//!
//! Everything here is synchronous. Waiting on the intake happens outside, and
//! its outcome comes back through [`LeadWizard::finish_submit`] together with
//! the [`SubmitTicket`] handed out when the attempt started.

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::fmt;
use strum::{Display, EnumIter, IntoEnumIterator};

use super::errors::{SubmissionError, WizardError};
use super::record::{LeadField, LeadRecord};

pub const TOTAL_STEPS: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum WizardStep {
    Contact,
    Business,
    #[strum(to_string = "Funding Needs")]
    FundingNeeds,
    Review,
}

impl WizardStep {
    /// 1-based position in the wizard.
    pub fn number(self) -> u8 {
        match self {
            Self::Contact => 1,
            Self::Business => 2,
            Self::FundingNeeds => 3,
            Self::Review => 4,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Contact),
            2 => Some(Self::Business),
            3 => Some(Self::FundingNeeds),
            4 => Some(Self::Review),
            _ => None,
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        Self::from_number(self.number().saturating_sub(1))
    }

    pub fn is_last(self) -> bool {
        self.number() == TOTAL_STEPS
    }

    pub fn required_fields(self) -> &'static [LeadField] {
        match self {
            Self::Contact => &[LeadField::FirstName, LeadField::Email],
            Self::Business => &[LeadField::BusinessType, LeadField::Revenue],
            Self::FundingNeeds => &[
                LeadField::FundingNeed,
                LeadField::FundingAmount,
                LeadField::Timeline,
            ],
            Self::Review => &[],
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Contact => "Let's start with you",
            Self::Business => "About your business",
            Self::FundingNeeds => "Your funding needs",
            Self::Review => "Almost there",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Contact => "How can we reach you?",
            Self::Business => "Help us understand your company",
            Self::FundingNeeds => "What are you looking to accomplish?",
            Self::Review => "Review your information and submit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Pending,
    Completed,
}

/// Identifies one submission attempt. Outcomes carrying an older ticket are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmitTicket(u32);

impl fmt::Display for SubmitTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "submission #{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeadWizard {
    step: WizardStep,
    phase: SubmissionPhase,
    record: LeadRecord,
    attempts: u32,
    last_error: Option<SubmissionError>,
    submitted_at: Option<DateTime<Utc>>,
}

impl Default for LeadWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Contact,
            phase: SubmissionPhase::Idle,
            record: LeadRecord::default(),
            attempts: 0,
            last_error: None,
            submitted_at: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn total_steps(&self) -> u8 {
        TOTAL_STEPS
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn record(&self) -> &LeadRecord {
        &self.record
    }

    pub fn last_error(&self) -> Option<&SubmissionError> {
        self.last_error.as_ref()
    }

    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        self.submitted_at
    }

    pub fn progress_fraction(&self) -> f64 {
        f64::from(self.step.number()) / f64::from(TOTAL_STEPS)
    }

    pub fn progress_percent(&self) -> u8 {
        (self.progress_fraction() * 100.0).round() as u8
    }

    /// The attempt the intake is currently working on, if any.
    pub fn pending_ticket(&self) -> Option<SubmitTicket> {
        match self.phase {
            SubmissionPhase::Pending => Some(SubmitTicket(self.attempts)),
            _ => None,
        }
    }

    fn ensure_editable(&self) -> Result<(), WizardError> {
        match self.phase {
            SubmissionPhase::Idle => Ok(()),
            SubmissionPhase::Pending => Err(WizardError::SubmissionInFlight),
            SubmissionPhase::Completed => Err(WizardError::AlreadySubmitted),
        }
    }

    pub fn set_field(&mut self, field: LeadField, value: &str) -> Result<(), WizardError> {
        self.ensure_editable()?;
        self.record.set(field, value)
    }

    /// Same as [`set_field`](Self::set_field) but addressed by payload key.
    /// String-keyed entry point for callers that only know the key name.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn set_field_by_key(&mut self, key: &str, value: &str) -> Result<(), WizardError> {
        let field = LeadField::from_key(key)?;
        self.set_field(field, value)
    }

    pub fn missing_fields(&self, step: WizardStep) -> Vec<LeadField> {
        step.required_fields()
            .iter()
            .copied()
            .filter(|field| !self.record.is_present(*field))
            .collect()
    }

    pub fn can_advance(&self, step: WizardStep) -> bool {
        step.required_fields()
            .iter()
            .all(|field| self.record.is_present(*field))
    }

    /// Moves to the next step. Staying put on the last step is not an error;
    /// leaving it is what [`begin_submit`](Self::begin_submit) is for.
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        self.ensure_editable()?;
        if !self.can_advance(self.step) {
            return Err(WizardError::StepIncomplete {
                step: self.step,
                missing: self.missing_fields(self.step),
            });
        }
        if let Some(next) = self.step.next() {
            debug!("Lead wizard advancing {} -> {}", self.step, next);
            self.step = next;
        }
        Ok(self.step)
    }

    pub fn retreat(&mut self) -> WizardStep {
        if self.phase != SubmissionPhase::Idle {
            debug!("Ignoring retreat while submission is {:?}", self.phase);
            return self.step;
        }
        if let Some(previous) = self.step.previous() {
            debug!("Lead wizard retreating {} -> {}", self.step, previous);
            self.step = previous;
        }
        self.step
    }

    /// Starts a submission from the review step. Every earlier step is
    /// re-checked since fields stay writable after their step was passed.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, WizardError> {
        self.ensure_editable()?;
        if !self.step.is_last() {
            return Err(WizardError::NotOnReviewStep(self.step));
        }
        if let Some(step) = WizardStep::iter().find(|step| !self.can_advance(*step)) {
            return Err(WizardError::StepIncomplete {
                step,
                missing: self.missing_fields(step),
            });
        }
        self.attempts += 1;
        self.phase = SubmissionPhase::Pending;
        self.last_error = None;
        let ticket = SubmitTicket(self.attempts);
        info!("Lead {} started", ticket);
        Ok(ticket)
    }

    /// Applies the intake's answer. Success freezes the record; failure
    /// returns to the review step with the record intact and the error kept
    /// for display.
    pub fn finish_submit(
        &mut self,
        ticket: SubmitTicket,
        outcome: Result<(), SubmissionError>,
        at: DateTime<Utc>,
    ) -> Result<(), WizardError> {
        if self.pending_ticket() != Some(ticket) {
            return Err(WizardError::StaleSubmission(ticket));
        }
        match outcome {
            Ok(()) => {
                info!("Lead {} completed", ticket);
                self.phase = SubmissionPhase::Completed;
                self.submitted_at = Some(at);
            }
            Err(err) => {
                warn!("Lead {} failed: {}", ticket, err);
                self.phase = SubmissionPhase::Idle;
                self.last_error = Some(err);
            }
        }
        Ok(())
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    /// Starts a fresh lead. The attempt counter survives so that results from
    /// a discarded attempt are recognised as stale.
    pub fn reset(&mut self) {
        debug!("Lead wizard reset");
        *self = Self {
            attempts: self.attempts,
            ..Self::new()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_wizard() -> LeadWizard {
        let mut wizard = LeadWizard::new();
        for (field, value) in [
            (LeadField::FirstName, "John"),
            (LeadField::Email, "john@x.com"),
            (LeadField::BusinessType, "Real Estate"),
            (LeadField::Revenue, "$500K - $1M"),
            (LeadField::FundingNeed, "Working Capital"),
            (LeadField::FundingAmount, "$100K - $250K"),
            (LeadField::Timeline, "Immediately (within 1 week)"),
        ] {
            wizard.set_field(field, value).unwrap();
        }
        wizard
    }

    fn on_review_step() -> LeadWizard {
        let mut wizard = filled_wizard();
        for _ in 0..3 {
            wizard.advance().unwrap();
        }
        wizard
    }

    #[test]
    fn starts_on_first_step_idle_and_empty() {
        let wizard = LeadWizard::new();
        assert_eq!(wizard.step(), WizardStep::Contact);
        assert_eq!(wizard.phase(), SubmissionPhase::Idle);
        assert_eq!(wizard.record(), &LeadRecord::default());
        assert_eq!(wizard.total_steps(), 4);
        assert_eq!(wizard.pending_ticket(), None);
    }

    #[test]
    fn contact_step_needs_first_name_and_email() {
        let mut wizard = LeadWizard::new();
        wizard.set_field(LeadField::FirstName, "John").unwrap();
        wizard.set_field(LeadField::Email, "john@x.com").unwrap();
        assert!(wizard.can_advance(WizardStep::Contact));

        wizard.set_field(LeadField::FirstName, "").unwrap();
        assert!(!wizard.can_advance(WizardStep::Contact));
        assert_eq!(wizard.missing_fields(WizardStep::Contact), vec![LeadField::FirstName]);
    }

    #[test]
    fn optional_fields_do_not_gate() {
        let mut wizard = LeadWizard::new();
        wizard.set_field(LeadField::LastName, "Smith").unwrap();
        wizard.set_field(LeadField::Phone, "555").unwrap();
        assert!(!wizard.can_advance(WizardStep::Contact));
    }

    #[test]
    fn each_step_checks_its_own_fields() {
        let mut wizard = LeadWizard::new();
        assert!(!wizard.can_advance(WizardStep::Business));
        wizard.set_field(LeadField::BusinessType, "Technology").unwrap();
        assert!(!wizard.can_advance(WizardStep::Business));
        wizard.set_field(LeadField::Revenue, "$10M+").unwrap();
        assert!(wizard.can_advance(WizardStep::Business));

        wizard.set_field(LeadField::FundingNeed, "Other").unwrap();
        wizard.set_field(LeadField::FundingAmount, "$1M+").unwrap();
        assert!(!wizard.can_advance(WizardStep::FundingNeeds));
        wizard.set_field(LeadField::Timeline, "Soon (1-4 weeks)").unwrap();
        assert!(wizard.can_advance(WizardStep::FundingNeeds));

        assert!(LeadWizard::new().can_advance(WizardStep::Review));
    }

    #[test]
    fn can_advance_depends_only_on_the_record() {
        let mut wizard = filled_wizard();
        let before = wizard.can_advance(WizardStep::Business);
        wizard.advance().unwrap();
        wizard.retreat();
        for _ in 0..5 {
            assert_eq!(wizard.can_advance(WizardStep::Business), before);
        }
    }

    #[test]
    fn advance_on_empty_record_stays_put() {
        let mut wizard = LeadWizard::new();
        let err = wizard.advance().unwrap_err();
        assert_eq!(
            err,
            WizardError::StepIncomplete {
                step: WizardStep::Contact,
                missing: vec![LeadField::FirstName, LeadField::Email],
            }
        );
        assert_eq!(wizard, LeadWizard::new());
    }

    #[test]
    fn advance_with_partial_fields_never_moves() {
        let partials: [&[(LeadField, &str)]; 3] = [
            &[(LeadField::FirstName, "John")],
            &[(LeadField::Email, "john@x.com")],
            &[(LeadField::LastName, "Smith"), (LeadField::Message, "hi")],
        ];
        for fields in partials {
            let mut wizard = LeadWizard::new();
            for (field, value) in fields {
                wizard.set_field(*field, value).unwrap();
            }
            assert!(wizard.advance().is_err());
            assert_eq!(wizard.step(), WizardStep::Contact);
        }
    }

    #[test]
    fn advance_is_a_no_op_on_the_last_step() {
        let mut wizard = on_review_step();
        assert_eq!(wizard.advance(), Ok(WizardStep::Review));
        assert_eq!(wizard.step(), WizardStep::Review);
    }

    #[test]
    fn retreat_clamps_at_first_step_and_keeps_data() {
        let mut wizard = filled_wizard();
        let record = wizard.record().clone();
        assert_eq!(wizard.retreat(), WizardStep::Contact);

        wizard.advance().unwrap();
        wizard.advance().unwrap();
        assert_eq!(wizard.retreat(), WizardStep::Business);
        assert_eq!(wizard.retreat(), WizardStep::Contact);
        assert_eq!(wizard.retreat(), WizardStep::Contact);
        assert_eq!(wizard.record(), &record);
    }

    #[test]
    fn progress_follows_the_step() {
        let mut wizard = filled_wizard();
        assert_eq!(wizard.progress_fraction(), 0.25);
        assert_eq!(wizard.progress_percent(), 25);
        wizard.advance().unwrap();
        wizard.advance().unwrap();
        assert_eq!(wizard.progress_percent(), 75);
        wizard.advance().unwrap();
        assert_eq!(wizard.progress_fraction(), 1.0);
    }

    #[test]
    fn full_run_reaches_completed_without_stepping_back() {
        let mut wizard = filled_wizard();
        let mut last = wizard.step().number();
        for _ in 0..3 {
            let step = wizard.advance().unwrap();
            assert!(step.number() >= last);
            last = step.number();
        }
        assert_eq!(wizard.step(), WizardStep::Review);

        let ticket = wizard.begin_submit().unwrap();
        assert_eq!(wizard.phase(), SubmissionPhase::Pending);
        assert_eq!(wizard.pending_ticket(), Some(ticket));

        let at = Utc::now();
        wizard.finish_submit(ticket, Ok(()), at).unwrap();
        assert_eq!(wizard.phase(), SubmissionPhase::Completed);
        assert_eq!(wizard.step(), WizardStep::Review);
        assert_eq!(wizard.submitted_at(), Some(at));
    }

    #[test]
    fn submit_rechecks_fields_blanked_on_review() {
        let mut wizard = on_review_step();
        wizard.set_field(LeadField::FirstName, "").unwrap();
        wizard.set_field(LeadField::BusinessType, "").unwrap();

        assert_eq!(
            wizard.begin_submit(),
            Err(WizardError::StepIncomplete {
                step: WizardStep::Contact,
                missing: vec![LeadField::FirstName],
            })
        );
        assert_eq!(wizard.phase(), SubmissionPhase::Idle);
        assert_eq!(wizard.pending_ticket(), None);

        wizard.set_field(LeadField::FirstName, "John").unwrap();
        assert_eq!(
            wizard.begin_submit(),
            Err(WizardError::StepIncomplete {
                step: WizardStep::Business,
                missing: vec![LeadField::BusinessType],
            })
        );

        wizard.set_field(LeadField::BusinessType, "Technology").unwrap();
        assert!(wizard.begin_submit().is_ok());
        assert_eq!(wizard.phase(), SubmissionPhase::Pending);
    }

    #[test]
    fn submit_requires_the_review_step() {
        let mut wizard = filled_wizard();
        assert_eq!(
            wizard.begin_submit(),
            Err(WizardError::NotOnReviewStep(WizardStep::Contact))
        );
        assert_eq!(wizard.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn second_submit_while_pending_changes_nothing() {
        let mut wizard = on_review_step();
        let ticket = wizard.begin_submit().unwrap();
        let snapshot = wizard.clone();

        assert_eq!(wizard.begin_submit(), Err(WizardError::SubmissionInFlight));
        assert_eq!(wizard, snapshot);
        assert_eq!(wizard.pending_ticket(), Some(ticket));
    }

    #[test]
    fn form_is_locked_while_pending() {
        let mut wizard = on_review_step();
        wizard.begin_submit().unwrap();
        assert_eq!(
            wizard.set_field(LeadField::Message, "late edit"),
            Err(WizardError::SubmissionInFlight)
        );
        assert_eq!(wizard.retreat(), WizardStep::Review);
        assert_eq!(wizard.advance(), Err(WizardError::SubmissionInFlight));
    }

    #[test]
    fn completed_lead_rejects_edits() {
        let mut wizard = on_review_step();
        let ticket = wizard.begin_submit().unwrap();
        wizard.finish_submit(ticket, Ok(()), Utc::now()).unwrap();

        assert_eq!(
            wizard.set_field(LeadField::FirstName, "Jane"),
            Err(WizardError::AlreadySubmitted)
        );
        assert_eq!(wizard.record().first_name, "John");
        assert_eq!(wizard.begin_submit(), Err(WizardError::AlreadySubmitted));
        assert_eq!(wizard.phase(), SubmissionPhase::Completed);
    }

    #[test]
    fn failed_submission_returns_to_idle_with_record_intact() {
        let mut wizard = on_review_step();
        let record = wizard.record().clone();
        let ticket = wizard.begin_submit().unwrap();

        let err = SubmissionError::TimedOut { after_ms: 10_000 };
        wizard.finish_submit(ticket, Err(err.clone()), Utc::now()).unwrap();

        assert_eq!(wizard.phase(), SubmissionPhase::Idle);
        assert_eq!(wizard.step(), WizardStep::Review);
        assert_eq!(wizard.last_error(), Some(&err));
        assert_eq!(wizard.record(), &record);

        let retry = wizard.begin_submit().unwrap();
        assert_ne!(retry, ticket);
        assert_eq!(wizard.last_error(), None);
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut wizard = on_review_step();
        let first = wizard.begin_submit().unwrap();
        wizard
            .finish_submit(first, Err(SubmissionError::Rejected("busy".into())), Utc::now())
            .unwrap();
        let second = wizard.begin_submit().unwrap();

        assert_eq!(
            wizard.finish_submit(first, Ok(()), Utc::now()),
            Err(WizardError::StaleSubmission(first))
        );
        assert_eq!(wizard.phase(), SubmissionPhase::Pending);
        assert_eq!(wizard.pending_ticket(), Some(second));
    }

    #[test]
    fn reset_discards_the_lead_and_outdates_its_ticket() {
        let mut wizard = on_review_step();
        let ticket = wizard.begin_submit().unwrap();
        wizard.reset();

        assert_eq!(wizard.step(), WizardStep::Contact);
        assert_eq!(wizard.phase(), SubmissionPhase::Idle);
        assert_eq!(wizard.record(), &LeadRecord::default());
        assert_eq!(
            wizard.finish_submit(ticket, Ok(()), Utc::now()),
            Err(WizardError::StaleSubmission(ticket))
        );
        assert_eq!(wizard.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn set_field_by_key_routes_to_the_field() {
        let mut wizard = LeadWizard::new();
        wizard.set_field_by_key("firstName", "Jane").unwrap();
        assert_eq!(wizard.record().first_name, "Jane");
        assert_eq!(
            wizard.set_field_by_key("nickname", "JJ"),
            Err(WizardError::UnknownField("nickname".to_string()))
        );
    }

    #[test]
    fn step_numbers_round_trip() {
        assert_eq!(WizardStep::from_number(0), None);
        assert_eq!(WizardStep::from_number(5), None);
        assert_eq!(WizardStep::Contact.previous(), None);
        assert_eq!(WizardStep::Review.next(), None);
        assert_eq!(WizardStep::FundingNeeds.to_string(), "Funding Needs");
    }
}
