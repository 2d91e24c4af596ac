use chrono::{DateTime, Utc};
use log::debug;
use std::rc::Rc;
use yew::Reducible;

use super::errors::{SubmissionError, WizardError};
use super::record::LeadField;
use super::wizard::{LeadWizard, SubmitTicket};

pub enum WizardAction {
    SetField { field: LeadField, value: String },
    Advance,
    Retreat,
    Submit,
    Finish {
        ticket: SubmitTicket,
        outcome: Result<(), SubmissionError>,
        at: DateTime<Utc>,
    },
    DismissError,
    Reset,
}

impl Reducible for LeadWizard {
    type Action = WizardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let result: Result<(), WizardError> = match action {
            WizardAction::SetField { field, value } => next.set_field(field, &value),
            WizardAction::Advance => next.advance().map(|_| ()),
            WizardAction::Retreat => {
                next.retreat();
                Ok(())
            }
            WizardAction::Submit => next.begin_submit().map(|_| ()),
            WizardAction::Finish { ticket, outcome, at } => next.finish_submit(ticket, outcome, at),
            WizardAction::DismissError => {
                next.dismiss_error();
                Ok(())
            }
            WizardAction::Reset => {
                next.reset();
                Ok(())
            }
        };

        match result {
            Ok(()) if next != *self => Rc::new(next),
            Ok(()) => self,
            Err(err) => {
                // Rejected actions keep the previous state so nothing re-renders.
                debug!("Lead wizard rejected action: {}", err);
                self
            }
        }
    }
}
