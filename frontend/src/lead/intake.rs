use chrono::Utc;
use futures::future::{self, AbortRegistration, Abortable, Either};
use futures::pin_mut;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use std::future::Future;

use super::actions::WizardAction;
use super::errors::SubmissionError;
use super::record::LeadRecord;
use super::wizard::SubmitTicket;

/// Stand-in for the advisors' intake endpoint. It builds the payload a real
/// endpoint would receive, waits `delay_ms` and reports success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedIntake {
    pub delay_ms: u32,
    pub timeout_ms: u32,
}

impl SimulatedIntake {
    pub async fn submit(&self, record: LeadRecord) -> Result<(), SubmissionError> {
        let payload = serde_json::to_string(&record)
            .map_err(|e| SubmissionError::Rejected(e.to_string()))?;
        debug!("Lead intake payload ({} bytes): {}", payload.len(), payload);

        within_deadline(
            TimeoutFuture::new(self.delay_ms),
            TimeoutFuture::new(self.timeout_ms),
            self.timeout_ms,
        )
        .await?;

        info!("Lead intake accepted {}", record.full_name());
        Ok(())
    }
}

/// Resolves with `delivery`'s output unless `deadline` fires first.
pub async fn within_deadline<D, T>(
    delivery: D,
    deadline: T,
    timeout_ms: u32,
) -> Result<D::Output, SubmissionError>
where
    D: Future,
    T: Future,
{
    pin_mut!(delivery);
    pin_mut!(deadline);
    match future::select(delivery, deadline).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(SubmissionError::TimedOut { after_ms: timeout_ms }),
    }
}

/// Waits on `delivery` for the attempt behind `ticket` and turns its outcome
/// into the action that settles it. Yields nothing once `registration` is
/// aborted, so a torn-down page never hears back.
pub async fn settle_submission<F>(
    ticket: SubmitTicket,
    delivery: F,
    registration: AbortRegistration,
) -> Option<WizardAction>
where
    F: Future<Output = Result<(), SubmissionError>>,
{
    match Abortable::new(delivery, registration).await {
        Ok(outcome) => Some(WizardAction::Finish {
            ticket,
            outcome,
            at: Utc::now(),
        }),
        Err(_) => {
            debug!("{} aborted", ticket);
            None
        }
    }
}
