pub mod actions;
pub mod errors;
pub mod intake;
pub mod options;
pub mod record;
pub mod wizard;

pub use actions::WizardAction;
pub use intake::SimulatedIntake;
pub use options::{BusinessType, FundingAmount, FundingNeed, LeadOption, RevenueRange, Timeline};
pub use record::{LeadField, LeadRecord};
pub use wizard::{LeadWizard, SubmissionPhase, SubmitTicket, WizardStep};
