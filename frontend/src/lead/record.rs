use serde::Serialize;
use std::borrow::Cow;
use strum::{Display, EnumIter, EnumString};

use super::errors::WizardError;
use super::options::{BusinessType, FundingAmount, FundingNeed, LeadOption, RevenueRange, Timeline};

/// Keys of a [`LeadRecord`], named the way the intake payload names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "camelCase")]
pub enum LeadField {
    FirstName,
    LastName,
    Email,
    Phone,
    BusinessType,
    Revenue,
    FundingNeed,
    FundingAmount,
    Timeline,
    Message,
}

impl LeadField {
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Phone => "Phone Number",
            Self::BusinessType => "Industry",
            Self::Revenue => "Annual Revenue",
            Self::FundingNeed => "Purpose of Funding",
            Self::FundingAmount => "Funding Amount",
            Self::Timeline => "Timeline",
            Self::Message => "Additional Details",
        }
    }

    /// Looks a field up by its payload key, e.g. `"fundingAmount"`.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn from_key(key: &str) -> Result<Self, WizardError> {
        key.parse()
            .map_err(|_| WizardError::UnknownField(key.to_string()))
    }
}

/// Everything a visitor tells us over the course of the wizard.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub business_type: Option<BusinessType>,
    pub revenue: Option<RevenueRange>,
    pub funding_need: Option<FundingNeed>,
    pub funding_amount: Option<FundingAmount>,
    pub timeline: Option<Timeline>,
    pub message: String,
}

fn parse_option<T: LeadOption>(field: LeadField, value: &str) -> Result<Option<T>, WizardError> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<T>()
        .map(Some)
        .map_err(|_| WizardError::InvalidOption {
            field,
            value: value.to_string(),
        })
}

fn option_label<T: LeadOption>(option: Option<T>) -> &'static str {
    option.map(LeadOption::label).unwrap_or("")
}

impl LeadRecord {
    /// Overwrites one field. Enumerated fields only take one of their option
    /// labels (or "" for no selection); a rejected value leaves the record as it was.
    pub fn set(&mut self, field: LeadField, value: &str) -> Result<(), WizardError> {
        match field {
            LeadField::FirstName => self.first_name = value.to_string(),
            LeadField::LastName => self.last_name = value.to_string(),
            LeadField::Email => self.email = value.to_string(),
            LeadField::Phone => self.phone = value.to_string(),
            LeadField::Message => self.message = value.to_string(),
            LeadField::BusinessType => self.business_type = parse_option(field, value)?,
            LeadField::Revenue => self.revenue = parse_option(field, value)?,
            LeadField::FundingNeed => self.funding_need = parse_option(field, value)?,
            LeadField::FundingAmount => self.funding_amount = parse_option(field, value)?,
            LeadField::Timeline => self.timeline = parse_option(field, value)?,
        }
        Ok(())
    }

    pub fn get(&self, field: LeadField) -> Cow<'_, str> {
        match field {
            LeadField::FirstName => Cow::Borrowed(&self.first_name),
            LeadField::LastName => Cow::Borrowed(&self.last_name),
            LeadField::Email => Cow::Borrowed(&self.email),
            LeadField::Phone => Cow::Borrowed(&self.phone),
            LeadField::Message => Cow::Borrowed(&self.message),
            LeadField::BusinessType => Cow::Borrowed(option_label(self.business_type)),
            LeadField::Revenue => Cow::Borrowed(option_label(self.revenue)),
            LeadField::FundingNeed => Cow::Borrowed(option_label(self.funding_need)),
            LeadField::FundingAmount => Cow::Borrowed(option_label(self.funding_amount)),
            LeadField::Timeline => Cow::Borrowed(option_label(self.timeline)),
        }
    }

    /// Presence only: no trimming and no format checks.
    pub fn is_present(&self, field: LeadField) -> bool {
        !self.get(field).is_empty()
    }

    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn sample_value(field: LeadField) -> &'static str {
        match field {
            LeadField::FirstName => "John",
            LeadField::LastName => "Smith",
            LeadField::Email => "john@company.com",
            LeadField::Phone => "(555) 123-4567",
            LeadField::Message => "Looking to close before Q3.",
            LeadField::BusinessType => "Manufacturing",
            LeadField::Revenue => "$1M - $2.5M",
            LeadField::FundingNeed => "Equipment Financing",
            LeadField::FundingAmount => "$250K - $500K",
            LeadField::Timeline => "Soon (1-4 weeks)",
        }
    }

    #[test]
    fn set_then_get_returns_the_value_for_every_field() {
        let mut record = LeadRecord::default();
        for field in LeadField::iter() {
            record.set(field, sample_value(field)).unwrap();
            assert_eq!(record.get(field), sample_value(field), "field {field}");
        }
    }

    #[test]
    fn later_writes_overwrite_earlier_ones() {
        let mut record = LeadRecord::default();
        record.set(LeadField::Revenue, "Under $250K").unwrap();
        record.set(LeadField::Revenue, "$10M+").unwrap();
        assert_eq!(record.revenue, Some(RevenueRange::Over10M));

        record.set(LeadField::Email, "a@b.co").unwrap();
        record.set(LeadField::Email, "").unwrap();
        assert!(!record.is_present(LeadField::Email));
    }

    #[test]
    fn invalid_option_is_rejected_without_touching_the_record() {
        let mut record = LeadRecord::default();
        record.set(LeadField::BusinessType, "Technology").unwrap();

        let err = record.set(LeadField::BusinessType, "Crypto").unwrap_err();
        assert_eq!(
            err,
            WizardError::InvalidOption {
                field: LeadField::BusinessType,
                value: "Crypto".to_string(),
            }
        );
        assert_eq!(record.business_type, Some(BusinessType::Technology));
    }

    #[test]
    fn empty_string_clears_a_selection() {
        let mut record = LeadRecord::default();
        record.set(LeadField::Timeline, "Soon (1-4 weeks)").unwrap();
        record.set(LeadField::Timeline, "").unwrap();
        assert_eq!(record.timeline, None);
        assert_eq!(record.get(LeadField::Timeline), "");
    }

    #[test]
    fn whitespace_counts_as_present() {
        let mut record = LeadRecord::default();
        record.set(LeadField::FirstName, " ").unwrap();
        assert!(record.is_present(LeadField::FirstName));
    }

    #[test]
    fn field_keys_parse() {
        assert_eq!(LeadField::from_key("fundingAmount"), Ok(LeadField::FundingAmount));
        assert_eq!(LeadField::from_key("firstName"), Ok(LeadField::FirstName));
        assert_eq!(
            LeadField::from_key("company"),
            Err(WizardError::UnknownField("company".to_string()))
        );
        assert_eq!(LeadField::BusinessType.to_string(), "businessType");
    }

    #[test]
    fn payload_uses_camel_case_keys_and_option_labels() {
        let mut record = LeadRecord::default();
        record.set(LeadField::FirstName, "John").unwrap();
        record.set(LeadField::FundingAmount, "$1M+").unwrap();

        let payload = serde_json::to_value(&record).unwrap();
        assert_eq!(payload["firstName"], "John");
        assert_eq!(payload["fundingAmount"], "$1M+");
        assert!(payload["timeline"].is_null());
    }

    #[test]
    fn full_name_skips_missing_last_name() {
        let mut record = LeadRecord::default();
        record.set(LeadField::FirstName, "John").unwrap();
        assert_eq!(record.full_name(), "John");
        record.set(LeadField::LastName, "Smith").unwrap();
        assert_eq!(record.full_name(), "John Smith");
    }
}
