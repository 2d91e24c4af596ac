use serde::{Serialize, Serializer};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// A closed set of choices offered by one of the wizard's selection grids.
///
/// The label is both what the visitor sees and what gets stored, so parsing a
/// label always gives back the variant it came from.
pub trait LeadOption: Copy + PartialEq + IntoEnumIterator + Into<&'static str> + FromStr {
    fn label(self) -> &'static str {
        self.into()
    }

    fn labels() -> Vec<&'static str> {
        Self::iter().map(Self::label).collect()
    }
}

macro_rules! lead_options {
    ($($ty:ty),+ $(,)?) => {$(
        impl LeadOption for $ty {}

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }
    )+};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, IntoStaticStr)]
pub enum BusinessType {
    #[strum(serialize = "Construction / Contracting")]
    Construction,
    #[strum(serialize = "Healthcare / Medical")]
    Healthcare,
    #[strum(serialize = "Professional Services")]
    ProfessionalServices,
    #[strum(serialize = "Retail / E-commerce")]
    Retail,
    #[strum(serialize = "Manufacturing")]
    Manufacturing,
    #[strum(serialize = "Transportation / Logistics")]
    Transportation,
    #[strum(serialize = "Restaurant / Hospitality")]
    Hospitality,
    #[strum(serialize = "Technology")]
    Technology,
    #[strum(serialize = "Real Estate")]
    RealEstate,
    #[strum(serialize = "Other")]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, IntoStaticStr)]
pub enum RevenueRange {
    #[strum(serialize = "Under $250K")]
    Under250K,
    #[strum(serialize = "$250K - $500K")]
    From250KTo500K,
    #[strum(serialize = "$500K - $1M")]
    From500KTo1M,
    #[strum(serialize = "$1M - $2.5M")]
    From1MTo2_5M,
    #[strum(serialize = "$2.5M - $5M")]
    From2_5MTo5M,
    #[strum(serialize = "$5M - $10M")]
    From5MTo10M,
    #[strum(serialize = "$10M+")]
    Over10M,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, IntoStaticStr)]
pub enum FundingNeed {
    #[strum(serialize = "Working Capital")]
    WorkingCapital,
    #[strum(serialize = "Equipment Financing")]
    EquipmentFinancing,
    #[strum(serialize = "Real Estate / Property")]
    RealEstate,
    #[strum(serialize = "Business Acquisition")]
    Acquisition,
    #[strum(serialize = "Expansion / Growth")]
    Expansion,
    #[strum(serialize = "Debt Refinancing")]
    DebtRefinancing,
    #[strum(serialize = "Inventory / Supplies")]
    Inventory,
    #[strum(serialize = "Other")]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, IntoStaticStr)]
pub enum FundingAmount {
    #[strum(serialize = "$25K - $50K")]
    From25KTo50K,
    #[strum(serialize = "$50K - $100K")]
    From50KTo100K,
    #[strum(serialize = "$100K - $250K")]
    From100KTo250K,
    #[strum(serialize = "$250K - $500K")]
    From250KTo500K,
    #[strum(serialize = "$500K - $1M")]
    From500KTo1M,
    #[strum(serialize = "$1M+")]
    Over1M,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, IntoStaticStr)]
pub enum Timeline {
    #[strum(serialize = "Immediately (within 1 week)")]
    Immediately,
    #[strum(serialize = "Soon (1-4 weeks)")]
    Soon,
    #[strum(serialize = "Planning ahead (1-3 months)")]
    PlanningAhead,
    #[strum(serialize = "Exploring options (3+ months)")]
    Exploring,
}

lead_options!(BusinessType, RevenueRange, FundingNeed, FundingAmount, Timeline);
