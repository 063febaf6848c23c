pub mod estimate;
pub mod fee_schedule;
pub mod json;
pub mod permit_catalog;

pub use estimate::{EstimateForm, EstimateSummary, FeeLine, FixtureCounts, ProjectInput, TradeFlags};
pub use fee_schedule::{schedule_for_estimate, FeeSchedule, FeeScheduleView, UnitFees, ValuationTier};
pub use permit_catalog::{PermitCatalogView, PermitRow};
