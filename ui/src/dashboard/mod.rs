mod header;
pub use header::DashboardHeader;

mod stats;
pub use stats::OverallStatsCard;

mod insight;
pub use insight::CoachInsightCard;

mod topics;
pub use topics::TopicBreakdownList;

mod deep_dive;
pub use deep_dive::DeepDiveTable;

mod charts;
pub use charts::AccuracyCharts;

mod actions;
pub use actions::QuickActions;

use crate::core::acquire::{self, AcquisitionError};
use crate::core::summary::PerformanceSummary;

/// Lifecycle of the single render pass triggered at page load. Both
/// `Rendered` and `Error` are terminal; the input cannot change without a
/// full page reload.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    Loading,
    Rendered(PerformanceSummary),
    Error(AcquisitionError),
}

impl DashboardState {
    /// Run acquisition and normalization against the current page URL.
    pub fn load() -> Self {
        match acquire::current_location() {
            Ok(raw) => Self::Rendered(raw.normalize()),
            Err(err) => {
                log::error!("payload acquisition failed: {err}");
                Self::Error(err)
            }
        }
    }
}
