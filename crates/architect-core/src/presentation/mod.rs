//! Deterministic display rules for a build, the dashboard view model, and
//! the bounded history of recent builds.

pub mod derive;
pub mod history;
pub mod view;

pub use derive::{Accent, AttunementRow, Badge, InvestmentTile, ProgressionMarker, StatTile};
pub use history::{BuildHistory, HISTORY_CAPACITY};
pub use view::BuildView;
