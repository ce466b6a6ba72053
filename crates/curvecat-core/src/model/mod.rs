pub mod conventions;
pub mod curve;
pub mod helper;

pub use conventions::{DayCounter, HelperKind};
pub use curve::{Curve, CurveId, CurveRecord, CurveSpec, CurveSummary, DeletionReport};
pub use helper::{ConfigEntry, Helper, HelperConfig, HelperId, HelperRecord, HelperSpec};
