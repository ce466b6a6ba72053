pub mod validation;

pub use validation::{validate_curve_creation, validate_helper_spec, HELPER_TYPE_KEY};
