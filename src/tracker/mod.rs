pub mod constants;
pub mod projection;
pub mod reconcile;
pub mod status;
pub mod units;

pub use constants::*;
pub use projection::project;
pub use reconcile::{actual_days_elapsed, classify_variance, reconcile};
pub use status::{days_difference_message, expected_days_to_deplete, status_label};
pub use units::{from_grams, to_grams, MassUnit};
