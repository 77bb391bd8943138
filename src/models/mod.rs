pub mod entry;
pub mod report;

pub use entry::{FoodEntry, FoodPackage};
pub use report::{FeedingStatus, Projection, Reconciliation};
