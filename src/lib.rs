pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;
pub mod tracker;

pub use error::{Result, TrackerError};
pub use models::{FeedingStatus, FoodEntry, FoodPackage, Projection, Reconciliation};
