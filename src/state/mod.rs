pub mod manager;
pub mod persistence;

pub use manager::EntryStore;
pub use persistence::{load_entries, save_entries};
