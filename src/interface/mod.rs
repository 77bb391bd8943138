pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_date, prompt_new_entry, prompt_positive_count, prompt_positive_number, prompt_unit,
    prompt_yes_no, resolve_entry_id,
};
pub use render::{display_entry_list, display_projections, display_reconciliation};
