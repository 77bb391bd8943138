use chrono::{Local, NaiveDate};
use clap::Parser;
use std::path::Path;

use pet_food_tracker_rs::cli::{Cli, Command};
use pet_food_tracker_rs::error::{Result, TrackerError};
use pet_food_tracker_rs::interface::{
    display_entry_list, display_projections, display_reconciliation, prompt_new_entry,
    prompt_yes_no, resolve_entry_id,
};
use pet_food_tracker_rs::models::Projection;
use pet_food_tracker_rs::state::{load_entries, save_entries, EntryStore};
use pet_food_tracker_rs::tracker::{project, reconcile};
use pet_food_tracker_rs::FoodEntry;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let today = Local::now().date_naive();

    match command {
        Command::Status { pet } => cmd_status(&cli.file, pet.as_deref(), today),
        Command::List => cmd_list(&cli.file),
        Command::Add => cmd_add(&cli.file, today),
        Command::Finish { id, date } => cmd_finish(&cli.file, &id, date.as_deref(), today),
        Command::SetFinishDate { id, date } => cmd_set_finish_date(&cli.file, &id, &date),
        Command::Report { id } => cmd_report(&cli.file, &id),
        Command::Remove { id } => cmd_remove(&cli.file, &id),
    }
}

fn load_store(file_path: &str) -> Result<Option<EntryStore>> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Entries file not found: {}", file_path);
        eprintln!("Use 'add' to create your first entry.");
        return Ok(None);
    }

    let entries = load_entries(path)?;
    Ok(Some(EntryStore::new(entries)))
}

/// Look up an entry id, fuzzy-matching user input against the store.
fn find_entry_id(store: &EntryStore, input: &str) -> Result<String> {
    let entries = store.all_entries();
    resolve_entry_id(&entries, input)?
        .ok_or_else(|| TrackerError::EntryNotFound(input.to_string()))
}

/// Show supply projections for active entries.
fn cmd_status(file_path: &str, pet: Option<&str>, today: NaiveDate) -> Result<()> {
    let Some(store) = load_store(file_path)? else {
        return Ok(());
    };

    let mut active: Vec<&FoodEntry> = match pet {
        Some(pet_id) => store
            .entries_for_pet(pet_id)
            .into_iter()
            .filter(|e| e.is_active())
            .collect(),
        None => store.active_entries(),
    };
    active.sort_by(|a, b| a.id.cmp(&b.id));

    if active.is_empty() {
        println!("No active entries.");
        return Ok(());
    }

    let mut rows: Vec<(&FoodEntry, Projection)> = Vec::with_capacity(active.len());
    for entry in active {
        rows.push((entry, project(entry, today)?));
    }

    display_projections(&rows);
    Ok(())
}

/// List all entries, active and finished.
fn cmd_list(file_path: &str) -> Result<()> {
    let Some(store) = load_store(file_path)? else {
        return Ok(());
    };

    let mut active = store.active_entries();
    active.sort_by(|a, b| a.id.cmp(&b.id));
    display_entry_list(&active, "Active entries");

    let mut finished = store.finished_entries();
    finished.sort_by(|a, b| a.id.cmp(&b.id));
    display_entry_list(&finished, "Finished entries");

    Ok(())
}

/// Add a new entry interactively.
fn cmd_add(file_path: &str, today: NaiveDate) -> Result<()> {
    let path = Path::new(file_path);
    let entries = if path.exists() {
        load_entries(path)?
    } else {
        Vec::new()
    };
    let mut store = EntryStore::new(entries);

    let entry = prompt_new_entry(today)?;
    let id = entry.id.clone();
    store.add(entry, today)?;

    save_entries(path, &store.to_entries())?;
    println!("Added entry {}. State saved.", id);
    Ok(())
}

/// Mark an entry finished and show its feeding report.
fn cmd_finish(file_path: &str, id: &str, date: Option<&str>, today: NaiveDate) -> Result<()> {
    let Some(mut store) = load_store(file_path)? else {
        return Ok(());
    };

    let id = find_entry_id(&store, id)?;
    let finish_date = match date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")?,
        None => today,
    };

    store.mark_finished(&id, finish_date)?;

    let entry = store.get_required(&id)?;
    let report = reconcile(entry)?;
    display_reconciliation(entry, &report);

    let save = prompt_yes_no("Save updated entries?", true)?;
    if save {
        save_entries(file_path, &store.to_entries())?;
        println!("Entries saved.");
    }

    Ok(())
}

/// Correct the finish date of an already-finished entry.
///
/// Reconciliation is a pure view, so the corrected report is recomputed
/// wholesale from the edited dates.
fn cmd_set_finish_date(file_path: &str, id: &str, date: &str) -> Result<()> {
    let Some(mut store) = load_store(file_path)? else {
        return Ok(());
    };

    let id = find_entry_id(&store, id)?;
    let finish_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")?;

    store.set_finish_date(&id, finish_date)?;

    let entry = store.get_required(&id)?;
    let report = reconcile(entry)?;
    display_reconciliation(entry, &report);

    save_entries(file_path, &store.to_entries())?;
    println!("Entries saved.");
    Ok(())
}

/// Show the feeding report for a finished entry.
fn cmd_report(file_path: &str, id: &str) -> Result<()> {
    let Some(store) = load_store(file_path)? else {
        return Ok(());
    };

    let id = find_entry_id(&store, id)?;
    let entry = store.get_required(&id)?;

    if entry.is_active() {
        println!(
            "Entry {} is still active. Use 'finish' to close it out first.",
            id
        );
        return Ok(());
    }

    let report = reconcile(entry)?;
    display_reconciliation(entry, &report);
    Ok(())
}

/// Delete an entry.
fn cmd_remove(file_path: &str, id: &str) -> Result<()> {
    let Some(mut store) = load_store(file_path)? else {
        return Ok(());
    };

    let id = find_entry_id(&store, id)?;
    let entry = store.get_required(&id)?;
    println!("Removing {} {}", entry.id, entry.describe());

    let confirm = prompt_yes_no("Delete this entry?", false)?;
    if !confirm {
        println!("Aborted.");
        return Ok(());
    }

    store.remove(&id)?;
    save_entries(file_path, &store.to_entries())?;
    println!("Entry removed. State saved.");
    Ok(())
}
