//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `postbench_core` linkage.
//! - Run one in-memory workbench round-trip for quick local sanity
//!   checks; output stays deterministic.

use postbench_core::db::open_db_in_memory;
use postbench_core::{
    DraftAction, DraftForm, LogNotifier, SqliteContentStore, SqliteSettingsStore, Workbench,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("postbench_core ping={}", postbench_core::ping());
    println!("postbench_core version={}", postbench_core::core_version());

    let conn = open_db_in_memory()?;
    let mut bench = Workbench::new(
        SqliteContentStore::new(&conn),
        SqliteSettingsStore::new(&conn),
        LogNotifier,
    );
    bench.initialize()?;

    let mut form = DraftForm::new();
    form.dispatch(DraftAction::SetTitle("smoke".to_string()));
    form.dispatch(DraftAction::SetBody("round trip".to_string()));
    let outcome = form.submit(&mut bench)?;
    println!("submitted id={}", outcome.record.id.unwrap_or_default());

    let stored = bench.contents()[0].clone();
    bench.delete(&stored)?;
    bench.undo_delete()?;
    println!(
        "contents={} theme={}",
        bench.contents().len(),
        bench.theme().theme
    );

    Ok(())
}
