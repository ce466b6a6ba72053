//! Migrate command
//!
//! Usage: curvecat migrate

use crate::commands::store::StoreArgs;

pub fn execute(store: &StoreArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (config, conn) = store.open()?;
    let applied: i64 = conn.query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))?;
    println!(
        "✓ Catalog ready at {} ({} migrations applied)",
        config.db_path.display(),
        applied
    );
    Ok(())
}
