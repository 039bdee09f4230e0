//! Handlers for the `list` and `visited` diagnostic commands.

use serde_json::json;
use tabled::Tabled;

use crate::adapter::inbound::cli::output::Output;
use crate::application::Explorer;
use crate::error::Result;

#[derive(Tabled)]
struct SnapshotRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Captured")]
    captured: String,
}

/// List every snapshot file.
pub fn list(explorer: &Explorer<'_>, output: &Output) -> Result<()> {
    let snapshots = explorer.snapshots()?;

    if output.is_json() {
        return output.json(&json!({
            "command": "list",
            "snapshots": snapshots,
        }));
    }

    if snapshots.is_empty() {
        output.warning("no snapshot files found");
        output.hint("point --data-dir at the market connector's output directory");
        return Ok(());
    }

    output.section("Snapshot files");
    output.table(snapshots.iter().map(|id| SnapshotRow {
        file: id.file_name().to_string(),
        kind: id.kind().to_string(),
        location: id.location().to_string(),
        captured: id.timestamp().to_string(),
    }));
    Ok(())
}

/// List every visited location, one per line.
pub fn visited(explorer: &Explorer<'_>, output: &Output) -> Result<()> {
    let locations = explorer.visited()?;

    if output.is_json() {
        return output.json(&json!({
            "command": "visited",
            "locations": locations,
        }));
    }

    if locations.is_empty() {
        output.warning("no visited locations");
        return Ok(());
    }

    for location in &locations {
        output.plain(location);
    }
    Ok(())
}
