//! Handler for the `clean` command.

use serde_json::json;

use crate::adapter::inbound::cli::output::Output;
use crate::application::Explorer;
use crate::error::{Error, Result};

/// Execute the clean command.
pub fn execute(explorer: &Explorer<'_>, output: &Output, dry_run: bool) -> Result<()> {
    let outcome = explorer.clean(dry_run)?;

    if output.is_json() {
        let failed: Vec<_> = outcome
            .failed
            .iter()
            .map(|(id, err)| json!({ "file": id.file_name(), "error": err.to_string() }))
            .collect();
        output.json(&json!({
            "command": "clean",
            "dry_run": dry_run,
            "kept": outcome.kept,
            "removed": outcome.removed,
            "failed": failed,
        }))?;
    } else {
        let verb = if dry_run { "Would remove" } else { "Removed" };
        for id in &outcome.removed {
            output.action_done(verb, id.file_name());
        }
        if output.verbosity() > 0 {
            for id in &outcome.kept {
                output.note(&format!("Keeping most recent: {id}"));
            }
        }
        if outcome.removed.is_empty() && outcome.is_clean() {
            output.success("nothing to clean");
        }
    }

    if outcome.is_clean() {
        Ok(())
    } else {
        Err(Error::RetentionIncomplete {
            failed: outcome.failed.len(),
        })
    }
}
