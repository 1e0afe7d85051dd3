//! `ndomig --put`: read the edited selection sheet and run the batch.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use ndo_client::NdoClient;
use ndo_config::MigrateConfig;
use ndo_migrate::{LiveController, RowOutcome};

use crate::progress::Progress;

pub async fn handle(
    client: &NdoClient,
    config: &MigrateConfig,
    filename: &Path,
) -> anyhow::Result<()> {
    let rows = ndo_sheet::read_selection(filename)
        .with_context(|| format!("failed to read workbook '{}'", filename.display()))?;
    if rows.is_empty() {
        anyhow::bail!("the EPG Selection sheet has no usable rows");
    }

    let schemas = client
        .schemas()
        .await
        .context("failed to fetch live schemas")?
        .schemas;

    let api = LiveController::new(
        client.clone(),
        Duration::from_millis(config.poll_interval_ms),
        config.poll_attempts,
    );
    let grace = Duration::from_secs(config.grace_secs);

    // Row-at-a-time so the bar tracks real work, not just planning.
    let progress = Progress::bar(rows.len() as u64, "migrating");
    let mut report = ndo_migrate::MigrationReport::default();
    for row in &rows {
        progress.set_message(&format!("{}/{}", row.src_bd, row.src_epg));
        let batch = ndo_migrate::run_batch(&api, std::slice::from_ref(row), &schemas, grace).await;
        report.outcomes.extend(batch.outcomes);
        progress.inc(1);
    }

    let summary = format!(
        "{} migrated, {} unchanged, {} skipped, {} failed",
        report.migrated(),
        report.noop(),
        report.skipped(),
        report.failed()
    );
    if report.is_clean() {
        progress.finish_ok(&summary);
    } else {
        progress.finish_err(&summary);
    }

    for (row, outcome) in rows.iter().zip(&report.outcomes) {
        match outcome {
            RowOutcome::Skipped(reason) => {
                tracing::warn!(bd = %row.src_bd, epg = %row.src_epg, reason, "row skipped");
            }
            RowOutcome::Failed(reason) => {
                tracing::error!(bd = %row.src_bd, epg = %row.src_epg, reason, "row failed");
            }
            RowOutcome::Migrated | RowOutcome::Noop => {}
        }
    }

    if report.is_clean() {
        Ok(())
    } else {
        anyhow::bail!("{} row(s) failed mid-migration; see the log file", report.failed())
    }
}
