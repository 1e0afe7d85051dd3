//! Migration execution.
//!
//! Runs row plans against a [`ControllerApi`], destination side first: the
//! destination BD and EPG must exist and be deployed before any source-side
//! object is touched, and static ports must leave the source EPG before the
//! destination deployment claims them. The batch is best effort; a failing
//! row is recorded and the remaining rows still run.

use std::time::Duration;

use ndo_core::entities::Schema;
use ndo_core::rows::SelectionRow;

use crate::api::ControllerApi;
use crate::error::MigrateError;
use crate::plan::{RowPlan, plan_row};

/// What happened to one selection row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// All steps completed.
    Migrated,
    /// Destination tenant unchanged; no calls made.
    Noop,
    /// Planning rejected the row; no calls made.
    Skipped(String),
    /// Execution started but a step failed. The row may be partially
    /// migrated and needs operator attention.
    Failed(String),
}

/// Batch summary, one entry per input row in order.
#[derive(Debug, Default)]
pub struct MigrationReport {
    pub outcomes: Vec<RowOutcome>,
}

impl MigrationReport {
    fn count(&self, matches: impl Fn(&RowOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| matches(o)).count()
    }

    #[must_use]
    pub fn migrated(&self) -> usize {
        self.count(|o| *o == RowOutcome::Migrated)
    }

    #[must_use]
    pub fn noop(&self) -> usize {
        self.count(|o| *o == RowOutcome::Noop)
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, RowOutcome::Skipped(_)))
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, RowOutcome::Failed(_)))
    }

    /// True when no row failed mid-flight.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }
}

/// Execute one planned row.
///
/// # Errors
///
/// Returns the first step failure; earlier steps are not rolled back.
pub async fn execute_row<A: ControllerApi>(
    api: &A,
    plan: &RowPlan,
    grace: Duration,
) -> Result<(), MigrateError> {
    let (src, dst) = (&plan.src, &plan.dst);

    // Destination BD, template and site level, deployed before anything else.
    api.add_template_bd(&dst.schema_id, &dst.template, &plan.dst_bd_template)
        .await?;
    api.replace_site_bd(
        &dst.schema_id,
        &dst.site_id,
        &dst.template,
        &dst.bd,
        &plan.dst_bd_site,
    )
    .await?;
    api.deploy_and_wait(&dst.schema_id, &dst.template).await?;

    // Destination EPG rehomed onto the new BD.
    api.add_template_epg(
        &dst.schema_id,
        &dst.template,
        &dst.anp,
        &plan.dst_epg_template,
    )
    .await?;
    api.replace_site_epg(
        &dst.schema_id,
        &dst.site_id,
        &dst.template,
        &dst.anp,
        &dst.epg,
        &plan.dst_epg_site,
    )
    .await?;

    // Static ports must leave the source before the destination claims them.
    api.replace_site_epg_static_ports(
        &src.schema_id,
        &src.site_id,
        &src.template,
        &src.anp,
        &src.epg,
        &[],
    )
    .await?;
    api.deploy_and_wait(&src.schema_id, &src.template).await?;

    tracing::info!(secs = grace.as_secs(), "waiting for switches to release ports");
    tokio::time::sleep(grace).await;

    api.deploy_and_wait(&dst.schema_id, &dst.template).await?;

    // Source side is only torn down once the destination carries traffic.
    api.remove_template_epg(&src.schema_id, &src.template, &src.anp, &src.epg)
        .await?;
    api.remove_template_bd(&src.schema_id, &src.template, &src.bd)
        .await?;
    api.deploy_and_wait(&src.schema_id, &src.template).await?;

    Ok(())
}

/// Plan and execute every selection row sequentially.
pub async fn run_batch<A: ControllerApi>(
    api: &A,
    rows: &[SelectionRow],
    schemas: &[Schema],
    grace: Duration,
) -> MigrationReport {
    let mut report = MigrationReport::default();
    for (idx, row) in rows.iter().enumerate() {
        let outcome = match plan_row(row, schemas) {
            Ok(None) => RowOutcome::Noop,
            Ok(Some(plan)) => {
                tracing::info!(
                    row = idx + 1,
                    bd = %row.src_bd,
                    epg = %row.src_epg,
                    from = %row.src_tenant_id,
                    to = %row.dst_tenant_id,
                    "migrating"
                );
                match execute_row(api, &plan, grace).await {
                    Ok(()) => RowOutcome::Migrated,
                    Err(err) => {
                        tracing::error!(row = idx + 1, error = %err, "migration step failed");
                        RowOutcome::Failed(err.to_string())
                    }
                }
            }
            Err(err) => {
                tracing::error!(row = idx + 1, error = %err, "row rejected during planning");
                RowOutcome::Skipped(err.to_string())
            }
        };
        report.outcomes.push(outcome);
    }

    tracing::info!(
        migrated = report.migrated(),
        noop = report.noop(),
        skipped = report.skipped(),
        failed = report.failed(),
        "migration batch finished"
    );
    report
}
