//! `ndomig --get`: pull everything from the controller and write the workbook.

use std::path::Path;

use anyhow::Context;
use ndo_client::NdoClient;
use ndo_sheet::ExportData;

use crate::progress::Progress;

pub async fn handle(client: &NdoClient, filename: &Path) -> anyhow::Result<()> {
    let progress = Progress::spinner("fetching controller inventory");

    let sites = client.sites().await.context("failed to fetch sites")?;
    let tenants = client.tenants().await.context("failed to fetch tenants")?;
    progress.set_message("fetching schemas");
    let schemas = client.schemas().await.context("failed to fetch schemas")?;

    progress.set_message("writing workbook");
    let data = ExportData {
        sites,
        tenants,
        schemas,
    };
    ndo_sheet::write_workbook(filename, &data)
        .with_context(|| format!("failed to write workbook '{}'", filename.display()))?;

    progress.finish_ok(&format!("exported to {}", filename.display()));
    Ok(())
}
