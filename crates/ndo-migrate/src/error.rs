//! Migration error types.

use ndo_client::ApiError;
use thiserror::Error;

/// Errors raised while planning or executing a migration row.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// A controller call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The selection row names a schema the controller does not have.
    #[error("schema '{schema_id}' not found on the controller")]
    UnknownSchema { schema_id: String },

    /// The selection row names a template missing from its schema.
    #[error("template '{template}' not found in schema '{schema_id}'")]
    UnknownTemplate { schema_id: String, template: String },

    /// The destination template belongs to a different tenant than the row
    /// claims, so the migration would land objects in the wrong tenant.
    #[error(
        "template '{template}' belongs to tenant '{actual}', not the requested tenant '{requested}'"
    )]
    TenantMismatch {
        template: String,
        requested: String,
        actual: String,
    },

    /// Source BD is gone from the template.
    #[error("BD '{bd}' not found in template '{template}'")]
    UnknownBd { template: String, bd: String },

    /// Source EPG is gone from the template ANP.
    #[error("EPG '{epg}' not found in ANP '{anp}' of template '{template}'")]
    UnknownEpg {
        template: String,
        anp: String,
        epg: String,
    },

    /// The schema has no site overlay for the (site, template) pair.
    #[error("site '{site_id}' has no overlay for template '{template}'")]
    MissingSiteOverlay { site_id: String, template: String },

    /// The site overlay has no state for the object the row moves.
    #[error("site '{site_id}' has no local state for '{object_ref}'")]
    MissingSiteState { site_id: String, object_ref: String },
}
